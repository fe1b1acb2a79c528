//! # ORCA 输出解析器
//!
//! 从 ORCA 输出文件中提取 "RAMAN SPECTRUM" 表格。
//!
//! ## 表格格式说明
//! ```text
//! -----------
//! RAMAN SPECTRUM
//! -----------
//!
//!  Mode    freq (cm**-1)   Activity   Depolarization
//! -------------------------------------------------------------------
//!    6:       331.46      0.294356      0.328512
//!    7:       816.72      3.974647      0.748100
//! ```
//!
//! 扫描采用显式行状态机 {BeforeSection, InSection, SectionClosed}：
//! 遇到段落标记进入 InSection；段内跳过空行、横线和表头行；
//! 数据行用严格的数值行匹配器提取。段内第一个既不可跳过又不匹配的行
//! 即视为段落结束（无显式结束标记）。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/analyze.rs` 使用
//! - 使用 `models/spectrum.rs`
//! - 使用 `regex` 匹配数据行

use crate::error::{RamanError, Result};
use crate::models::{RamanMode, RamanResult};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// RAMAN SPECTRUM 段落标记
const RAMAN_MARKER: &str = "RAMAN SPECTRUM";

/// ORCA 正常结束标记
const TERMINATION_MARKER: &str = "ORCA TERMINATED NORMALLY";

/// 段落扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// 尚未遇到段落标记
    BeforeSection,
    /// 段内，正在收集数据行
    InSection,
    /// 段落已结束；之后的数据行和重复标记一律忽略
    SectionClosed,
}

/// 解析 ORCA 输出文件
pub fn parse_orca_output(path: &Path, job_name: &str) -> Result<RamanResult> {
    let file = File::open(path).map_err(|e| RamanError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let lines = reader.lines().map_while(|l| l.ok());
    Ok(scan_lines(lines, job_name))
}

/// 从字符串内容解析（测试与管道复用）
pub fn parse_orca_content(content: &str, job_name: &str) -> RamanResult {
    scan_lines(content.lines().map(|l| l.to_string()), job_name)
}

/// 逐行扫描的核心状态机
fn scan_lines(lines: impl Iterator<Item = String>, job_name: &str) -> RamanResult {
    // 数值行：`<序号>:` 后跟三个十进制数（频率、活性、退偏振比）。
    // 数值字段只接受数字和小数点：不处理负号和科学计数法，
    // 与原始表格的字面形状保持一致。
    let row = Regex::new(r"^\s*(\d+):\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)").unwrap();

    let mut result = RamanResult::new(job_name);
    let mut state = ScanState::BeforeSection;

    for line in lines {
        if line.contains(TERMINATION_MARKER) {
            result.is_finished = true;
        }

        match state {
            ScanState::BeforeSection => {
                if line.contains(RAMAN_MARKER) {
                    state = ScanState::InSection;
                }
            }
            ScanState::InSection => {
                // 空行、横线、表头行跳过
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with("---") || line.contains("Mode") {
                    continue;
                }

                match row.captures(&line) {
                    Some(caps) => {
                        // 捕获组的字面形状保证 parse 不会失败
                        let mode: usize = caps[1].parse().unwrap_or(0);
                        let frequency: f64 = caps[2].parse().unwrap_or(0.0);
                        let activity: f64 = caps[3].parse().unwrap_or(0.0);
                        let depolarization: f64 = caps[4].parse().unwrap_or(0.0);

                        result.spectrum.modes.push(RamanMode {
                            mode,
                            frequency,
                            activity,
                            depolarization,
                        });
                    }
                    None => {
                        // 段内第一个不匹配的行即段落结束。
                        // 之后哪怕再次出现 RAMAN SPECTRUM 标记也不重开段落，
                        // 与原始工具的行为一致。
                        state = ScanState::SectionClosed;
                    }
                }
            }
            // 继续扫描只为找结束标记
            ScanState::SectionClosed => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
some unrelated output
-----------
RAMAN SPECTRUM
-----------

 Mode    freq (cm**-1)   Activity   Depolarization
-------------------------------------------------------------------
   1:    100.0   0.5   0.1
   2:   200.0   1.5   0.2

                     ****ORCA TERMINATED NORMALLY****
"#;

    #[test]
    fn test_extract_rows() {
        let result = parse_orca_content(SAMPLE, "job");
        assert_eq!(result.spectrum.frequencies(), vec![100.0, 200.0]);
        assert_eq!(result.spectrum.activities(), vec![0.5, 1.5]);
        assert!(result.is_finished);
    }

    #[test]
    fn test_depolarization_retained() {
        let result = parse_orca_content(SAMPLE, "job");
        assert_eq!(result.spectrum.modes[1].mode, 2);
        assert!((result.spectrum.modes[1].depolarization - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_no_marker_yields_empty() {
        let content = "nothing to see here\njust noise\n";
        let result = parse_orca_content(content, "job");
        assert!(result.spectrum.is_empty());
        assert!(!result.is_finished);
    }

    #[test]
    fn test_first_nonmatching_line_ends_section() {
        let content = r#"RAMAN SPECTRUM
   1:    100.0   0.5   0.1
The vibrational frequencies were scaled.
   2:    200.0   1.5   0.2
"#;
        let result = parse_orca_content(content, "job");
        // 自由文本之后的行不再收集，即使它们本可以匹配
        assert_eq!(result.spectrum.frequencies(), vec![100.0]);
    }

    #[test]
    fn test_negative_number_ends_section() {
        // 数值字段不接受负号：带负频率的行终止扫描
        let content = r#"RAMAN SPECTRUM
   1:    100.0   0.5   0.1
   2:   -20.0   1.5   0.2
   3:    300.0   2.5   0.3
"#;
        let result = parse_orca_content(content, "job");
        assert_eq!(result.spectrum.frequencies(), vec![100.0]);
    }

    #[test]
    fn test_second_marker_not_reopened() {
        let content = r#"RAMAN SPECTRUM
   1:    100.0   0.5   0.1
end of table
RAMAN SPECTRUM
   2:    200.0   1.5   0.2
"#;
        let result = parse_orca_content(content, "job");
        assert_eq!(result.spectrum.len(), 1);
    }

    #[test]
    fn test_header_and_rule_lines_skipped() {
        let content = r#"RAMAN SPECTRUM

 Mode    freq (cm**-1)   Activity   Depolarization
----------------------------------------------------
   9:      331.46      0.294356      0.328512
"#;
        let result = parse_orca_content(content, "job");
        assert_eq!(result.spectrum.len(), 1);
        assert!((result.spectrum.modes[0].frequency - 331.46).abs() < 1e-12);
        assert_eq!(result.spectrum.modes[0].mode, 9);
    }
}
