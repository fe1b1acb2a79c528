//! # 光谱数据导出
//!
//! 导出后处理完成的光谱到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: mode, frequency_cm, wavelength_nm, activity, factor, intensity
//! - XY: 两列数据交换格式（位移, 强度），`#` 注释头
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/analyze.rs` 调用
//! - 使用 `spectra/mod.rs` 的 ProcessedMode 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{RamanError, Result};
use crate::spectra::ProcessedMode;

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 导出为 CSV 格式
pub fn to_csv(modes: &[ProcessedMode], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(RamanError::CsvError)?;

    wtr.write_record([
        "mode",
        "frequency_cm",
        "wavelength_nm",
        "activity",
        "factor",
        "intensity",
    ])
    .map_err(RamanError::CsvError)?;

    for m in modes {
        wtr.write_record([
            m.mode.to_string(),
            format!("{:.2}", m.frequency),
            format!("{:.4}", m.wavelength),
            format!("{:.6}", m.activity),
            format!("{:.6}", m.factor),
            format!("{:.6}", m.intensity),
        ])
        .map_err(RamanError::CsvError)?;
    }

    wtr.flush().map_err(|e| RamanError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为 XY 格式
pub fn to_xy(
    modes: &[ProcessedMode],
    job_name: &str,
    temperature_k: f64,
    laser_nm: f64,
    output_path: &Path,
) -> Result<()> {
    let write_err = |e: std::io::Error| RamanError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let mut file = File::create(output_path).map_err(write_err)?;

    writeln!(file, "# Raman Spectrum: {}", job_name).map_err(write_err)?;
    writeln!(file, "# Temperature: {:.2} K", temperature_k).map_err(write_err)?;
    writeln!(file, "# Laser: {:.1} nm", laser_nm).map_err(write_err)?;
    writeln!(file, "# Columns: Raman shift (cm-1), Intensity (corrected)").map_err(write_err)?;
    writeln!(file, "#").map_err(write_err)?;

    for m in modes {
        writeln!(file, "{:.2}\t{:.6}", m.frequency, m.intensity).map_err(write_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_modes() -> Vec<ProcessedMode> {
        vec![
            ProcessedMode {
                mode: 1,
                frequency: 100.0,
                wavelength: 534.9,
                activity: 0.5,
                factor: 2.5,
                intensity: 1.25,
            },
            ProcessedMode {
                mode: 2,
                frequency: 200.0,
                wavelength: 537.7,
                activity: 1.5,
                factor: 1.8,
                intensity: 2.7,
            },
        ]
    }

    #[test]
    fn test_csv_export() {
        let path = std::env::temp_dir().join("ramankit_export_test.csv");
        to_csv(&sample_modes(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "mode,frequency_cm,wavelength_nm,activity,factor,intensity"
        );
        assert_eq!(lines.next().unwrap(), "1,100.00,534.9000,0.500000,2.500000,1.250000");
        assert_eq!(lines.count(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_xy_export() {
        let path = std::env::temp_dir().join("ramankit_export_test.xy");
        to_xy(&sample_modes(), "water", 300.0, 532.0, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Raman Spectrum: water"));
        assert!(content.contains("100.00\t1.250000"));
        assert!(content.contains("200.00\t2.700000"));

        std::fs::remove_file(&path).ok();
    }
}
