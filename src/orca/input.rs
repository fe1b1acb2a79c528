//! # ORCA 输入文件生成
//!
//! 由分子几何生成 Raman（数值频率）计算的 ORCA 输入文件。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs`, `commands/run.rs` 使用
//! - 使用 `models/geometry.rs`

use crate::error::{RamanError, Result};
use crate::models::Geometry;
use std::fs;
use std::path::{Path, PathBuf};

/// ORCA 输入配置
pub struct InputConfig {
    pub method: String,
    pub basis: String,
    pub job_name: String,
    pub charge: i32,
    pub multiplicity: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            method: "BP86".to_string(),
            basis: "def2-SVP".to_string(),
            job_name: "raman_job".to_string(),
            charge: 0,
            multiplicity: 1,
        }
    }
}

/// 生成 `<jobname>.inp` 并返回其路径
///
/// 模板：方法/基组行请求几何优化加数值频率，%elprop 块请求极化率；
/// 坐标行逐字复制，末尾以 `*` 收尾。已存在的同名文件会被直接覆盖。
pub fn generate_input(geometry: &Geometry, config: &InputConfig, work_dir: &Path) -> Result<PathBuf> {
    let mut content = format!(
        r#"! {} {} OPT NUMFREQ

%elprop
   POLAR 1
end

* xyz {} {}
"#,
        config.method, config.basis, config.charge, config.multiplicity,
    );

    for line in &geometry.coord_lines {
        content.push_str(line);
        content.push('\n');
    }
    content.push_str("*\n");

    let inp_path = work_dir.join(format!("{}.inp", config.job_name));
    fs::write(&inp_path, content).map_err(|e| RamanError::FileWriteError {
        path: inp_path.display().to_string(),
        source: e,
    })?;

    Ok(inp_path)
}
