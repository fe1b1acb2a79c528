//! # generate 命令实现
//!
//! 读入 .xyz 几何，生成 ORCA Raman 输入文件，不运行计算。
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `parsers/xyz.rs`, `orca/input.rs`
//! - 使用 `utils/output.rs`

use crate::cli::generate::GenerateArgs;
use crate::error::{RamanError, Result};
use crate::orca::{self, InputConfig};
use crate::parsers::xyz;
use crate::utils::output;

use std::fs;

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    output::print_header("Generating ORCA Raman Input");

    if !args.geometry.exists() {
        return Err(RamanError::FileNotFound {
            path: args.geometry.display().to_string(),
        });
    }

    let geometry = xyz::parse_xyz_file(&args.geometry)?;
    output::print_info(&format!(
        "Loaded geometry '{}': {} atoms ({})",
        geometry.name,
        geometry.natoms(),
        geometry.formula()
    ));

    fs::create_dir_all(&args.work_dir).map_err(|e| RamanError::FileWriteError {
        path: args.work_dir.display().to_string(),
        source: e,
    })?;

    let job_name = args
        .job_name
        .clone()
        .unwrap_or_else(|| format!("raman_{}", geometry.name));

    let config = InputConfig {
        method: args.method,
        basis: args.basis,
        job_name,
        charge: args.charge,
        multiplicity: args.multiplicity,
    };

    let inp_path = orca::generate_input(&geometry, &config, &args.work_dir)?;
    output::print_success(&format!("Input written to '{}'", inp_path.display()));
    output::print_info(&format!(
        "Run it with: orca {} > {}.out",
        inp_path.display(),
        config.job_name
    ));

    Ok(())
}
