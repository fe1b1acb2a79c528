//! # generate 子命令 CLI 定义
//!
//! 只生成 ORCA 输入文件，不运行计算。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use clap::Args;
use std::path::PathBuf;

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Input .xyz geometry file
    pub geometry: PathBuf,

    /// DFT method / functional
    #[arg(short, long, default_value = "BP86")]
    pub method: String,

    /// Basis set
    #[arg(short, long, default_value = "def2-SVP")]
    pub basis: String,

    /// Job name, used for the .inp/.out file names (default: raman_<geometry-stem>)
    #[arg(short, long)]
    pub job_name: Option<String>,

    /// Total charge
    #[arg(long, default_value_t = 0)]
    pub charge: i32,

    /// Spin multiplicity
    #[arg(long, default_value_t = 1)]
    pub multiplicity: u32,

    /// Directory where the input file is written
    #[arg(short, long, default_value = ".")]
    pub work_dir: PathBuf,
}
