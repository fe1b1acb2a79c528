//! # run 子命令 CLI 定义
//!
//! 完整工作流：生成输入 → 运行 ORCA → 解析 → 校正 → 导出/绘图。
//! 原脚本里写死在驱动函数中的全部默认参数在这里成为显式选项。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/analyze.rs` 的共享枚举
//! - 参数传递给 `commands/run.rs`

use super::analyze::{AxisMode, ScatteringBranch};
use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
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

    /// ORCA executable (full path required for parallel ORCA runs)
    #[arg(long, default_value = "orca")]
    pub orca_exec: String,

    /// Working directory for input/output files
    #[arg(short, long, default_value = ".")]
    pub work_dir: PathBuf,

    /// Absolute temperature for the Bose-Einstein population correction (K)
    #[arg(short, long, default_value_t = 298.15)]
    pub temperature: f64,

    /// Excitation laser wavelength (nm)
    #[arg(short, long, default_value_t = 532.0)]
    pub laser: f64,

    /// Scattering branch
    #[arg(long, value_enum, default_value = "stokes")]
    pub branch: ScatteringBranch,

    /// Spectrum x-axis
    #[arg(long, value_enum, default_value = "shift")]
    pub axis: AxisMode,

    /// Filename for the spectrum CSV export (default: <job>_raman.csv in the work dir)
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Filename for the spectrum figure; .svg extension selects SVG output
    /// (default: <job>_raman.png in the work dir)
    #[arg(long)]
    pub output_plot: Option<PathBuf>,

    /// Skip figure generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 500)]
    pub height: u32,

    /// Title for the plot (default: job name)
    #[arg(long)]
    pub title: Option<String>,
}
