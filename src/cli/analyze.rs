//! # analyze 子命令 CLI 定义
//!
//! 后处理已有的 ORCA 输出文件。共享的光谱参数枚举
//! （散射分支、x 轴模式、输出格式）也定义在此，供 `run` 复用。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/run.rs` 使用
//! - 参数传递给 `commands/analyze.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// 共享光谱参数枚举
// ─────────────────────────────────────────────────────────────

/// 散射分支
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ScatteringBranch {
    /// Stokes scattering (photon loses one vibrational quantum)
    #[default]
    Stokes,
    /// Anti-Stokes scattering (photon gains one vibrational quantum)
    AntiStokes,
}

impl ScatteringBranch {
    pub fn is_anti_stokes(self) -> bool {
        matches!(self, ScatteringBranch::AntiStokes)
    }
}

impl std::fmt::Display for ScatteringBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScatteringBranch::Stokes => write!(f, "Stokes"),
            ScatteringBranch::AntiStokes => write!(f, "Anti-Stokes"),
        }
    }
}

/// 光谱 x 轴模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum AxisMode {
    /// Raman shift in cm⁻¹
    #[default]
    Shift,
    /// Scattered wavelength in nm
    Wavelength,
}

/// 光谱输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SpectrumFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (mode, frequency, wavelength, activity, factor, intensity)
    Csv,
    /// XY data file (shift, intensity)
    Xy,
}

// ─────────────────────────────────────────────────────────────
// Analyze 命令参数
// ─────────────────────────────────────────────────────────────

/// analyze 子命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input: ORCA output file, or a directory of output files (batch mode)
    pub input: PathBuf,

    /// Output: file path (single mode) or directory (batch mode); defaults next to the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (auto-detected from the output extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<SpectrumFormat>,

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

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 500)]
    pub height: u32,

    /// Title for the plot (default: job name)
    #[arg(long)]
    pub title: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for input files (batch mode)
    #[arg(long, default_value = "*.out")]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
