//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `generate`: 由 .xyz 几何文件生成 ORCA 输入
//! - `run`: 完整 Raman 工作流
//! - `analyze`: 后处理已有的 ORCA 输出（单个或批量）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate, run, analyze

pub mod analyze;
pub mod generate;
pub mod run;

use clap::{Parser, Subcommand};

/// Ramankit - ORCA Raman 工作流工具箱
#[derive(Parser)]
#[command(name = "ramankit")]
#[command(version)]
#[command(about = "A Raman spectroscopy workflow toolkit for the ORCA quantum chemistry package", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an ORCA Raman input file from an .xyz geometry
    Generate(generate::GenerateArgs),

    /// Run the full workflow: generate input, run ORCA, parse, correct, plot
    Run(run::RunArgs),

    /// Post-process existing ORCA output files (single file or batch)
    Analyze(analyze::AnalyzeArgs),
}
