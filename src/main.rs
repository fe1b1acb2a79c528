//! # Ramankit - ORCA Raman 工作流工具箱
//!
//! 将手写的 Raman 计算辅助脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `generate` - 由 .xyz 几何文件生成 ORCA 输入
//! - `run`      - 完整流程：生成输入、运行 ORCA、解析、校正、绘图
//! - `analyze`  - 后处理已有的 ORCA 输出文件（单个或批量）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (xyz / ORCA 输出解析器)
//!   │     ├── orca/      (输入生成与外部调用)
//!   │     ├── spectra/   (物理校正、单位转换、绘图、导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod orca;
mod parsers;
mod spectra;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
