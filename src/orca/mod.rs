//! # ORCA 集成模块
//!
//! 负责与外部 ORCA 程序的全部交互：输入文件生成与子进程调用。
//! ORCA 本身的数值方法不在本工具范围内。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs`, `commands/run.rs` 使用
//! - 子模块: input, runner

pub mod input;
pub mod runner;

pub use input::{generate_input, InputConfig};
pub use runner::run_orca;
