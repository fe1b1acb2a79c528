//! # 工具模块
//!
//! 终端输出与进度显示的公共工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `main.rs` 使用
//! - 子模块: output, progress

pub mod output;
pub mod progress;
