//! # 解析器模块
//!
//! 提供 .xyz 几何文件和 ORCA 输出文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xyz, orca_out

pub mod orca_out;
pub mod xyz;
