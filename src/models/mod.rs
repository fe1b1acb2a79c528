//! # 数据模型模块
//!
//! 定义分子几何与 Raman 光谱的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `orca/`, `spectra/`, `commands/` 使用
//! - 子模块: geometry, spectrum

pub mod geometry;
pub mod spectrum;

pub use geometry::Geometry;
pub use spectrum::{RamanMode, RamanResult, RamanSpectrum};
