//! # 光谱后处理模块
//!
//! 将提取到的 Raman 光谱做物理后处理：布居数校正与波长转换。
//!
//! ## 子模块
//! - `correction`: Bose–Einstein 温度校正
//! - `convert`: Stokes/Anti-Stokes 频率-波长转换
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/analyze.rs` 使用
//! - 使用 `models/spectrum.rs`

pub mod convert;
pub mod correction;
pub mod export;
pub mod plot;

use crate::error::{RamanError, Result};
use crate::models::RamanSpectrum;
use serde::{Deserialize, Serialize};

/// 后处理完成的单个模式
///
/// 强度 = 活性 × 布居数因子；所有字段由原始光谱派生，互不修改。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProcessedMode {
    /// 模式编号
    pub mode: usize,
    /// 振动频率 / Raman 位移 (cm⁻¹)
    pub frequency: f64,
    /// 散射光波长 (nm)
    pub wavelength: f64,
    /// 原始 Raman 活性
    pub activity: f64,
    /// 布居数校正因子 (n + 1)
    pub factor: f64,
    /// 校正后强度
    pub intensity: f64,
}

/// 对整个光谱做后处理，保持 ORCA 的输出顺序
pub fn post_process(
    spectrum: &RamanSpectrum,
    temperature_k: f64,
    laser_nm: f64,
    anti_stokes: bool,
) -> Vec<ProcessedMode> {
    let frequencies = spectrum.frequencies();
    let factors = correction::population_factors(&frequencies, temperature_k);
    let wavelengths = convert::scattered_wavelengths(&frequencies, laser_nm, anti_stokes);

    spectrum
        .modes
        .iter()
        .zip(factors)
        .zip(wavelengths)
        .map(|((m, factor), wavelength)| ProcessedMode {
            mode: m.mode,
            frequency: m.frequency,
            wavelength,
            activity: m.activity,
            factor,
            intensity: m.activity * factor,
        })
        .collect()
}

/// 校验实验条件参数
pub fn validate_conditions(temperature_k: f64, laser_nm: f64) -> Result<()> {
    if !(temperature_k >= 0.0) {
        return Err(RamanError::InvalidArgument(format!(
            "Temperature must be non-negative (got {} K)",
            temperature_k
        )));
    }
    if !(laser_nm > 0.0) {
        return Err(RamanError::InvalidArgument(format!(
            "Laser wavelength must be positive (got {} nm)",
            laser_nm
        )));
    }
    Ok(())
}
