//! # Bose–Einstein 布居数校正
//!
//! 计算 Stokes 强度的温度校正因子。对频率为 ν (cm⁻¹) 的模式，
//! 玻色子占据数为
//!
//! ```text
//! n = 1 / (exp(h·c·ν / (k_B·T)) − 1)
//! ```
//!
//! Stokes 散射强度正比于 n + 1，本模块返回该乘子。
//!
//! ## 依赖关系
//! - 被 `spectra/mod.rs` 调用

/// h·c (J·cm)：将 cm⁻¹ 频率换算为能量
pub const HC_JOULE_CM: f64 = 1.98645e-23;

/// Boltzmann 常数 (J/K)，2019 SI 定义值
pub const KB_JOULE_PER_K: f64 = 1.380649e-23;

/// 频率下限 (cm⁻¹)：与波长转换使用同一钳制策略，
/// 避免 ν → 0 时 exp(0)−1 的除零
pub const MIN_FREQUENCY_CM: f64 = 1e-6;

/// 单个频率的布居数校正因子 n + 1
///
/// T → 0 或 ν → ∞ 时因子趋于 1；有限 ν、T > 0 时因子大于 1。
pub fn population_factor(frequency_cm: f64, temperature_k: f64) -> f64 {
    let nu = frequency_cm.max(MIN_FREQUENCY_CM);
    let x = HC_JOULE_CM * nu / (KB_JOULE_PER_K * temperature_k);
    // exp_m1 在 x 很小时比 exp(x)-1 精确
    let n = 1.0 / x.exp_m1();
    n + 1.0
}

/// 对频率序列逐个计算校正因子，保持顺序
pub fn population_factors(frequencies_cm: &[f64], temperature_k: f64) -> Vec<f64> {
    frequencies_cm
        .iter()
        .map(|&nu| population_factor(nu, temperature_k))
        .collect()
}
