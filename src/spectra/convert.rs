//! # 频率-波长转换 (Stokes / Anti-Stokes)
//!
//! 将振动频率 (cm⁻¹) 换算为散射光波长 (nm)：
//!
//! ```text
//! ν_laser = 1e7 / λ_laser
//! ν_s     = ν_laser ∓ ν_vib     (Stokes 取减号，Anti-Stokes 取加号)
//! λ_s     = 1e7 / ν_s
//! ```
//!
//! ν_s ≤ 1e-6 时钳制到 1e-6，避免零净位移（ν_vib 恰等于激光波数）
//! 时的除零。
//!
//! ## 依赖关系
//! - 被 `spectra/mod.rs` 调用

/// nm 与 cm⁻¹ 的换算常数：λ(nm) = 1e7 / ν(cm⁻¹)
const NM_CM: f64 = 1.0e7;

/// 散射波数下限 (cm⁻¹)
pub const MIN_WAVENUMBER_CM: f64 = 1e-6;

/// 激光波数 (cm⁻¹)
pub fn laser_wavenumber(laser_nm: f64) -> f64 {
    NM_CM / laser_nm
}

/// 单个振动频率对应的散射光波长 (nm)
pub fn scattered_wavelength(frequency_cm: f64, laser_nm: f64, anti_stokes: bool) -> f64 {
    let nu_laser = laser_wavenumber(laser_nm);
    let nu_scattered = if anti_stokes {
        nu_laser + frequency_cm
    } else {
        nu_laser - frequency_cm
    };
    NM_CM / nu_scattered.max(MIN_WAVENUMBER_CM)
}

/// 对频率序列逐个转换，保持顺序
pub fn scattered_wavelengths(frequencies_cm: &[f64], laser_nm: f64, anti_stokes: bool) -> Vec<f64> {
    frequencies_cm
        .iter()
        .map(|&nu| scattered_wavelength(nu, laser_nm, anti_stokes))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stokes_round_trip() {
        // λ = 1e7 / (1e7/532 − 1000)
        let expected = 1.0e7 / (1.0e7 / 532.0 - 1000.0);
        let got = scattered_wavelength(1000.0, 532.0, false);
        assert!((got - expected).abs() < 1e-9);
        // Stokes 散射波长比激光波长更长
        assert!(got > 532.0);
    }

    #[test]
    fn test_anti_stokes_uses_plus() {
        let expected = 1.0e7 / (1.0e7 / 532.0 + 1000.0);
        let got = scattered_wavelength(1000.0, 532.0, true);
        assert!((got - expected).abs() < 1e-9);
        assert!(got < 532.0);
    }

    #[test]
    fn test_zero_net_shift_is_clamped() {
        // 振动频率恰等于激光波数：净波数为零，钳制后不除零
        let nu_laser = laser_wavenumber(532.0);
        let got = scattered_wavelength(nu_laser, 532.0, false);
        assert!(got.is_finite());
        assert!((got - NM_CM / MIN_WAVENUMBER_CM).abs() < 1e-3);
    }

    #[test]
    fn test_order_preserved() {
        let lambdas = scattered_wavelengths(&[100.0, 1000.0, 3000.0], 532.0, false);
        assert_eq!(lambdas.len(), 3);
        // 位移越大，Stokes 波长越长
        assert!(lambdas[0] < lambdas[1]);
        assert!(lambdas[1] < lambdas[2]);
    }
}
