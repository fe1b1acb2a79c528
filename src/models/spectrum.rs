//! # Raman 光谱数据模型
//!
//! 存储从 ORCA 输出提取的 RAMAN SPECTRUM 表格数据。
//!
//! ## 依赖关系
//! - 被 `parsers/orca_out.rs` 填充
//! - 被 `spectra/`, `commands/` 使用

use serde::{Deserialize, Serialize};

/// 单个振动模式的 Raman 数据行
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RamanMode {
    /// 模式编号（ORCA 输出中的行首序号）
    pub mode: usize,

    /// 振动频率 (cm⁻¹)
    pub frequency: f64,

    /// Raman 活性
    pub activity: f64,

    /// 退偏振比
    pub depolarization: f64,
}

/// Raman 光谱：按 ORCA 输出顺序排列的模式序列（不重排）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RamanSpectrum {
    pub modes: Vec<RamanMode>,
}

impl RamanSpectrum {
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// 频率序列 (cm⁻¹)，与 `activities()` 平行
    pub fn frequencies(&self) -> Vec<f64> {
        self.modes.iter().map(|m| m.frequency).collect()
    }

    /// 活性序列，与 `frequencies()` 平行
    pub fn activities(&self) -> Vec<f64> {
        self.modes.iter().map(|m| m.activity).collect()
    }
}

/// 一次 ORCA 计算的解析结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamanResult {
    /// 作业名称
    pub job_name: String,

    /// 计算是否正常结束（检测到 "ORCA TERMINATED NORMALLY"）
    pub is_finished: bool,

    /// 提取到的 Raman 光谱（可能为空）
    pub spectrum: RamanSpectrum,
}

impl RamanResult {
    pub fn new(job_name: impl Into<String>) -> Self {
        RamanResult {
            job_name: job_name.into(),
            is_finished: false,
            spectrum: RamanSpectrum::default(),
        }
    }
}
