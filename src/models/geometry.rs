//! # 分子几何数据模型
//!
//! 存储从 .xyz 文件读入的分子几何。坐标行原样保留，
//! ORCA 输入生成时逐字复制，不做数值再解析。
//!
//! ## 依赖关系
//! - 被 `parsers/xyz.rs`, `orca/input.rs` 使用

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 分子几何
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    /// 几何名称（通常取自文件名）
    pub name: String,

    /// .xyz 第二行的注释
    pub comment: String,

    /// 坐标行（逐字保留，每行一个原子：元素符号 + 三个坐标）
    pub coord_lines: Vec<String>,
}

impl Geometry {
    pub fn new(name: impl Into<String>, comment: impl Into<String>, coord_lines: Vec<String>) -> Self {
        Geometry {
            name: name.into(),
            comment: comment.into(),
            coord_lines,
        }
    }

    /// 原子数
    pub fn natoms(&self) -> usize {
        self.coord_lines.len()
    }

    /// 化学式摘要，如 "C4H10"（仅用于终端显示）
    ///
    /// 取每行第一个空白分隔的 token 作为元素符号；坐标本身不参与。
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for line in &self.coord_lines {
            if let Some(symbol) = line.split_whitespace().next() {
                *counts.entry(symbol).or_insert(0) += 1;
            }
        }

        counts
            .iter()
            .map(|(elem, n)| {
                if *n == 1 {
                    elem.to_string()
                } else {
                    format!("{}{}", elem, n)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula() {
        let geom = Geometry::new(
            "water",
            "a water molecule",
            vec![
                "O   0.000   0.000   0.117".to_string(),
                "H   0.000   0.757  -0.469".to_string(),
                "H   0.000  -0.757  -0.469".to_string(),
            ],
        );
        assert_eq!(geom.natoms(), 3);
        assert_eq!(geom.formula(), "H2O");
    }
}
