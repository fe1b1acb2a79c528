//! # XYZ 几何文件解析器
//!
//! 解析标准 .xyz 格式的分子几何文件。
//!
//! ## XYZ 格式说明
//! ```text
//! 3                      # atom count
//! a water molecule       # comment (ignored)
//! O   0.000  0.000  0.117
//! H   0.000  0.757 -0.469
//! H   0.000 -0.757 -0.469
//! ```
//!
//! 坐标行逐字保留，不做数值校验；声明的原子数决定取多少行，
//! 多余的行被忽略，不足则报错。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs`, `commands/run.rs` 使用
//! - 使用 `models/geometry.rs`

use crate::error::{RamanError, Result};
use crate::models::Geometry;
use std::fs;
use std::path::Path;

/// 解析 .xyz 文件
pub fn parse_xyz_file(path: &Path) -> Result<Geometry> {
    let content = fs::read_to_string(path).map_err(|e| RamanError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_xyz_content(
        &content,
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("molecule"),
    )
}

/// 从字符串内容解析 .xyz 格式
pub fn parse_xyz_content(content: &str, name: &str) -> Result<Geometry> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() < 2 {
        return Err(RamanError::ParseError {
            format: "xyz".to_string(),
            path: name.to_string(),
            reason: "File too short: expected atom count and comment lines".to_string(),
        });
    }

    // Line 0: atom count
    let natoms: usize = lines[0].trim().parse().map_err(|_| RamanError::ParseError {
        format: "xyz".to_string(),
        path: name.to_string(),
        reason: format!("Invalid atom count on line 1: '{}'", lines[0].trim()),
    })?;

    if natoms == 0 {
        return Err(RamanError::ParseError {
            format: "xyz".to_string(),
            path: name.to_string(),
            reason: "Atom count must be positive".to_string(),
        });
    }

    // Line 1: comment
    let comment = lines[1].trim().to_string();

    // Lines 2..2+natoms: coordinate lines, verbatim
    let available = lines.len() - 2;
    if available < natoms {
        return Err(RamanError::ParseError {
            format: "xyz".to_string(),
            path: name.to_string(),
            reason: format!(
                "Declared {} atoms but only {} coordinate lines present",
                natoms, available
            ),
        });
    }

    let coord_lines: Vec<String> = lines[2..2 + natoms].iter().map(|l| l.to_string()).collect();

    Ok(Geometry::new(name, comment, coord_lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_xyz() {
        let content = r#"3
a water molecule
O   0.000   0.000   0.117
H   0.000   0.757  -0.469
H   0.000  -0.757  -0.469
"#;
        let geom = parse_xyz_content(content, "water").unwrap();
        assert_eq!(geom.natoms(), 3);
        assert_eq!(geom.comment, "a water molecule");
        // 坐标行逐字保留
        assert_eq!(geom.coord_lines[0], "O   0.000   0.000   0.117");
    }

    #[test]
    fn test_surplus_lines_ignored() {
        let content = "1\ncomment\nHe  0.0 0.0 0.0\nXX  1.0 1.0 1.0\n";
        let geom = parse_xyz_content(content, "he").unwrap();
        assert_eq!(geom.natoms(), 1);
    }

    #[test]
    fn test_invalid_atom_count() {
        let content = "abc\ncomment\nO 0.0 0.0 0.0\n";
        let err = parse_xyz_content(content, "bad").unwrap_err();
        assert!(format!("{}", err).contains("Invalid atom count"));
    }

    #[test]
    fn test_truncated_coordinates() {
        let content = "4\nbutane fragment\nC 0.0 0.0 0.0\nC 1.5 0.0 0.0\n";
        let err = parse_xyz_content(content, "butane").unwrap_err();
        assert!(format!("{}", err).contains("only 2 coordinate lines"));
    }

    #[test]
    fn test_zero_atoms_rejected() {
        let content = "0\nempty\n";
        assert!(parse_xyz_content(content, "empty").is_err());
    }
}
