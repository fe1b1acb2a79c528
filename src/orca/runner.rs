//! # ORCA 子进程调用
//!
//! 以阻塞方式运行外部 ORCA 程序，stdout 与 stderr 合并重定向到
//! `<jobname>.out`。退出状态会被检查：非零退出返回命名错误，
//! 并保留输出文件供排查。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用

use crate::error::{RamanError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 运行 ORCA，返回输出文件路径
///
/// 调用形式为 `orca <input.inp>`，与 ORCA 手册一致；`exec` 允许
/// 指定完整路径（ORCA 并行运行时要求绝对路径调用）。
/// 无超时机制：ORCA 挂起则整个流程挂起。
pub fn run_orca(inp_path: &Path, exec: &str) -> Result<PathBuf> {
    let out_path = inp_path.with_extension("out");

    let out_file = File::create(&out_path).map_err(|e| RamanError::FileWriteError {
        path: out_path.display().to_string(),
        source: e,
    })?;
    let err_file = out_file.try_clone().map_err(|e| RamanError::FileWriteError {
        path: out_path.display().to_string(),
        source: e,
    })?;

    let status = Command::new(exec)
        .arg(inp_path)
        .stdin(Stdio::null())
        .stdout(Stdio::from(out_file))
        .stderr(Stdio::from(err_file))
        .status();

    match status {
        Ok(status) if status.success() => Ok(out_path),
        Ok(status) => Err(RamanError::OrcaFailed {
            status: status.to_string(),
            output: out_path.display().to_string(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(RamanError::CommandNotFound {
            command: exec.to_string(),
        }),
        Err(e) => Err(RamanError::OrcaFailed {
            status: e.to_string(),
            output: out_path.display().to_string(),
        }),
    }
}
