//! # analyze 命令实现
//!
//! 后处理已有的 ORCA 输出文件：提取 RAMAN SPECTRUM 表格、
//! 布居数校正、单位转换，然后导出或绘图。
//!
//! ## 功能
//! - 单文件模式：终端表格 + 指定格式导出
//! - 批量模式：扫描目录，按 glob 模式收集输出文件并并行处理
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 使用 `parsers/orca_out.rs`, `spectra/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::analyze::{AnalyzeArgs, AxisMode, SpectrumFormat};
use crate::error::{RamanError, Result};
use crate::parsers::orca_out;
use crate::spectra::{self, export, plot, ProcessedMode};
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tabled::{Table, Tabled};
use walkdir::WalkDir;

/// 终端表格的一行
#[derive(Debug, Clone, Tabled)]
struct ModeRow {
    #[tabled(rename = "Mode")]
    mode: usize,
    #[tabled(rename = "Frequency (cm⁻¹)")]
    frequency: String,
    #[tabled(rename = "Wavelength (nm)")]
    wavelength: String,
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "Intensity")]
    intensity: String,
}

/// 打印各模式的结果表格
pub(crate) fn print_mode_table(modes: &[ProcessedMode]) {
    let rows: Vec<ModeRow> = modes
        .iter()
        .map(|m| ModeRow {
            mode: m.mode,
            frequency: format!("{:.2}", m.frequency),
            wavelength: format!("{:.2}", m.wavelength),
            activity: format!("{:.6}", m.activity),
            intensity: format!("{:.6}", m.intensity),
        })
        .collect();

    println!("{}", Table::new(&rows));
}

/// 按显式参数或输出文件扩展名确定导出格式
pub(crate) fn resolve_format(explicit: Option<SpectrumFormat>, path: &Path) -> SpectrumFormat {
    if let Some(f) = explicit {
        return f;
    }
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => SpectrumFormat::Svg,
        Some("csv") => SpectrumFormat::Csv,
        Some("xy") => SpectrumFormat::Xy,
        _ => SpectrumFormat::Png,
    }
}

fn format_extension(format: SpectrumFormat) -> &'static str {
    match format {
        SpectrumFormat::Png => "png",
        SpectrumFormat::Svg => "svg",
        SpectrumFormat::Csv => "csv",
        SpectrumFormat::Xy => "xy",
    }
}

/// 按格式写出单个光谱
fn write_spectrum_output(
    modes: &[ProcessedMode],
    job_name: &str,
    format: SpectrumFormat,
    output_path: &Path,
    args: &AnalyzeArgs,
) -> Result<()> {
    match format {
        SpectrumFormat::Csv => export::to_csv(modes, output_path),
        SpectrumFormat::Xy => export::to_xy(
            modes,
            job_name,
            args.temperature,
            args.laser,
            output_path,
        ),
        SpectrumFormat::Png | SpectrumFormat::Svg => {
            let title = args.title.clone().unwrap_or_else(|| {
                format!("Raman Spectrum: {}", job_name)
            });
            let opts = plot::PlotOptions {
                title: &title,
                width: args.width,
                height: args.height,
                wavelength_axis: args.axis == AxisMode::Wavelength,
                temperature_k: args.temperature,
                laser_nm: args.laser,
            };
            if format == SpectrumFormat::Svg {
                plot::generate_svg(modes, output_path, &opts)
            } else {
                plot::generate_png(modes, output_path, &opts)
            }
        }
    }
}

/// 执行 analyze 命令
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    output::print_header("Analyzing ORCA Raman Output");

    spectra::validate_conditions(args.temperature, args.laser)?;

    if args.input.is_dir() {
        execute_batch(&args)
    } else {
        execute_single(&args)
    }
}

// ─────────────────────────────────────────────────────────────
// 单文件模式
// ─────────────────────────────────────────────────────────────

fn execute_single(args: &AnalyzeArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(RamanError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let job_name = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("raman_job")
        .to_string();

    let result = orca_out::parse_orca_output(&args.input, &job_name)?;

    if !result.is_finished {
        output::print_warning(
            "Output lacks the ORCA normal-termination marker; the calculation may have died early.",
        );
    }

    if result.spectrum.is_empty() {
        output::print_warning(&format!(
            "No Raman data found in '{}'.",
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!(
        "Extracted {} Raman modes ({} branch, T = {:.2} K, laser = {:.1} nm)",
        result.spectrum.len(),
        args.branch,
        args.temperature,
        args.laser
    ));

    let modes = spectra::post_process(
        &result.spectrum,
        args.temperature,
        args.laser,
        args.branch.is_anti_stokes(),
    );

    print_mode_table(&modes);

    // 确定输出路径与格式
    let (output_path, format) = match &args.output {
        Some(path) => (path.clone(), resolve_format(args.format, path)),
        None => {
            let format = args.format.unwrap_or(SpectrumFormat::Png);
            let name = format!("{}_raman.{}", job_name, format_extension(format));
            (args.input.with_file_name(name), format)
        }
    };

    write_spectrum_output(&modes, &job_name, format, &output_path, args)?;
    output::print_success(&format!("Spectrum saved to '{}'", output_path.display()));

    Ok(())
}

// ─────────────────────────────────────────────────────────────
// 批量模式
// ─────────────────────────────────────────────────────────────

enum ProcessStatus {
    Success,
    Skipped,
    NoData,
}

fn execute_batch(args: &AnalyzeArgs) -> Result<()> {
    let files = collect_output_files(&args.input, &args.pattern, args.recursive)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} output files to analyze", files.len()));

    let output_dir = args.output.clone().unwrap_or_else(|| args.input.clone());
    fs::create_dir_all(&output_dir).map_err(|e| RamanError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let format = args.format.unwrap_or(SpectrumFormat::Png);

    // 设置并行度
    let num_threads = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();

    let pb = progress::create_progress_bar(files.len() as u64, "Analyzing");
    let success_count = AtomicUsize::new(0);
    let skip_count = AtomicUsize::new(0);
    let nodata_count = AtomicUsize::new(0);

    files.par_iter().for_each(|out_path| {
        match analyze_one(out_path, &output_dir, format, args) {
            Ok(ProcessStatus::Success) => {
                success_count.fetch_add(1, Ordering::SeqCst);
            }
            Ok(ProcessStatus::Skipped) => {
                skip_count.fetch_add(1, Ordering::SeqCst);
            }
            Ok(ProcessStatus::NoData) => {
                nodata_count.fetch_add(1, Ordering::SeqCst);
                pb.suspend(|| {
                    output::print_warning(&format!(
                        "{}: no Raman data found",
                        out_path.display()
                    ));
                });
            }
            Err(e) => {
                pb.suspend(|| {
                    output::print_error(&format!("{}: {}", out_path.display(), e));
                });
            }
        }
        pb.inc(1);
    });

    pb.finish_and_clear();

    output::print_separator();
    output::print_done(&format!(
        "Analyzed {} file(s): {} spectra written to '{}' ({} skipped, {} without Raman data)",
        files.len(),
        success_count.load(Ordering::SeqCst),
        output_dir.display(),
        skip_count.load(Ordering::SeqCst),
        nodata_count.load(Ordering::SeqCst)
    ));

    Ok(())
}

/// 收集待分析的输出文件
fn collect_output_files(input_dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = if recursive {
        WalkDir::new(input_dir)
    } else {
        WalkDir::new(input_dir).max_depth(1)
    };

    let glob_pattern = glob::Pattern::new(pattern).map_err(|e| {
        RamanError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if glob_pattern.matches(name) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// 处理批量模式中的单个输出文件
fn analyze_one(
    out_path: &Path,
    output_dir: &Path,
    format: SpectrumFormat,
    args: &AnalyzeArgs,
) -> Result<ProcessStatus> {
    let job_name = out_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("raman_job")
        .to_string();

    let dest = output_dir.join(format!("{}_raman.{}", job_name, format_extension(format)));

    if dest.exists() && !args.overwrite {
        return Ok(ProcessStatus::Skipped);
    }

    let result = orca_out::parse_orca_output(out_path, &job_name)?;
    if result.spectrum.is_empty() {
        return Ok(ProcessStatus::NoData);
    }

    let modes = spectra::post_process(
        &result.spectrum,
        args.temperature,
        args.laser,
        args.branch.is_anti_stokes(),
    );

    write_spectrum_output(&modes, &job_name, format, &dest, args)?;
    Ok(ProcessStatus::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format() {
        let p = PathBuf::from("spectrum.svg");
        assert_eq!(resolve_format(None, &p), SpectrumFormat::Svg);
        assert_eq!(
            resolve_format(Some(SpectrumFormat::Csv), &p),
            SpectrumFormat::Csv
        );
        assert_eq!(
            resolve_format(None, &PathBuf::from("spectrum.csv")),
            SpectrumFormat::Csv
        );
        assert_eq!(
            resolve_format(None, &PathBuf::from("spectrum.xy")),
            SpectrumFormat::Xy
        );
        // 未知扩展名回落到 PNG
        assert_eq!(
            resolve_format(None, &PathBuf::from("spectrum")),
            SpectrumFormat::Png
        );
    }

    #[test]
    fn test_collect_output_files() {
        let dir = std::env::temp_dir().join("ramankit_collect_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("a.out"), "").unwrap();
        fs::write(dir.join("b.out"), "").unwrap();
        fs::write(dir.join("c.inp"), "").unwrap();
        fs::write(dir.join("sub/d.out"), "").unwrap();

        let flat = collect_output_files(&dir, "*.out", false).unwrap();
        assert_eq!(flat.len(), 2);

        let deep = collect_output_files(&dir, "*.out", true).unwrap();
        assert_eq!(deep.len(), 3);

        fs::remove_dir_all(&dir).ok();
    }
}
