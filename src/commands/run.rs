//! # run 命令实现
//!
//! 完整的 Raman 工作流：
//! 1. 解析 .xyz 几何
//! 2. 生成 ORCA 输入文件
//! 3. 阻塞运行 ORCA（stdout/stderr 合并进 .out 文件）
//! 4. 提取 RAMAN SPECTRUM 表格
//! 5. 布居数校正 + 可选波长转换
//! 6. 终端表格、CSV 导出、绘图
//!
//! 各阶段严格顺序执行；唯一的阻塞点是等待 ORCA 退出。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `parsers/`, `orca/`, `spectra/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::analyze::AxisMode;
use crate::cli::run::RunArgs;
use crate::error::{RamanError, Result};
use crate::orca::{self, InputConfig};
use crate::parsers::{orca_out, xyz};
use crate::spectra::{self, export, plot};
use crate::utils::{output, progress};

use std::fs;

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    output::print_header("ORCA Raman Workflow");

    spectra::validate_conditions(args.temperature, args.laser)?;

    if !args.geometry.exists() {
        return Err(RamanError::FileNotFound {
            path: args.geometry.display().to_string(),
        });
    }

    // 1) 几何
    let geometry = xyz::parse_xyz_file(&args.geometry)?;
    output::print_info(&format!(
        "Loaded geometry '{}': {} atoms ({})",
        geometry.name,
        geometry.natoms(),
        geometry.formula()
    ));

    fs::create_dir_all(&args.work_dir).map_err(|e| RamanError::FileWriteError {
        path: args.work_dir.display().to_string(),
        source: e,
    })?;

    let job_name = args
        .job_name
        .clone()
        .unwrap_or_else(|| format!("raman_{}", geometry.name));

    // 2) 输入文件
    let config = InputConfig {
        method: args.method.clone(),
        basis: args.basis.clone(),
        job_name: job_name.clone(),
        charge: args.charge,
        multiplicity: args.multiplicity,
    };
    let inp_path = orca::generate_input(&geometry, &config, &args.work_dir)?;
    output::print_success(&format!("Input '{}' written", inp_path.display()));

    // 3) 运行 ORCA
    output::print_info(&format!(
        "Running {} {} (OPT + NUMFREQ, this may take a while)",
        args.method, args.basis
    ));
    let spinner = progress::create_spinner("Waiting for ORCA...");
    let run_result = orca::run_orca(&inp_path, &args.orca_exec);
    spinner.finish_and_clear();
    let out_path = run_result?;
    output::print_success(&format!("ORCA finished, output in '{}'", out_path.display()));

    // 4) 提取 Raman 表格
    let result = orca_out::parse_orca_output(&out_path, &job_name)?;

    if !result.is_finished {
        output::print_warning(
            "Output lacks the ORCA normal-termination marker; the calculation may have died early.",
        );
    }

    if result.spectrum.is_empty() {
        output::print_warning(&format!(
            "No Raman data found in '{}'.",
            out_path.display()
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

    // 5) 后处理
    let modes = spectra::post_process(
        &result.spectrum,
        args.temperature,
        args.laser,
        args.branch.is_anti_stokes(),
    );

    super::analyze::print_mode_table(&modes);

    // 6) 导出与绘图
    let csv_path = args
        .output_csv
        .clone()
        .unwrap_or_else(|| args.work_dir.join(format!("{}_raman.csv", job_name)));
    export::to_csv(&modes, &csv_path)?;
    output::print_success(&format!("Spectrum data saved to '{}'", csv_path.display()));

    if !args.no_plot {
        let plot_path = args
            .output_plot
            .clone()
            .unwrap_or_else(|| args.work_dir.join(format!("{}_raman.png", job_name)));
        let title = args
            .title
            .clone()
            .unwrap_or_else(|| format!("Raman Spectrum: {}", job_name));
        let opts = plot::PlotOptions {
            title: &title,
            width: args.width,
            height: args.height,
            wavelength_axis: args.axis == AxisMode::Wavelength,
            temperature_k: args.temperature,
            laser_nm: args.laser,
        };

        let is_svg = plot_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);

        if is_svg {
            plot::generate_svg(&modes, &plot_path, &opts)?;
        } else {
            plot::generate_png(&modes, &plot_path, &opts)?;
        }
        output::print_success(&format!("Spectrum plot saved to '{}'", plot_path.display()));
    }

    output::print_done(&format!("Workflow complete for job '{}'", job_name));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::analyze::ScatteringBranch;
    use crate::spectra::correction;
    use std::path::PathBuf;

    fn base_args(dir: &std::path::Path, xyz: PathBuf, exec: String) -> RunArgs {
        RunArgs {
            geometry: xyz,
            method: "BP86".to_string(),
            basis: "def2-SVP".to_string(),
            job_name: Some("stub_job".to_string()),
            charge: 0,
            multiplicity: 1,
            orca_exec: exec,
            work_dir: dir.to_path_buf(),
            temperature: 300.0,
            laser: 532.0,
            branch: ScatteringBranch::Stokes,
            axis: AxisMode::Shift,
            output_csv: None,
            output_plot: None,
            no_plot: true,
            width: 1000,
            height: 500,
            title: None,
        }
    }

    fn write_stub_geometry(dir: &std::path::Path) -> PathBuf {
        let xyz = dir.join("ammonia.xyz");
        fs::write(
            &xyz,
            "4\nammonia\nN   0.000   0.000   0.116\nH   0.000   0.939  -0.271\nH   0.813  -0.469  -0.271\nH  -0.813  -0.469  -0.271\n",
        )
        .unwrap();
        xyz
    }

    #[cfg(unix)]
    fn write_stub_orca(dir: &std::path::Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let stub = dir.join("stub-orca");
        fs::write(&stub, body).unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
        stub
    }

    #[cfg(unix)]
    #[test]
    fn test_full_pipeline_with_stub_orca() {
        let dir = std::env::temp_dir().join("ramankit_pipeline_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let xyz = write_stub_geometry(&dir);

        // 固定输出的 ORCA 替身
        let stub = write_stub_orca(
            &dir,
            concat!(
                "#!/bin/sh\n",
                "cat <<'EOF'\n",
                "RAMAN SPECTRUM\n",
                "\n",
                " Mode    freq (cm**-1)   Activity   Depolarization\n",
                "----------------------------------------------------\n",
                "   1:    100.0   0.5   0.1\n",
                "   2:    200.0   1.5   0.2\n",
                "\n",
                "                  ****ORCA TERMINATED NORMALLY****\n",
                "EOF\n",
            ),
        );

        let args = base_args(&dir, xyz, stub.to_string_lossy().into_owned());
        execute(args).unwrap();

        // 输入文件：4 条逐字坐标行位于 `* xyz` 行与结尾 `*` 之间
        let inp = fs::read_to_string(dir.join("stub_job.inp")).unwrap();
        let lines: Vec<&str> = inp.lines().collect();
        let start = lines.iter().position(|l| l.starts_with("* xyz")).unwrap();
        assert_eq!(*lines.last().unwrap(), "*");
        let coords = &lines[start + 1..lines.len() - 1];
        assert_eq!(coords.len(), 4);
        assert_eq!(coords[0], "N   0.000   0.000   0.116");

        // 输出捕获存在且可重新解析
        let result =
            orca_out::parse_orca_output(&dir.join("stub_job.out"), "stub_job").unwrap();
        assert!(result.is_finished);
        assert_eq!(result.spectrum.frequencies(), vec![100.0, 200.0]);
        assert_eq!(result.spectrum.activities(), vec![0.5, 1.5]);

        // CSV：强度逐元素等于 活性 × 温度因子
        let csv_content = fs::read_to_string(dir.join("stub_job_raman.csv")).unwrap();
        let rows: Vec<&str> = csv_content.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        for (row, (freq, act)) in rows.iter().zip([(100.0, 0.5), (200.0, 1.5)]) {
            let fields: Vec<&str> = row.split(',').collect();
            let intensity: f64 = fields[5].parse().unwrap();
            let expected = act * correction::population_factor(freq, 300.0);
            assert!(
                (intensity - expected).abs() < 1e-4,
                "row {:?}: expected {}, got {}",
                row,
                expected,
                intensity
            );
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[cfg(unix)]
    #[test]
    fn test_markerless_output_returns_early() {
        let dir = std::env::temp_dir().join("ramankit_pipeline_empty_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let xyz = write_stub_geometry(&dir);

        // 正常退出但不含 RAMAN SPECTRUM 段：与安装缺失不同，这是
        // "运行成功但无数据"，流程以警告提前返回，不算错误
        let stub = write_stub_orca(&dir, "#!/bin/sh\necho 'SCF CONVERGED'\n");

        let args = base_args(&dir, xyz, stub.to_string_lossy().into_owned());
        execute(args).unwrap();

        assert!(dir.join("stub_job.out").exists());
        assert!(!dir.join("stub_job_raman.csv").exists());

        fs::remove_dir_all(&dir).ok();
    }
}
