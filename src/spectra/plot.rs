//! # Raman 光谱图表生成
//!
//! 使用 `plotters` 库绘制校正后的 Raman 光谱。
//!
//! ## 功能
//! - 折线 + 标记点的光谱曲线
//! - x 轴可选 Raman 位移 (cm⁻¹) 或散射波长 (nm)
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/analyze.rs` 调用
//! - 使用 `spectra/mod.rs` 的 ProcessedMode 结构
//! - 使用 `plotters` 渲染图表

use crate::error::{RamanError, Result};
use crate::spectra::ProcessedMode;

use plotters::prelude::*;
use std::path::Path;

/// 图表参数
pub struct PlotOptions<'a> {
    pub title: &'a str,
    pub width: u32,
    pub height: u32,
    /// x 轴使用散射波长而不是 Raman 位移
    pub wavelength_axis: bool,
    /// 右上角标注的实验条件
    pub temperature_k: f64,
    pub laser_nm: f64,
}

/// 生成光谱图 (PNG)
pub fn generate_png(modes: &[ProcessedMode], output_path: &Path, opts: &PlotOptions) -> Result<()> {
    let root = BitMapBackend::new(output_path, (opts.width, opts.height)).into_drawing_area();
    draw_spectrum_chart(&root, modes, opts)?;
    root.present()
        .map_err(|e| RamanError::Other(e.to_string()))?;
    Ok(())
}

/// 生成光谱图 (SVG)
pub fn generate_svg(modes: &[ProcessedMode], output_path: &Path, opts: &PlotOptions) -> Result<()> {
    let root = SVGBackend::new(output_path, (opts.width, opts.height)).into_drawing_area();
    draw_spectrum_chart(&root, modes, opts)?;
    root.present()
        .map_err(|e| RamanError::Other(e.to_string()))?;
    Ok(())
}

/// 绘制光谱图的核心逻辑
fn draw_spectrum_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    modes: &[ProcessedMode],
    opts: &PlotOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| RamanError::Other(format!("{:?}", e)))?;

    let data: Vec<(f64, f64)> = modes
        .iter()
        .map(|m| {
            let x = if opts.wavelength_axis {
                m.wavelength
            } else {
                m.frequency
            };
            (x, m.intensity)
        })
        .collect();

    let x_min = data.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let x_max = data
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_max = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);

    // 单点或零强度时仍给出合理的绘图范围
    let x_margin = ((x_max - x_min).abs() * 0.05).max(1.0);
    let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let x_desc = if opts.wavelength_axis {
        "Wavelength (nm)"
    } else {
        "Raman Shift (cm⁻¹)"
    };

    let mut chart = ChartBuilder::on(root)
        .caption(opts.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min - x_margin)..(x_max + x_margin), 0.0..y_top)
        .map_err(|e| RamanError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("Intensity (arb. units)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| RamanError::Other(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);

    chart
        .draw_series(LineSeries::new(
            data.iter().copied(),
            line_color.stroke_width(2),
        ))
        .map_err(|e| RamanError::Other(format!("{:?}", e)))?
        .label("Raman Intensity")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], line_color.stroke_width(2))
        });

    chart
        .draw_series(
            data.iter()
                .map(|(x, y)| Circle::new((*x, *y), 4, line_color.filled())),
        )
        .map_err(|e| RamanError::Other(format!("{:?}", e)))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| RamanError::Other(format!("{:?}", e)))?;

    // 标注实验条件
    let conditions = format!("T = {:.2} K, λ₀ = {:.1} nm", opts.temperature_k, opts.laser_nm);
    chart
        .draw_series(std::iter::once(Text::new(
            conditions,
            (x_min - x_margin * 0.5, y_top * 0.95),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(|e| RamanError::Other(format!("{:?}", e)))?;

    Ok(())
}
