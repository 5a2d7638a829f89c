//! Multi-panel SVG summary figure.
//!
//! Six panels, consuming only the fit results (nothing here feeds back into
//! the core):
//!
//! 1. quark mass hierarchy (log-scale bars, up vs down)
//! 2. CKM matrix heat-map with per-cell magnitudes
//! 3. golden-ratio scaling curve `φ^{-n}`
//! 4. best-fit parameter bar chart
//! 5. mixing angles and CP phase, predicted vs experimental
//! 6. generation triangle (decorative)
//!
//! Rendered with the SVG backend so text needs no native font libraries.

use std::path::Path;

use plotters::prelude::*;

use crate::domain::{FitOutcome, Predictions, Reference};
use crate::error::AppError;
use crate::math::PHI;

/// Render the 2x3 summary figure to an SVG file.
pub fn render_summary_figure(
    path: &Path,
    outcome: &FitOutcome,
    pred: &Predictions,
    reference: &Reference,
    size: (u32, u32),
) -> Result<(), AppError> {
    draw(path, outcome, pred, reference, size)
        .map_err(|e| AppError::new(2, format!("Failed to render figure '{}': {e}", path.display())))
}

fn draw(
    path: &Path,
    outcome: &FitOutcome,
    pred: &Predictions,
    reference: &Reference,
    size: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Golden-Ratio Flavor Model: Best Fit", ("sans-serif", 22))?;
    let panels = root.split_evenly((2, 3));

    draw_mass_hierarchy(&panels[0], pred)?;
    draw_ckm_heatmap(&panels[1], pred)?;
    draw_phi_scaling(&panels[2])?;
    draw_parameters(&panels[3], outcome)?;
    draw_angles(&panels[4], outcome, reference)?;
    draw_triangle(&panels[5])?;

    root.present()?;
    Ok(())
}

type Panel<'a> = DrawingArea<SVGBackend<'a>, plotters::coord::Shift>;

fn draw_mass_hierarchy(area: &Panel, pred: &Predictions) -> Result<(), Box<dyn std::error::Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption("Quark Mass Hierarchy", ("sans-serif", 15))
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..2.5f64, (1e-9f64..10.0f64).log_scale())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(3)
        .y_desc("mass / heaviest")
        .draw()?;

    let floor = 1e-9f64;
    chart
        .draw_series(pred.mass_up.iter().enumerate().map(|(i, &m)| {
            let x = i as f64;
            Rectangle::new([(x - 0.35, floor), (x - 0.02, m.max(floor))], BLUE.mix(0.8).filled())
        }))?
        .label("up-type")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], BLUE.mix(0.8).filled()));

    chart
        .draw_series(pred.mass_down.iter().enumerate().map(|(i, &m)| {
            let x = i as f64;
            Rectangle::new([(x + 0.02, floor), (x + 0.35, m.max(floor))], RED.mix(0.8).filled())
        }))?
        .label("down-type")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], RED.mix(0.8).filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

fn draw_ckm_heatmap(area: &Panel, pred: &Predictions) -> Result<(), Box<dyn std::error::Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption("CKM Matrix |V_ij|", ("sans-serif", 15))
        .margin(8)
        .build_cartesian_2d(0.0f64..3.0, 0.0f64..3.0)?;

    let up_labels = ["u", "c", "t"];
    let down_labels = ["d", "s", "b"];

    for i in 0..3 {
        for j in 0..3 {
            let v = pred.ckm_mag[i][j];
            // Row 0 at the top.
            let (x, y) = (j as f64, 2.0 - i as f64);
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x + 0.02, y + 0.02), (x + 0.98, y + 0.98)],
                heat_color(v).filled(),
            )))?;
            let text_color = if v > 0.95 { BLACK } else { WHITE };
            chart.draw_series(std::iter::once(Text::new(
                format!("{}{}: {:.4}", up_labels[i], down_labels[j], v),
                (x + 0.12, y + 0.45),
                ("sans-serif", 12).into_font().color(&text_color),
            )))?;
        }
    }

    Ok(())
}

/// White-to-red ramp over magnitude in [0, 1].
fn heat_color(v: f64) -> RGBColor {
    let t = v.clamp(0.0, 1.0);
    RGBColor(
        255,
        (230.0 * (1.0 - t * t)) as u8,
        (120.0 * (1.0 - t)) as u8,
    )
}

fn draw_phi_scaling(area: &Panel) -> Result<(), Box<dyn std::error::Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption("Golden Ratio Scaling", ("sans-serif", 15))
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..3.5f64, (0.1f64..2.0f64).log_scale())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(4)
        .y_desc("phi^-n")
        .draw()?;

    let points: Vec<(f64, f64)> = (0..=3).map(|n| (n as f64, PHI.powi(-n))).collect();

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        RGBColor(218, 165, 32).stroke_width(3),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, RGBColor(218, 165, 32).filled())),
    )?;

    Ok(())
}

fn draw_parameters(area: &Panel, outcome: &FitOutcome) -> Result<(), Box<dyn std::error::Error>> {
    let p = &outcome.params;
    let values = [
        p.k_up[0],
        p.k_up[1],
        p.k_up[2],
        p.k_down[0],
        p.k_down[1],
        p.k_down[2],
        p.length_scale,
        p.alpha,
    ];
    let colors = [
        BLUE, BLUE, BLUE, RED, RED, RED, GREEN, MAGENTA,
    ];

    let hi = values.iter().cloned().fold(0.0f64, f64::max) * 1.2 + 0.5;
    let lo = values.iter().cloned().fold(0.0f64, f64::min) * 1.2 - 0.5;

    let mut chart = ChartBuilder::on(area)
        .caption("Best Fit Parameters", ("sans-serif", 15))
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(40)
        .build_cartesian_2d(-0.5f64..7.5f64, lo..hi)?;

    chart.configure_mesh().disable_x_mesh().x_labels(8).draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        let x = i as f64;
        let (y0, y1) = if v >= 0.0 { (0.0, v) } else { (v, 0.0) };
        Rectangle::new([(x - 0.35, y0), (x + 0.35, y1)], colors[i].mix(0.7).filled())
    }))?;

    Ok(())
}

fn draw_angles(
    area: &Panel,
    outcome: &FitOutcome,
    reference: &Reference,
) -> Result<(), Box<dyn std::error::Error>> {
    let p = &outcome.params;
    let predicted = [p.theta12, p.theta23, p.theta13, p.delta_cp];
    let experimental = [
        reference.theta12.value,
        reference.theta23.value,
        reference.theta13.value,
        reference.delta_cp.value,
    ];

    let hi = predicted
        .iter()
        .chain(experimental.iter())
        .cloned()
        .fold(0.0f64, f64::max)
        * 1.3;

    let mut chart = ChartBuilder::on(area)
        .caption("Mixing Angles & CP Phase", ("sans-serif", 15))
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(40)
        .build_cartesian_2d(-0.5f64..3.5f64, 0.0f64..hi)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(4)
        .y_desc("radians")
        .draw()?;

    chart
        .draw_series(predicted.iter().enumerate().map(|(i, &v)| {
            let x = i as f64;
            Rectangle::new([(x - 0.35, 0.0), (x - 0.02, v)], CYAN.mix(0.8).filled())
        }))?
        .label("predicted")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], CYAN.mix(0.8).filled()));

    chart
        .draw_series(experimental.iter().enumerate().map(|(i, &v)| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.02, 0.0), (x + 0.35, v)],
                RGBColor(255, 165, 0).mix(0.6).filled(),
            )
        }))?
        .label("experimental")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 4), (x + 10, y + 4)], RGBColor(255, 165, 0).mix(0.6).filled())
        });

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

fn draw_triangle(area: &Panel) -> Result<(), Box<dyn std::error::Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption("Generation Triangle", ("sans-serif", 15))
        .margin(8)
        .build_cartesian_2d(-0.2f64..1.2f64, -0.2f64..1.2f64)?;

    let vertices = [(0.0, 0.0), (1.0, 0.0), (0.5, 3.0f64.sqrt() / 2.0)];

    chart.draw_series(std::iter::once(Polygon::new(
        vertices.to_vec(),
        RGBColor(128, 0, 128).mix(0.3).filled(),
    )))?;

    for (i, &(x, y)) in vertices.iter().enumerate() {
        chart.draw_series(std::iter::once(Text::new(
            format!("Gen {}", i + 1),
            (x - 0.05, y + 0.06),
            ("sans-serif", 13).into_font().color(&BLACK),
        )))?;
    }

    Ok(())
}
