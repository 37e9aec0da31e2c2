// src/core/chart.rs
use crate::core::calculator::REQUIRED_PERCENTAGE;
use crate::models::SubjectReport;
use anyhow::{Context as _, Result, anyhow, bail};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::fs;
use std::path::Path;
use tracing::info;

const CHART_SIZE: (u32, u32) = (1000, 600);
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Renders the report as an SVG line chart: one point per subject in report
/// order, plus a flat reference line at the required percentage.
///
/// Points are coloured with the severity band of their percentage.
///
/// # Errors
///
/// Returns an error if `reports` is empty or drawing fails.
pub fn render_chart(reports: &[SubjectReport]) -> Result<String> {
    if reports.is_empty() {
        bail!("Cannot chart an empty attendance report");
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw(&root, reports).map_err(|e| anyhow!("Failed to draw attendance chart: {e}"))?;
        root.present()
            .map_err(|e| anyhow!("Failed to finish attendance chart: {e}"))?;
    }
    Ok(svg)
}

/// Renders the chart and writes it to `path`.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn write_chart(path: &Path, reports: &[SubjectReport]) -> Result<()> {
    let svg = render_chart(reports)?;
    fs::write(path, svg)
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    info!(path = %path.display(), subjects = reports.len(), "wrote attendance chart");
    Ok(())
}

/// Lower and upper bounds of the y axis, always covering `0..=100` with a
/// margin for out-of-range percentages.
fn y_bounds(reports: &[SubjectReport]) -> (f64, f64) {
    let (low, high) = reports
        .iter()
        .map(|report| report.percentage)
        .filter(|value| value.is_finite())
        .fold((0.0_f64, 100.0_f64), |(low, high), value| {
            (low.min(value), high.max(value))
        });
    (low - 5.0, high + 5.0)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    reports: &[SubjectReport],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (y_low, y_high) = y_bounds(reports);
    let subject_at = |value: &SegmentValue<usize>| -> String {
        match value {
            SegmentValue::CenterOf(index) | SegmentValue::Exact(index) => reports
                .get(*index)
                .map(|report| report.subject.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        }
    };

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Attendance vs {REQUIRED_PERCENTAGE:.0}% Requirement"),
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0..reports.len()).into_segmented(), y_low..y_high)?;

    chart
        .configure_mesh()
        // Integer key points never get finer than one per subject.
        .x_labels(reports.len().saturating_mul(2))
        .x_label_formatter(&subject_at)
        .x_desc("Subjects")
        .y_desc("Attendance Percentage")
        .draw()?;

    let attendance: Vec<(SegmentValue<usize>, f64)> = reports
        .iter()
        .enumerate()
        .map(|(index, report)| (SegmentValue::CenterOf(index), report.percentage))
        .collect();
    let requirement: Vec<(SegmentValue<usize>, f64)> = (0..reports.len())
        .map(|index| (SegmentValue::CenterOf(index), REQUIRED_PERCENTAGE))
        .collect();

    chart
        .draw_series(LineSeries::new(attendance.clone(), SKY_BLUE.stroke_width(2)))?
        .label("Attendance Percentage")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SKY_BLUE.stroke_width(2)));

    chart.draw_series(attendance.iter().zip(reports).map(|(point, report)| {
        let (r, g, b) = report.severity().rgb();
        Circle::new(point.clone(), 5, RGBColor(r, g, b).filled())
    }))?;

    chart
        .draw_series(DashedLineSeries::new(
            requirement.clone(),
            8,
            6,
            ORANGE.stroke_width(2),
        ))?
        .label(format!("{REQUIRED_PERCENTAGE:.0}% Requirement"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ORANGE.stroke_width(2)));

    chart.draw_series(
        requirement
            .into_iter()
            .map(|point| Cross::new(point, 4, ORANGE.stroke_width(2))),
    )?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
