//! Growth chart rendering (SVG)
//!
//! Two line series over time: contributed principal and total account value.
//! The chart is always rendered in memory; persisting writes the same SVG to
//! `ChartSettings::output_dir` under a name derived from the plan.

use plotters::prelude::*;
use std::error::Error;
use std::fs;
use std::panic;
use std::path::PathBuf;

use crate::config::ChartSettings;
use crate::error::{CalculatorError, Result};
use crate::plan::InvestmentPlan;
use crate::projection::ProjectionPoint;
use crate::report::format_money;

/// Series longer than this are thinned before plotting
const MAX_PLOTTED_POINTS: usize = 2000;

const PRINCIPAL_COLOR: RGBColor = RGBColor(31, 119, 180);
const VALUE_COLOR: RGBColor = RGBColor(214, 39, 40);

/// A rendered chart
#[derive(Debug, Clone)]
pub struct RenderedChart {
    /// SVG document
    pub svg: String,

    /// Where the chart was written, if it was persisted
    pub path: Option<PathBuf>,
}

/// Deterministic chart filename for a plan
pub fn chart_file_name(plan: &InvestmentPlan) -> String {
    format!(
        "investment_{}y_{:.2}_{:.2}pct.svg",
        plan.years,
        plan.contribution_amount,
        plan.annual_rate * 100.0
    )
}

/// Render the growth chart, writing it to disk when the plan asks for it
pub fn render_chart(
    plan: &InvestmentPlan,
    projection: &[ProjectionPoint],
    settings: &ChartSettings,
) -> Result<RenderedChart> {
    if projection.is_empty() {
        return Err(CalculatorError::EmptyProjection);
    }

    let svg = render_guard(plan, projection, settings)?;

    let path = if plan.persist_chart {
        let path = settings.output_dir.join(chart_file_name(plan));
        fs::write(&path, &svg).map_err(|e| {
            CalculatorError::ChartRender(format!("cannot write {}: {}", path.display(), e))
        })?;
        log::info!("Wrote chart: {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(RenderedChart { svg, path })
}

/// Run the backend, turning both errors and panics into `ChartRender`
fn render_guard(
    plan: &InvestmentPlan,
    projection: &[ProjectionPoint],
    settings: &ChartSettings,
) -> Result<String> {
    let render = || draw_svg(plan, projection, settings).map_err(|e| e.to_string());

    panic::catch_unwind(panic::AssertUnwindSafe(render))
        .map_err(|_| CalculatorError::ChartRender("plotting backend panicked".to_string()))?
        .map_err(CalculatorError::ChartRender)
}

fn draw_svg(
    plan: &InvestmentPlan,
    projection: &[ProjectionPoint],
    settings: &ChartSettings,
) -> std::result::Result<String, Box<dyn Error>> {
    let per_year = plan.periods_per_year as f64;
    let sampled = thin(projection);

    let principal: Vec<(f64, f64)> = sampled
        .iter()
        .map(|p| (p.period_index as f64 / per_year, p.cumulative_contributions))
        .collect();
    let values: Vec<(f64, f64)> = sampled
        .iter()
        .map(|p| (p.period_index as f64 / per_year, p.cumulative_value))
        .collect();

    let x_max = projection.len() as f64 / per_year;
    let mut y_max = values.iter().map(|&(_, v)| v).fold(0.0, f64::max) * 1.05;
    if !y_max.is_finite() || y_max <= 0.0 {
        y_max = 1.0;
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (settings.width, settings.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let caption = format!(
            "{} {} for {} years at {:.2}%",
            format_money(plan.contribution_amount),
            plan.frequency_label(),
            plan.years,
            plan.annual_rate * 100.0
        );

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(110)
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Years")
            .y_desc("Value")
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format_money(*v))
            .draw()?;

        chart
            .draw_series(LineSeries::new(principal, PRINCIPAL_COLOR.stroke_width(2)))?
            .label("Principal")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PRINCIPAL_COLOR));

        chart
            .draw_series(LineSeries::new(values, VALUE_COLOR.stroke_width(2)))?
            .label("Principal + Earnings")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], VALUE_COLOR));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
    }

    Ok(svg)
}

/// Keep at most `MAX_PLOTTED_POINTS`, always including the final point
fn thin(projection: &[ProjectionPoint]) -> Vec<ProjectionPoint> {
    let step = projection.len().div_ceil(MAX_PLOTTED_POINTS).max(1);
    let mut points: Vec<ProjectionPoint> = projection.iter().step_by(step).copied().collect();
    if let (Some(last), Some(kept)) = (projection.last(), points.last()) {
        if last.period_index != kept.period_index {
            points.push(*last);
        }
    }
    points
}
