//! Read-only reports: classification, projections, chart JSON, routing and
//! current conditions.

use dam_core::chart::ToggleSelection;
use dam_core::format::dates::format_timestamp;
use dam_core::format::volume::format_volume;
use dam_core::projection::ProjectionEngine;
use dam_core::{Dashboard, DashboardEvent, DashboardOutput};
use std::io::Write;

pub fn run_classify<W: Write>(dashboard: &Dashboard, volume: f64, out: &mut W) -> anyhow::Result<()> {
    if !volume.is_finite() {
        anyhow::bail!("Volume must be a finite number, got {}", volume);
    }
    let condition = dashboard.classify(volume);
    writeln!(
        out,
        "{} acre-ft: {} ({})",
        format_volume(volume),
        condition,
        condition.color()
    )?;
    Ok(())
}

/// Print both projections side by side, one row per day.
pub fn run_project<W: Write>(dashboard: &Dashboard, days: Option<usize>, out: &mut W) -> anyhow::Result<()> {
    let projections = match days {
        Some(days) => {
            let latest = dashboard.data().latest();
            ProjectionEngine::new(days)?.project(latest.volume, latest.timestamp)?
        }
        None => dashboard.projections()?,
    };

    writeln!(out, "day,date,conservative,aggressive")?;
    let rows = projections
        .conservative
        .points
        .iter()
        .zip(projections.aggressive.points.iter());
    for (day, (conservative, aggressive)) in rows.enumerate() {
        writeln!(
            out,
            "{},{},{},{}",
            day,
            format_timestamp(&conservative.date),
            format_volume(conservative.volume),
            format_volume(aggressive.volume)
        )?;
    }
    Ok(())
}

pub fn run_chart<W: Write>(
    dashboard: &Dashboard,
    conservative: bool,
    aggressive: bool,
    pretty: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let toggles = ToggleSelection {
        conservative,
        aggressive,
    };
    let chart = match dashboard.handle(DashboardEvent::ToggleChanged(toggles))? {
        DashboardOutput::Chart(chart) => chart,
        other => anyhow::bail!("Toggle change produced unexpected output: {:?}", other),
    };
    let json = if pretty {
        serde_json::to_string_pretty(&chart)?
    } else {
        serde_json::to_string(&chart)?
    };
    writeln!(out, "{}", json)?;
    Ok(())
}

pub fn run_route<W: Write>(dashboard: &Dashboard, path: &str, out: &mut W) -> anyhow::Result<()> {
    let page = match dashboard.handle(DashboardEvent::NavigationChanged(path.to_string()))? {
        DashboardOutput::View(page) => page,
        other => anyhow::bail!("Navigation produced unexpected output: {:?}", other),
    };
    writeln!(out, "{} -> {} ({})", path, page, dashboard.page_title(page))?;
    Ok(())
}

pub fn run_conditions<W: Write>(dashboard: &Dashboard, out: &mut W) -> anyhow::Result<()> {
    let conditions = dashboard.current_conditions();
    writeln!(out, "Current water level: {}", conditions.current_water_level)?;
    writeln!(out, "Current water state: {}", conditions.current_water_state)?;
    writeln!(out, "Current weather: {}", conditions.weather)?;
    Ok(())
}
