use livewire::config::trace;
use livewire::image::io::{draw_path, load_rgb_image, save_rgb_image, write_json_file};
use livewire::{GridPoint, SelectionSession, SessionReport};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = trace::load_config(Path::new(&config_path))?;
    if config.anchors.is_empty() {
        return Err("Config lists no anchors".to_string());
    }

    let input = load_rgb_image(&config.input)?;
    let mut session = SelectionSession::new(input.clone(), config.session_options())
        .map_err(|e| e.to_string())?;

    for &anchor in &config.anchors {
        session.place_anchor(anchor).map_err(|e| e.to_string())?;
    }
    let boundary = if config.close {
        session.close().map_err(|e| e.to_string())?
    } else {
        session.boundary()
    };

    let degenerate = session
        .segments()
        .iter()
        .zip(session.anchors())
        .filter(|(seg, from)| seg.is_degenerate(**from))
        .count();
    if degenerate > 0 {
        log::warn!("{degenerate} segment(s) could not be connected");
    }

    let base = if config.overlay.use_smoothed {
        session.image()
    } else {
        &input
    };
    let overlay = draw_path(base, &boundary, config.overlay.rgb());
    save_rgb_image(&overlay, &config.output.overlay_image)?;

    let summary = TraceSummary {
        cost: session.boundary_cost(),
        report: session.report(),
        boundary,
    };
    write_json_file(&config.output.path_json, &summary)?;

    println!(
        "Traced {} anchors into {} boundary points (covered {}x{} at ({}, {}))",
        summary.report.anchors.len(),
        summary.boundary.len(),
        summary.report.covered.rows,
        summary.report.covered.cols,
        summary.report.covered.row,
        summary.report.covered.col
    );
    if let Some(slowest) = &summary.report.slowest_solve {
        println!(
            "Slowest segment {} took {:.3} ms of {:.3} ms total",
            slowest.label, slowest.elapsed_ms, summary.report.timing.total_ms
        );
    }
    println!(
        "Saved overlay to {} and path to {}",
        config.output.overlay_image.display(),
        config.output.path_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: trace_boundary <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceSummary {
    cost: f64,
    report: SessionReport,
    boundary: Vec<GridPoint>,
}
