//! Writing every figure to disk

use crate::state::{AppState, RenderedFigure};
use chrono::{DateTime, Utc};
use olympics_common::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportedFigure {
    pub id: String,
    pub title: String,
    pub svg: String,
    pub json: String,
}

/// Row counts of the three frames
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowCounts {
    pub all: usize,
    pub germany_all: usize,
    pub germany: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub locale: String,
    pub sport: String,
    pub rows: RowCounts,
    pub figures: Vec<ExportedFigure>,
}

fn write_figure(out: &Path, figure: &RenderedFigure) -> Result<ExportedFigure> {
    let id = figure.id().to_string();
    let svg = format!("{id}.svg");
    let json = format!("{id}.json");

    fs::write(out.join(&svg), &figure.svg)?;
    fs::write(out.join(&json), serde_json::to_string_pretty(&figure.figure.data)?)?;
    debug!(figure = %id, "Exported figure");

    Ok(ExportedFigure {
        id,
        title: figure.title().to_string(),
        svg,
        json,
    })
}

/// Write the static figures and the figures of `sport` into `out`, followed
/// by `manifest.json`
#[instrument(skip(state))]
pub fn export_figures(state: &AppState, out: &Path, sport: &str) -> Result<Manifest> {
    let sport_figures = state.sport_figures(sport)?;
    fs::create_dir_all(out)?;

    let figures = state
        .figures()
        .iter()
        .chain(&sport_figures)
        .map(|figure| write_figure(out, figure))
        .collect::<Result<Vec<_>>>()?;

    let bundle = state.bundle();
    let manifest = Manifest {
        generated_at: Utc::now(),
        locale: state.catalog().localizer().locale().code().to_string(),
        sport: sport.to_string(),
        rows: RowCounts {
            all: bundle.all.len(),
            germany_all: bundle.germany_all.len(),
            germany: bundle.germany.len(),
        },
        figures,
    };
    fs::write(out.join(MANIFEST_FILE), serde_json::to_string_pretty(&manifest)?)?;

    info!(
        dir = %out.display(),
        figures = manifest.figures.len(),
        "Export finished"
    );
    Ok(manifest)
}
