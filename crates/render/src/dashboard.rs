//! Single linear render pass over a loaded context.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use nobel_dash_core::DashboardContext;

use crate::artifact::{load_artifact, ArtifactMissing, Fragment};
use crate::chapter::{
    age_distribution_chapter, animated_trends_chapter, category_distribution_chapter, conclusion,
    gender_dynamics_chapter, global_origins_chapter, introduction, PAGE_TITLE,
};
use crate::config::DashboardConfig;
use crate::error::RenderError;
use crate::page::Document;

/// What happened during a pass, for logging and the CLI summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub chapters: Vec<&'static str>,
    pub missing_artifacts: Vec<ArtifactMissing>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub document: Document,
    pub report: RenderReport,
}

/// Loads an artifact and reports its absence once.
fn fetch(dir: &Path, file_name: &str, report: &mut RenderReport) -> Fragment {
    let fragment = load_artifact(dir, file_name);
    if let Some(missing) = fragment.missing() {
        tracing::warn!(file = %missing.file_name, reason = ?missing.reason, "artifact unavailable, rendering warning");
        report.missing_artifacts.push(missing.clone());
    }
    fragment
}

/// Renders introduction, the five chapters and the conclusion, in order.
///
/// A missing artifact only changes its own chapter; every other block is
/// unaffected.
#[must_use]
pub fn render_dashboard(ctx: &DashboardContext, config: &DashboardConfig) -> Dashboard {
    let records = ctx.laureates();
    let dir = ctx.data_dir();
    let mut report = RenderReport::default();
    let mut document = Document::new(PAGE_TITLE);

    document.push(introduction());
    document.push(category_distribution_chapter(records));

    let gender = fetch(dir, &config.gender_artifact, &mut report);
    document.push(gender_dynamics_chapter(&gender, config));

    document.push(age_distribution_chapter(records, config));

    let geo = fetch(dir, &config.geo_artifact, &mut report);
    document.push(global_origins_chapter(&geo, config));

    let animation = fetch(dir, &config.animation_artifact, &mut report);
    document.push(animated_trends_chapter(&animation, config));

    document.push(conclusion());

    report.chapters = document.blocks.iter().map(|b| b.slug).collect();
    tracing::info!(
        chapters = report.chapters.len(),
        missing_artifacts = report.missing_artifacts.len(),
        "dashboard rendered"
    );
    Dashboard { document, report }
}

/// Writes the page to `path`, or to stdout when `path` is `-`.
pub fn write_document(document: &Document, path: &Path) -> Result<(), RenderError> {
    let html = document.render();
    if path.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(html.as_bytes()).map_err(RenderError::Stdout)?;
        stdout.flush().map_err(RenderError::Stdout)?;
    } else {
        fs::write(path, html.as_bytes())
            .map_err(|source| RenderError::Write { path: path.to_path_buf(), source })?;
        tracing::info!(path = %path.display(), bytes = html.len(), "wrote dashboard");
    }
    Ok(())
}
