use std::path::Path;

use anyhow::{Context, Result};
use nobel_dash_core::DashboardContext;
use nobel_dash_render::{render_dashboard, write_document, DashboardConfig};

/// Loads both tables, renders every chapter and writes the page.
///
/// Nothing is written when loading fails.
pub(crate) fn run(data_dir: &Path, output: &Path) -> Result<()> {
    let ctx = DashboardContext::load(data_dir)
        .with_context(|| format!("cannot load dashboard data from {}", data_dir.display()))?;
    let config = DashboardConfig::from_env();

    let dashboard = render_dashboard(&ctx, &config);
    write_document(&dashboard.document, output)?;
    Ok(())
}
