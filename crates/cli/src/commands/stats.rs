use std::path::Path;

use anyhow::{Context, Result};
use nobel_dash_core::{
    ages_by_year, category_distribution, gender_by_year, yearly_awards, AgeAtAward, CategoryCount,
    DashboardContext, Kpis, LaureateFilter, YearlyCategoryCount, YearlyGenderCount,
};
use serde::Serialize;

#[derive(Serialize)]
struct StatsReport<'a> {
    filter: &'a LaureateFilter,
    kpis: Kpis,
    categories: Vec<CategoryCount>,
    yearly_awards: Vec<YearlyCategoryCount>,
    gender_by_year: Vec<YearlyGenderCount>,
    ages_by_year: Vec<AgeAtAward>,
}

pub(crate) fn run(data_dir: &Path, filter: &LaureateFilter) -> Result<()> {
    let ctx = DashboardContext::load(data_dir)
        .with_context(|| format!("cannot load dashboard data from {}", data_dir.display()))?;
    let selected: Vec<_> = filter.apply(ctx.laureates()).collect();
    tracing::info!(selected = selected.len(), total = ctx.laureates().len(), "applied filter");

    let report = StatsReport {
        filter,
        kpis: Kpis::compute(selected.iter().copied()),
        categories: category_distribution(selected.iter().copied()),
        yearly_awards: yearly_awards(selected.iter().copied()),
        gender_by_year: gender_by_year(selected.iter().copied()),
        ages_by_year: ages_by_year(selected.iter().copied()),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
