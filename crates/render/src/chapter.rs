//! The dashboard's chapters.
//!
//! Each function is pure: it takes the records (or an already-loaded
//! [`Fragment`]) and returns one [`ChapterBlock`].

use nobel_dash_core::{age_histogram_input, category_distribution, Histogram, LaureateRecord};

use crate::artifact::Fragment;
use crate::chart::{bar_chart, histogram_chart, AxisLabels, Bar};
use crate::config::DashboardConfig;
use crate::error::RenderError;
use crate::page::{ChapterBlock, SectionBuilder, Visual};

pub const PAGE_TITLE: &str = "Nobel Prize Dashboard";

pub const INTRO_SLUG: &str = "introduction";
pub const CATEGORY_SLUG: &str = "category-distribution";
pub const GENDER_SLUG: &str = "gender-dynamics";
pub const AGE_SLUG: &str = "age-distribution";
pub const GEO_SLUG: &str = "global-origins";
pub const ANIMATION_SLUG: &str = "animated-trends";
pub const CONCLUSION_SLUG: &str = "conclusion";

/// Render order of every block on the page.
pub const CHAPTER_ORDER: [&str; 7] = [
    INTRO_SLUG,
    CATEGORY_SLUG,
    GENDER_SLUG,
    AGE_SLUG,
    GEO_SLUG,
    ANIMATION_SLUG,
    CONCLUSION_SLUG,
];

pub const CATEGORY_CHART_TITLE: &str = "Nobel Prizes Awarded by Category";
pub const AGE_CHART_TITLE: &str = "Distribution of Laureates Age at Award";

#[must_use]
pub fn introduction() -> ChapterBlock {
    SectionBuilder::new(INTRO_SLUG)
        .title("\u{1f3c5} The Story of the Nobel Prize")
        .paragraphs(&[
            "Welcome to a storytelling dashboard about Nobel Prize laureates. \
             We'll walk through key insights on categories, gender distribution, age trends, \
             and more, bringing data to life using the real history of Nobel Prize winners.",
        ])
        .build()
}

/// Chapter 1: prize counts per category as a bar chart.
#[must_use]
pub fn category_distribution_chapter(records: &[LaureateRecord]) -> ChapterBlock {
    let bars: Vec<Bar> = category_distribution(records)
        .iter()
        .map(|c| Bar { label: c.label().to_owned(), value: c.count })
        .collect();
    let chart = bar_chart(CATEGORY_CHART_TITLE, &bars, AxisLabels { x: "category", y: "count" });

    SectionBuilder::new(CATEGORY_SLUG)
        .heading("\u{1f4ca} Chapter 1: Where Are the Prizes Going?")
        .paragraphs(&[
            "Since 1901, the Nobel Prize has honored groundbreaking contributions in various \
             disciplines. Medicine leads the way, followed closely by Physics and Chemistry.",
        ])
        .visual(&chart_visual(chart))
        .build()
}

/// Chapter 2: pre-rendered gender-over-time chart.
#[must_use]
pub fn gender_dynamics_chapter(fragment: &Fragment, config: &DashboardConfig) -> ChapterBlock {
    SectionBuilder::new(GENDER_SLUG)
        .heading("\u{1f465} Chapter 2: Gender Dynamics")
        .paragraphs(&[
            "The Nobel Prize has historically been awarded to men, but female representation \
             is growing. Here's a view of how gender distribution evolved over time.",
        ])
        .visual(&embed(fragment, config))
        .build()
}

/// Chapter 3: histogram of ages strictly between 10 and 100.
#[must_use]
pub fn age_distribution_chapter(
    records: &[LaureateRecord],
    config: &DashboardConfig,
) -> ChapterBlock {
    let ages = age_histogram_input(records);
    let histogram = Histogram::build(&ages, config.histogram_bins);
    let chart = histogram_chart(AGE_CHART_TITLE, &histogram, AxisLabels { x: "Age", y: "Frequency" });

    SectionBuilder::new(AGE_SLUG)
        .heading("\u{1f382} Chapter 3: How Old Are Nobel Laureates?")
        .paragraphs(&[
            "Laureates are often recognized later in life, and the average age hovers around 60. \
             But outliers exist: the youngest was just 17!",
        ])
        .visual(&chart_visual(chart))
        .build()
}

/// Chapter 4: pre-rendered geographic map.
#[must_use]
pub fn global_origins_chapter(fragment: &Fragment, config: &DashboardConfig) -> ChapterBlock {
    SectionBuilder::new(GEO_SLUG)
        .heading("\u{1f30d} Chapter 4: Where Do Nobel Laureates Come From?")
        .paragraphs(&[
            "Although the Nobel is a global award, the majority of recipients hail from the \
             United States and Europe.",
        ])
        .visual(&embed(fragment, config))
        .build()
}

/// Chapter 5: pre-rendered animated time series.
#[must_use]
pub fn animated_trends_chapter(fragment: &Fragment, config: &DashboardConfig) -> ChapterBlock {
    SectionBuilder::new(ANIMATION_SLUG)
        .heading("\u{1f39e}\u{fe0f} Chapter 5: Awards Over Time (Animated)")
        .paragraphs(&[
            "Watch how Nobel Prize awards have evolved across the 20th and 21st centuries.",
        ])
        .visual(&embed(fragment, config))
        .build()
}

#[must_use]
pub fn conclusion() -> ChapterBlock {
    SectionBuilder::new(CONCLUSION_SLUG)
        .heading("\u{1f4da} The Journey Continues")
        .paragraphs(&[
            "The Nobel Prize remains one of the most prestigious honors in the world.",
            "I hope this dashboard offered you a compelling glimpse into the history and data \
             behind the prize.",
        ])
        .quote("For the greatest benefit to humankind.", "Alfred Nobel")
        .build()
}

/// A chart that failed to draw becomes a warning in its own chapter.
fn chart_visual(chart: Result<String, RenderError>) -> Visual {
    match chart {
        Ok(svg) => Visual::Chart(svg),
        Err(err) => {
            tracing::warn!(error = %err, "chart rendering failed");
            Visual::Warning(err.to_string())
        },
    }
}

fn embed(fragment: &Fragment, config: &DashboardConfig) -> Visual {
    match fragment {
        Fragment::Present { file_name, html } => Visual::Frame {
            file_name: file_name.clone(),
            html: html.clone(),
            height: config.frame_height,
        },
        Fragment::Absent(missing) => Visual::Warning(missing.message()),
    }
}
