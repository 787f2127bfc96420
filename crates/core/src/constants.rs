//! Shared constants for nobel-dash.
//!
//! File names and chart parameters used by both the loader and the renderer.

/// Primary laureate table, one row per (person, prize).
pub const LAUREATES_FILE: &str = "nobel_winners.csv";

/// Secondary "all publications" table. Required at load time, unused by the chapters.
pub const PUBLICATIONS_FILE: &str = "nobel_winners_all_pubs.csv";

/// Pre-rendered gender-over-time chart.
pub const GENDER_ARTIFACT_FILE: &str = "nobel_prize_per_gender_year.html";

/// Pre-rendered geographic distribution map.
pub const GEO_ARTIFACT_FILE: &str = "nobel_prize_geo.html";

/// Pre-rendered animated awards time series.
pub const ANIMATION_ARTIFACT_FILE: &str = "nobel_prize_animation.html";

/// Default output document written by `nobel-dash render`.
pub const DEFAULT_OUTPUT_FILE: &str = "nobel_dashboard.html";

/// Height of the frame that embeds a pre-rendered artifact.
pub const ARTIFACT_FRAME_HEIGHT: u32 = 600;

/// Bin count of the age-at-award histogram.
pub const AGE_HISTOGRAM_BINS: usize = 150;

/// Largest bin count a histogram will allocate.
pub const MAX_HISTOGRAM_BINS: usize = 10_000;

/// Exclusive lower bound for ages kept in the histogram.
pub const AGE_LOWER_BOUND: i32 = 10;

/// Exclusive upper bound for ages kept in the histogram.
pub const AGE_UPPER_BOUND: i32 = 100;

/// Columns `load_laureates` requires in the header row.
pub const REQUIRED_LAUREATE_COLUMNS: [&str; 5] =
    ["category", "prize_year", "full_name", "gender", "birth_date"];
