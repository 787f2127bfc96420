//! Render settings: chart parameters and artifact file names.

use nobel_dash_core::constants::{
    AGE_HISTOGRAM_BINS, ANIMATION_ARTIFACT_FILE, ARTIFACT_FRAME_HEIGHT, GENDER_ARTIFACT_FILE,
    GEO_ARTIFACT_FILE, MAX_HISTOGRAM_BINS,
};
use nobel_dash_core::env_config::env_parse_with_default;

/// Frame height override for embedded artifacts.
pub const FRAME_HEIGHT_VAR: &str = "NOBEL_DASH_FRAME_HEIGHT";

/// Bin count override for the age histogram.
pub const HISTOGRAM_BINS_VAR: &str = "NOBEL_DASH_HISTOGRAM_BINS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Height of the frame that embeds each pre-rendered artifact.
    pub frame_height: u32,
    pub histogram_bins: usize,
    pub gender_artifact: String,
    pub geo_artifact: String,
    pub animation_artifact: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            frame_height: ARTIFACT_FRAME_HEIGHT,
            histogram_bins: AGE_HISTOGRAM_BINS,
            gender_artifact: GENDER_ARTIFACT_FILE.to_owned(),
            geo_artifact: GEO_ARTIFACT_FILE.to_owned(),
            animation_artifact: ANIMATION_ARTIFACT_FILE.to_owned(),
        }
    }
}

impl DashboardConfig {
    /// Defaults, with frame height and histogram bins overridable from the environment.
    ///
    /// A bin count outside `1..=MAX_HISTOGRAM_BINS` is rejected in favour of the default.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let histogram_bins = match env_parse_with_default(HISTOGRAM_BINS_VAR, defaults.histogram_bins) {
            n @ 1..=MAX_HISTOGRAM_BINS => n,
            n => {
                tracing::warn!(
                    var = HISTOGRAM_BINS_VAR,
                    value = n,
                    max = MAX_HISTOGRAM_BINS,
                    "histogram bins out of range, using default"
                );
                defaults.histogram_bins
            },
        };
        Self {
            frame_height: env_parse_with_default(FRAME_HEIGHT_VAR, defaults.frame_height),
            histogram_bins,
            ..defaults
        }
    }
}
