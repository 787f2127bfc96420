//! Page rendering for nobel-dash.
//!
//! Turns a loaded [`nobel_dash_core::DashboardContext`] into a single
//! self-contained HTML document: inline SVG for computed charts, sandboxed
//! frames for pre-rendered artifacts.

pub mod artifact;
pub mod chapter;
pub mod chart;
mod config;
mod dashboard;
mod error;
pub mod page;

pub use artifact::{load_artifact, ArtifactMissing, Fragment, MissingReason};
pub use config::{DashboardConfig, FRAME_HEIGHT_VAR, HISTOGRAM_BINS_VAR};
pub use dashboard::{render_dashboard, write_document, Dashboard, RenderReport};
pub use error::RenderError;
pub use page::{ChapterBlock, Document};
