//! Immutable dashboard context, loaded once at startup.

use std::path::{Path, PathBuf};

use crate::constants::{LAUREATES_FILE, PUBLICATIONS_FILE};
use crate::error::Result;
use crate::laureate::LaureateRecord;
use crate::loader::{load_laureates, load_publications, PublicationTable};

/// Both input tables plus the directory they (and the artifacts) live in.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    data_dir: PathBuf,
    laureates: Vec<LaureateRecord>,
    publications: PublicationTable,
}

impl DashboardContext {
    /// Loads the laureate and publication tables from `data_dir`.
    ///
    /// Either file missing, unreadable, or (for laureates) lacking a required
    /// column aborts the load.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let laureates = load_laureates(&data_dir.join(LAUREATES_FILE))?;
        let publications = load_publications(&data_dir.join(PUBLICATIONS_FILE))?;
        Ok(Self::from_parts(data_dir, laureates, publications))
    }

    /// Builds a context from already-loaded tables.
    #[must_use]
    pub fn from_parts(
        data_dir: &Path,
        laureates: Vec<LaureateRecord>,
        publications: PublicationTable,
    ) -> Self {
        Self { data_dir: data_dir.to_path_buf(), laureates, publications }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn laureates(&self) -> &[LaureateRecord] {
        &self.laureates
    }

    #[must_use]
    pub const fn publications(&self) -> &PublicationTable {
        &self.publications
    }
}
