//! CSV loading for the laureate and publication tables.
//!
//! Only column presence is validated. Individual cells that fail to parse
//! (dates, years, categories) are coerced to `None` instead of aborting the load.

use std::fs::File;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;

use crate::constants::REQUIRED_LAUREATE_COLUMNS;
use crate::error::{DataLoadError, Result};
use crate::laureate::{Category, Gender, LaureateRecord};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Secondary table kept only so a missing file fails the load like the primary one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublicationTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PublicationTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Column positions of the fields `load_laureates` reads.
struct LaureateColumns {
    category: usize,
    prize_year: usize,
    full_name: usize,
    gender: usize,
    birth_date: usize,
}

impl LaureateColumns {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |column: &'static str| {
            headers.iter().position(|h| h.trim() == column).ok_or_else(|| {
                DataLoadError::MissingColumn { path: path.to_path_buf(), column }
            })
        };
        let [category, prize_year, full_name, gender, birth_date] = REQUIRED_LAUREATE_COLUMNS;
        Ok(Self {
            category: find(category)?,
            prize_year: find(prize_year)?,
            full_name: find(full_name)?,
            gender: find(gender)?,
            birth_date: find(birth_date)?,
        })
    }

    fn to_record(&self, row: &StringRecord) -> LaureateRecord {
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let raw_category = cell(self.category);
        let category = if raw_category.trim().is_empty() {
            None
        } else {
            match raw_category.parse::<Category>() {
                Ok(c) => Some(c),
                Err(e) => {
                    tracing::debug!(error = %e, "category coerced to unknown");
                    None
                },
            }
        };

        LaureateRecord::new(
            category,
            parse_prize_year(cell(self.prize_year)),
            cell(self.full_name).trim().to_owned(),
            Gender::parse_lenient(cell(self.gender)),
            parse_birth_date(cell(self.birth_date)),
        )
    }
}

/// Parses a birth date, returning `None` for blank or unparseable input.
///
/// Placeholder dates such as `1900-00-00` fail calendar validation and are
/// treated the same as a missing value.
#[must_use]
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parses a prize year. Integral floats (`1901.0`) are accepted since
/// spreadsheet exports often write years that way.
#[must_use]
pub fn parse_prize_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) {
        #[allow(clippy::cast_possible_truncation, reason = "range checked above")]
        let year = value as i32;
        Some(year)
    } else {
        None
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| DataLoadError::from_io(path, e))?;
    Ok(ReaderBuilder::new().has_headers(true).flexible(true).from_reader(file))
}

/// Loads the primary laureate table and derives birth year and age per row.
pub fn load_laureates(path: &Path) -> Result<Vec<LaureateRecord>> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers().map_err(|e| DataLoadError::from_csv(path, e))?.clone();
    let columns = LaureateColumns::resolve(&headers, path)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| DataLoadError::from_csv(path, e))?;
        records.push(columns.to_record(&row));
    }

    let with_age = records.iter().filter(|r| r.age().is_some()).count();
    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        with_age,
        "loaded laureate table"
    );
    Ok(records)
}

/// Loads the secondary publications table without interpreting its columns.
pub fn load_publications(path: &Path) -> Result<PublicationTable> {
    let mut reader = open_reader(path)?;
    let headers = reader
        .headers()
        .map_err(|e| DataLoadError::from_csv(path, e))?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| DataLoadError::from_csv(path, e))?;
        rows.push(row.iter().map(str::to_owned).collect());
    }

    tracing::info!(path = %path.display(), rows = rows.len(), "loaded publications table");
    Ok(PublicationTable { headers, rows })
}
