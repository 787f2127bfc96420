//! Aggregates over laureate records: category counts, age histogram, KPIs
//! and per-year series.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::constants::{AGE_LOWER_BOUND, AGE_UPPER_BOUND, MAX_HISTOGRAM_BINS};
use crate::laureate::{Category, Gender, LaureateRecord};

/// Label of the bucket holding records without a recognised category.
pub const UNKNOWN_CATEGORY_LABEL: &str = "Unknown";

/// One bar of the category distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Option<Category>,
    pub count: usize,
}

impl CategoryCount {
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.category.as_ref().map_or(UNKNOWN_CATEGORY_LABEL, Category::label)
    }
}

/// Counts records per category.
///
/// Records without a category form their own bucket, so counts always sum to
/// the number of records. Sorted by count descending, then label ascending.
pub fn category_distribution<'a>(
    records: impl IntoIterator<Item = &'a LaureateRecord>,
) -> Vec<CategoryCount> {
    let mut counts: HashMap<Option<Category>, usize> = HashMap::new();
    for rec in records {
        *counts.entry(rec.category).or_default() += 1;
    }
    let mut out: Vec<CategoryCount> =
        counts.into_iter().map(|(category, count)| CategoryCount { category, count }).collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label().cmp(b.label())));
    out
}

/// Ages that feed the age histogram: present and strictly between the bounds.
pub fn age_histogram_input<'a>(
    records: impl IntoIterator<Item = &'a LaureateRecord>,
) -> Vec<i32> {
    records
        .into_iter()
        .filter_map(LaureateRecord::age)
        .filter(|&age| age > AGE_LOWER_BOUND && age < AGE_UPPER_BOUND)
        .collect()
}

/// Half-open interval `[start, end)`; the last bin of a histogram is closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width histogram over integer samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Splits `[min, max]` of `values` into `bin_count` equal-width bins.
    ///
    /// Empty input (or zero bins) yields no bins. When every value is equal a
    /// single bin of width 1 holds them all. `bin_count` is capped at
    /// [`MAX_HISTOGRAM_BINS`].
    #[must_use]
    pub fn build(values: &[i32], bin_count: usize) -> Self {
        let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
            return Self::default();
        };
        if bin_count == 0 {
            return Self::default();
        }
        if bin_count > MAX_HISTOGRAM_BINS {
            tracing::warn!(requested = bin_count, max = MAX_HISTOGRAM_BINS, "histogram bin count capped");
        }
        let bin_count = bin_count.min(MAX_HISTOGRAM_BINS);

        let min = f64::from(min);
        let max = f64::from(max);
        if (max - min).abs() < f64::EPSILON {
            return Self { bins: vec![HistogramBin { start: min, end: min + 1.0, count: values.len() }] };
        }

        #[allow(clippy::cast_precision_loss, reason = "bin counts are small")]
        let width = (max - min) / bin_count as f64;
        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss, reason = "bin counts are small")]
                let start = min + width * i as f64;
                HistogramBin { start, end: start + width, count: 0 }
            })
            .collect();
        if let Some(last) = bins.last_mut() {
            last.end = max;
        }

        for &v in values {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "offset is non-negative and clamped below"
            )]
            let idx = ((f64::from(v) - min) / width).floor() as usize;
            bins[idx.min(bin_count - 1)].count += 1;
        }
        Self { bins }
    }

    /// Total number of samples across all bins.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    #[must_use]
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

/// Headline figures for a set of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total_prizes: usize,
    /// Distinct `full_name` values.
    pub unique_laureates: usize,
    /// Mean over records with a known age; `None` when there are none.
    pub mean_age: Option<f64>,
    /// Prize rows awarded to women (a person awarded twice counts twice).
    pub female_laureates: usize,
}

impl Kpis {
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a LaureateRecord>) -> Self {
        let mut total_prizes = 0;
        let mut names = HashSet::new();
        let mut age_sum = 0_i64;
        let mut age_count = 0_usize;
        let mut female_laureates = 0;

        for rec in records {
            total_prizes += 1;
            names.insert(rec.full_name.as_str());
            if let Some(age) = rec.age() {
                age_sum += i64::from(age);
                age_count += 1;
            }
            if rec.gender == Gender::Female {
                female_laureates += 1;
            }
        }

        #[allow(clippy::cast_precision_loss, reason = "sums of ages fit comfortably in f64")]
        let mean_age = (age_count > 0).then(|| age_sum as f64 / age_count as f64);

        Self { total_prizes, unique_laureates: names.len(), mean_age, female_laureates }
    }
}

/// Number of prizes in one category in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearlyCategoryCount {
    pub year: i32,
    pub category: Option<Category>,
    pub count: usize,
}

/// Number of prizes awarded to one gender in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearlyGenderCount {
    pub year: i32,
    pub gender: Gender,
    pub count: usize,
}

/// Prizes per (year, category), ordered by year then category. Rows without a year are skipped.
pub fn yearly_awards<'a>(
    records: impl IntoIterator<Item = &'a LaureateRecord>,
) -> Vec<YearlyCategoryCount> {
    let mut counts: BTreeMap<(i32, Option<Category>), usize> = BTreeMap::new();
    for rec in records {
        if let Some(year) = rec.prize_year {
            *counts.entry((year, rec.category)).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|((year, category), count)| YearlyCategoryCount { year, category, count })
        .collect()
}

/// Prizes per (year, gender), ordered by year then gender. Rows without a year are skipped.
pub fn gender_by_year<'a>(
    records: impl IntoIterator<Item = &'a LaureateRecord>,
) -> Vec<YearlyGenderCount> {
    let mut counts: BTreeMap<(i32, Gender), usize> = BTreeMap::new();
    for rec in records {
        if let Some(year) = rec.prize_year {
            *counts.entry((year, rec.gender)).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|((year, gender), count)| YearlyGenderCount { year, gender, count })
        .collect()
}

/// Age of one laureate at award, keyed by prize year and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeAtAward {
    pub year: i32,
    pub category: Option<Category>,
    pub age: i32,
}

/// Every record with both a prize year and a known age, ordered by year,
/// category, then age. Unlike the histogram input, no age bounds apply.
pub fn ages_by_year<'a>(
    records: impl IntoIterator<Item = &'a LaureateRecord>,
) -> Vec<AgeAtAward> {
    let mut out: Vec<AgeAtAward> = records
        .into_iter()
        .filter_map(|rec| {
            Some(AgeAtAward { year: rec.prize_year?, category: rec.category, age: rec.age()? })
        })
        .collect();
    out.sort_by_key(|a| (a.year, a.category, a.age));
    out
}
