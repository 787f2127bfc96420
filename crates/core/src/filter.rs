//! Record selection by category, gender and prize-year range.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::laureate::{Category, Gender, LaureateRecord};

/// Selection criteria; an empty set or `None` range means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaureateFilter {
    pub categories: Vec<Category>,
    pub genders: Vec<Gender>,
    pub year_range: Option<RangeInclusive<i32>>,
}

impl LaureateFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    #[must_use]
    pub fn genders(mut self, genders: impl IntoIterator<Item = Gender>) -> Self {
        self.genders.extend(genders);
        self
    }

    /// Restricts to prize years in `from..=to`. Open ends default to the
    /// widest `i32` range.
    #[must_use]
    pub fn years(mut self, from: Option<i32>, to: Option<i32>) -> Self {
        if from.is_some() || to.is_some() {
            self.year_range = Some(from.unwrap_or(i32::MIN)..=to.unwrap_or(i32::MAX));
        }
        self
    }

    /// Records without a year never satisfy a year constraint; records
    /// without a category never satisfy a category constraint.
    #[must_use]
    pub fn matches(&self, rec: &LaureateRecord) -> bool {
        if !self.categories.is_empty()
            && !rec.category.is_some_and(|c| self.categories.contains(&c))
        {
            return false;
        }
        if !self.genders.is_empty() && !self.genders.contains(&rec.gender) {
            return false;
        }
        match (&self.year_range, rec.prize_year) {
            (None, _) => true,
            (Some(range), Some(year)) => range.contains(&year),
            (Some(_), None) => false,
        }
    }

    /// Iterates the records that pass the filter, preserving order.
    pub fn apply<'a>(
        &'a self,
        records: &'a [LaureateRecord],
    ) -> impl Iterator<Item = &'a LaureateRecord> + 'a {
        records.iter().filter(move |r| self.matches(r))
    }
}
