//! Laureate records and their classification enums.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Nobel Prize category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Physics,
    Chemistry,
    Medicine,
    Literature,
    Peace,
    Economics,
}

impl Category {
    pub const ALL_VARIANTS: &'static [Category] = &[
        Category::Physics,
        Category::Chemistry,
        Category::Medicine,
        Category::Literature,
        Category::Peace,
        Category::Economics,
    ];

    /// Lowercase form, as it appears in the dataset.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Physics => "physics",
            Self::Chemistry => "chemistry",
            Self::Medicine => "medicine",
            Self::Literature => "literature",
            Self::Peace => "peace",
            Self::Economics => "economics",
        }
    }

    /// Capitalized form used in chart labels.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Medicine => "Medicine",
            Self::Literature => "Literature",
            Self::Peace => "Peace",
            Self::Economics => "Economics",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physics" => Ok(Self::Physics),
            "chemistry" => Ok(Self::Chemistry),
            "medicine" | "physiology or medicine" => Ok(Self::Medicine),
            "literature" => Ok(Self::Literature),
            "peace" => Ok(Self::Peace),
            "economics" | "economic sciences" => Ok(Self::Economics),
            _ => Err(UnknownCategory(s.to_owned())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category string that matched no known prize.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown prize category: {0:?}")]
pub struct UnknownCategory(pub String);

/// Laureate gender. Organizations and blank values fall into `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Never fails: anything but male/female is `Other`.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the laureate table: a (person, prize) pairing with derived
/// birth year and age at award. Serialize-only: records are built through
/// [`LaureateRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaureateRecord {
    pub category: Option<Category>,
    pub prize_year: Option<i32>,
    pub full_name: String,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    birth_year: Option<i32>,
    age: Option<i32>,
}

impl LaureateRecord {
    /// Builds a record and derives `birth_year` and `age` from the inputs.
    #[must_use]
    pub fn new(
        category: Option<Category>,
        prize_year: Option<i32>,
        full_name: String,
        gender: Gender,
        birth_date: Option<NaiveDate>,
    ) -> Self {
        let birth_year = birth_date.map(|d| d.year());
        let age = match (prize_year, birth_year) {
            (Some(prize), Some(born)) => prize.checked_sub(born),
            _ => None,
        };
        Self { category, prize_year, full_name, gender, birth_date, birth_year, age }
    }

    #[must_use]
    pub const fn birth_year(&self) -> Option<i32> {
        self.birth_year
    }

    /// Age at award. `None` when either the prize year or the birth date is
    /// unknown, or when the difference does not fit in an `i32`.
    #[must_use]
    pub const fn age(&self) -> Option<i32> {
        self.age
    }
}
