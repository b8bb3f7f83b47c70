//! Domain models that mirror the SQLite schema and get passed between the
//! store and the console workflows. These stay plain data holders so the
//! persistence and presentation layers can each focus on their own job.

use std::fmt;

/// Release year as typed at the prompt. Anything that does not parse as an
/// integer is kept as `NotANumber` and handed to the store unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Year {
    Value(i64),
    NotANumber,
}

impl Year {
    /// Parse the raw prompt answer. Surrounding whitespace is ignored, every
    /// other deviation from an integer yields `NotANumber`, including a
    /// numeric prefix followed by text such as `2010s`.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<i64>()
            .map(Year::Value)
            .unwrap_or(Year::NotANumber)
    }
}

impl From<i64> for Year {
    fn from(value: i64) -> Self {
        Year::Value(value)
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Year::Value(i64::from(value))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Value(year) => write!(f, "{year}"),
            Year::NotANumber => write!(f, "NaN"),
        }
    }
}

/// Field values for creating or replacing a movie row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub year: Year,
}

impl NewMovie {
    pub fn new(title: impl Into<String>, year: impl Into<Year>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A catalogued movie. The `id` is assigned by the store on insert and never
/// changes afterwards.
pub struct Movie {
    /// Primary key from the database.
    pub id: i64,
    pub title: String,
    pub year: Year,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A genre row. `name` is the lookup key used by the genre workflow, but the
/// schema does not force it to be unique.
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A movie together with every genre linked to it, used by the listing views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub movie: Movie,
    pub genres: Vec<Genre>,
}

impl MovieDetails {
    /// Comma separated genre names, or a placeholder when none are linked.
    pub fn genre_summary(&self) -> String {
        if self.genres.is_empty() {
            "no genres".to_string()
        } else {
            self.genres
                .iter()
                .map(|genre| genre.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}
