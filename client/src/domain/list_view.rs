//! Pure search, sort, and layout derivation over listed records.

use std::fmt;
use std::str::FromStr;

use super::ListRecord;

/// Number of queries shown on the landing page.
pub const HOME_RECENT_LIMIT: usize = 6;

/// Presentation column count for card grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// One card per row.
    Grid1,
    /// Two cards per row.
    Grid2,
    /// Three cards per row.
    #[default]
    Grid3,
}

impl Layout {
    /// Cards per row.
    pub const fn columns(self) -> usize {
        match self {
            Self::Grid1 => 1,
            Self::Grid2 => 2,
            Self::Grid3 => 3,
        }
    }

    /// Wire name, e.g. `grid-3`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid1 => "grid-1",
            Self::Grid2 => "grid-2",
            Self::Grid3 => "grid-3",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown layout name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout `{0}`; expected grid-1, grid-2, or grid-3")]
pub struct LayoutParseError(String);

impl FromStr for Layout {
    type Err = LayoutParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "grid-1" => Ok(Self::Grid1),
            "grid-2" => Ok(Self::Grid2),
            "grid-3" => Ok(Self::Grid3),
            other => Err(LayoutParseError(other.to_owned())),
        }
    }
}

/// Search text and layout chosen on a list page.
///
/// # Examples
/// ```
/// use selectify::domain::{Layout, ListView};
///
/// let view = ListView::new("wid", Layout::Grid2);
/// assert_eq!(view.layout().columns(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    search: String,
    layout: Layout,
}

impl ListView {
    /// Build a view.
    pub fn new(search: impl Into<String>, layout: Layout) -> Self {
        Self {
            search: search.into(),
            layout,
        }
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Current layout.
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Records whose search text matches, in their original order.
    pub fn filter<'a, R: ListRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        let needle = self.search.to_lowercase();
        records
            .iter()
            .filter(|record| record.search_text().to_lowercase().contains(&needle))
            .collect()
    }

    /// Filtered records, newest first.
    pub fn apply<'a, R: ListRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        let mut visible = self.filter(records);
        sort_newest_first(&mut visible);
        visible
    }

    /// At most `limit` records of [`ListView::apply`].
    pub fn recent<'a, R: ListRecord>(&self, records: &'a [R], limit: usize) -> Vec<&'a R> {
        let mut visible = self.apply(records);
        visible.truncate(limit);
        visible
    }
}

/// Stable newest-first sort; unparseable timestamps go last.
pub fn sort_newest_first<R: ListRecord>(records: &mut [&R]) {
    records.sort_by(|left, right| left.timestamp().cmp_newest_first(right.timestamp()));
}
