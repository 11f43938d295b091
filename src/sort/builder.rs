//! Builds the single comparator used for every bucket and child list.

use crate::error::Result;
use crate::sort::compare::{sort_by_path, sort_by_property, sort_combine, sort_reverse, Comparator};
use crate::sort::matcher::{FilesFirst, MatcherSpec};
use std::fmt;

/// Primary sort criterion.
#[derive(Clone, Default)]
pub enum SortBy {
    /// Case-insensitive path order
    #[default]
    Path,
    /// Named properties, compared in order until one differs
    Properties(Vec<String>),
    /// Caller-supplied comparator, used as is
    Custom(Comparator),
}

impl fmt::Debug for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Path => f.write_str("Path"),
            SortBy::Properties(names) => f.debug_tuple("Properties").field(names).finish(),
            SortBy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl SortBy {
    pub fn property(name: impl Into<String>) -> Self {
        SortBy::Properties(vec![name.into()])
    }

    /// An empty property list falls back to path order.
    pub fn properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            SortBy::Path
        } else {
            SortBy::Properties(names)
        }
    }

    fn base_comparators(&self) -> Vec<Comparator> {
        match self {
            SortBy::Path => vec![sort_by_path()],
            SortBy::Properties(names) => names.iter().map(sort_by_property).collect(),
            SortBy::Custom(cmp) => vec![cmp.clone()],
        }
    }
}

/// Build the comparator from the sort criterion, reverse flag and files-first
/// matchers.
///
/// Matchers are resolved before anything else so a bad matcher fails here,
/// before any item is touched.
pub fn build_comparator(
    sort_by: &SortBy,
    reverse: bool,
    files_first: Vec<MatcherSpec>,
) -> Result<Comparator> {
    let files_first = FilesFirst::resolve(files_first)?;

    let mut sorts = sort_by.base_comparators();
    if let Some(files_first) = files_first {
        sorts.insert(0, files_first.into_comparator());
    }

    let combined = sort_combine(sorts);
    if reverse {
        Ok(sort_reverse(combined))
    } else {
        Ok(combined)
    }
}
