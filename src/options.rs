//! Ancestry options as they appear in configuration files and environment.

use crate::error::Result;
use crate::sort::compare::is_falsy;
use crate::sort::{MatcherSpec, SortBy, DEFAULT_FILES_FIRST};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ANCESTRY_PROPERTY: &str = "ancestry";
pub const DEFAULT_MATCH: &str = "**/*";

fn default_ancestry_property() -> String {
    DEFAULT_ANCESTRY_PROPERTY.to_string()
}

fn default_match() -> String {
    DEFAULT_MATCH.to_string()
}

fn default_sort_files_first() -> Value {
    Value::String(DEFAULT_FILES_FIRST.to_string())
}

/// Property names to sort by: one name or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortKeys {
    One(String),
    Many(Vec<String>),
}

impl SortKeys {
    pub fn to_sort_by(&self) -> SortBy {
        match self {
            SortKeys::One(name) if name.is_empty() => SortBy::Path,
            SortKeys::One(name) => SortBy::property(name.clone()),
            SortKeys::Many(names) => SortBy::properties(names.iter().cloned()),
        }
    }
}

/// Serializable ancestry options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AncestryOptions {
    /// Name under which each item's node is attached
    #[serde(default = "default_ancestry_property")]
    pub ancestry_property: String,

    /// Glob selecting which items receive a node
    #[serde(rename = "match", default = "default_match")]
    pub match_pattern: String,

    /// Let `match` wildcards select dot-files
    #[serde(default)]
    pub match_dot: bool,

    #[serde(default)]
    pub reverse: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKeys>,

    /// Glob string, `{regex = ".."}`, `{glob = ".."}` or a list of those
    #[serde(default = "default_sort_files_first")]
    pub sort_files_first: Value,
}

impl Default for AncestryOptions {
    fn default() -> Self {
        Self {
            ancestry_property: default_ancestry_property(),
            match_pattern: default_match(),
            match_dot: false,
            reverse: false,
            sort_by: None,
            sort_files_first: default_sort_files_first(),
        }
    }
}

impl AncestryOptions {
    /// Empty strings fall back to the defaults.
    pub fn effective_ancestry_property(&self) -> &str {
        if self.ancestry_property.is_empty() {
            DEFAULT_ANCESTRY_PROPERTY
        } else {
            &self.ancestry_property
        }
    }

    pub fn effective_match(&self) -> &str {
        if self.match_pattern.is_empty() {
            DEFAULT_MATCH
        } else {
            &self.match_pattern
        }
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
            .as_ref()
            .map(SortKeys::to_sort_by)
            .unwrap_or_default()
    }

    /// Files-first matchers. Falsy values mean the default index pattern; an
    /// empty list disables files-first ordering.
    pub fn files_first(&self) -> Result<Vec<MatcherSpec>> {
        if is_falsy(&self.sort_files_first) {
            return MatcherSpec::from_value(&default_sort_files_first());
        }
        MatcherSpec::from_value(&self.sort_files_first)
    }
}
