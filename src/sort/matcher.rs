//! Files-first matchers.
//!
//! Matchers arrive in several shapes (glob strings, regular expressions,
//! predicates, glob matchers). Each shape is resolved once, when the comparator
//! is built, into a plain `Fn(&str) -> bool`.

use crate::error::{AncestryError, Result};
use crate::item::Entry;
use crate::sort::compare::Comparator;
use globset::{GlobBuilder, GlobMatcher, GlobSet};
use regex::Regex;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Default files-first pattern: directory index documents.
pub const DEFAULT_FILES_FIRST: &str = "**/index.{htm,html,jade,md}";

/// Something that can test a path, in the manner of a regular expression.
pub trait PathTest: Send + Sync {
    fn test(&self, path: &str) -> bool;
}

/// Something that can match a path, in the manner of a glob matcher.
pub trait PathMatch: Send + Sync {
    fn matches(&self, path: &str) -> bool;
}

impl PathTest for Regex {
    fn test(&self, path: &str) -> bool {
        self.is_match(path)
    }
}

impl PathMatch for GlobMatcher {
    fn matches(&self, path: &str) -> bool {
        self.is_match(path)
    }
}

impl PathMatch for GlobSet {
    fn matches(&self, path: &str) -> bool {
        self.is_match(path)
    }
}

/// One files-first matcher as supplied by the caller.
#[derive(Clone)]
pub enum MatcherSpec {
    /// Path glob; wildcards do not cross `/` and do not select dot-files.
    Glob(String),
    Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),
    Test(Arc<dyn PathTest>),
    Match(Arc<dyn PathMatch>),
}

impl fmt::Debug for MatcherSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherSpec::Glob(pattern) => f.debug_tuple("Glob").field(pattern).finish(),
            MatcherSpec::Predicate(_) => f.write_str("Predicate(..)"),
            MatcherSpec::Test(_) => f.write_str("Test(..)"),
            MatcherSpec::Match(_) => f.write_str("Match(..)"),
        }
    }
}

impl MatcherSpec {
    pub fn glob(pattern: impl Into<String>) -> Self {
        MatcherSpec::Glob(pattern.into())
    }

    pub fn predicate(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        MatcherSpec::Predicate(Arc::new(f))
    }

    pub fn regex(pattern: &str) -> Result<Self> {
        Ok(MatcherSpec::Test(Arc::new(Regex::new(pattern)?)))
    }

    /// Parse matchers from a configuration value.
    ///
    /// Accepts a glob string, `{ "regex": "..." }`, `{ "glob": "..." }`, or a
    /// list of those. `null` yields no matchers. Anything else is rejected.
    pub fn from_value(value: &Value) -> Result<Vec<MatcherSpec>> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(values) => values.iter().map(Self::from_single).collect(),
            other => Ok(vec![Self::from_single(other)?]),
        }
    }

    fn from_single(value: &Value) -> Result<MatcherSpec> {
        match value {
            Value::String(pattern) => Ok(MatcherSpec::Glob(pattern.clone())),
            Value::Object(map) => {
                if let Some(Value::String(pattern)) = map.get("regex") {
                    return Self::regex(pattern);
                }
                if let Some(Value::String(pattern)) = map.get("glob") {
                    let matcher = compile_glob(pattern)?;
                    return Ok(MatcherSpec::Match(Arc::new(matcher)));
                }
                Err(AncestryError::InvalidMatcher(value.to_string()))
            }
            other => Err(AncestryError::InvalidMatcher(other.to_string())),
        }
    }

    /// Resolve into a uniform path predicate.
    pub fn resolve(self) -> Result<PathPredicate> {
        match self {
            MatcherSpec::Glob(pattern) => glob_predicate(&pattern, false),
            MatcherSpec::Predicate(f) => Ok(f),
            MatcherSpec::Test(t) => Ok(Arc::new(move |path: &str| t.test(path))),
            MatcherSpec::Match(m) => Ok(Arc::new(move |path: &str| m.matches(path))),
        }
    }
}

/// Uniform path predicate produced from any matcher shape.
pub type PathPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Compile a glob whose wildcards stay within one path segment.
pub fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    Ok(GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

/// Glob predicate with optional dot-file selection.
///
/// When `dot` is false, a path segment starting with `.` must be matched by a
/// pattern segment that itself starts with `.` at the same position. Positions
/// are aligned from the front up to the first `**` and from the back after the
/// last `**`; dot segments covered by a `**` never match.
pub fn glob_predicate(pattern: &str, dot: bool) -> Result<PathPredicate> {
    let matcher = compile_glob(pattern)?;
    let pattern_segments: Vec<String> = pattern.split('/').map(str::to_string).collect();

    Ok(Arc::new(move |path: &str| {
        if !dot && !dot_segments_named(&pattern_segments, path) {
            return false;
        }
        matcher.is_match(path)
    }))
}

fn is_dot_segment(segment: &str) -> bool {
    segment.starts_with('.') && segment != "." && segment != ".."
}

/// Whether every dot segment of `path` lines up with a dot segment of the
/// pattern.
fn dot_segments_named(pattern: &[String], path: &str) -> bool {
    let segments: Vec<&str> = path.split('/').collect();
    let first_globstar = pattern.iter().position(|s| s == "**");
    let last_globstar = pattern.iter().rposition(|s| s == "**");

    segments.iter().enumerate().all(|(i, segment)| {
        if !is_dot_segment(segment) {
            return true;
        }
        let named = match (first_globstar, last_globstar) {
            (Some(first), _) if i < first => pattern.get(i),
            (Some(_), Some(last)) => {
                let tail = &pattern[last + 1..];
                let from_end = segments.len() - i;
                tail.len()
                    .checked_sub(from_end)
                    .and_then(|index| tail.get(index))
            }
            _ => pattern.get(i),
        };
        named.map_or(false, |s| s.starts_with('.'))
    })
}

/// Resolved files-first rule: matching paths rank ahead of the rest.
#[derive(Clone)]
pub struct FilesFirst {
    predicates: Vec<PathPredicate>,
}

impl FilesFirst {
    /// Resolve every matcher. Returns `None` when there is nothing to match.
    pub fn resolve(specs: Vec<MatcherSpec>) -> Result<Option<Self>> {
        if specs.is_empty() {
            return Ok(None);
        }
        let predicates = specs
            .into_iter()
            .map(MatcherSpec::resolve)
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(Self { predicates }))
    }

    pub fn matches(&self, path: &str) -> bool {
        self.predicates.iter().any(|predicate| predicate(path))
    }

    pub fn into_comparator(self) -> Comparator {
        Arc::new(move |a: &Entry<'_>, b: &Entry<'_>| {
            match (self.matches(a.path), self.matches(b.path)) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        })
    }
}
