//! Ancestry pipeline
//!
//! Host-facing entry point: resolves options once, then enriches item
//! collections. Option resolution is where every failure happens, so a run
//! itself cannot fail and never leaves a collection half enriched.

use crate::error::Result;
use crate::item::Files;
use crate::options::{AncestryOptions, DEFAULT_ANCESTRY_PROPERTY, DEFAULT_MATCH};
use crate::sort::{build_comparator, glob_predicate, MatcherSpec, PathPredicate, SortBy};
use crate::sort::{Comparator, DEFAULT_FILES_FIRST};
use crate::tree::{AncestryGraph, TreeBuilder};
use tracing::{debug, info};

/// Programmatic configuration, for comparators and matchers that cannot be
/// written in a configuration file.
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    ancestry_property: String,
    match_pattern: String,
    match_dot: bool,
    reverse: bool,
    sort_by: SortBy,
    sort_files_first: Vec<MatcherSpec>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            ancestry_property: DEFAULT_ANCESTRY_PROPERTY.to_string(),
            match_pattern: DEFAULT_MATCH.to_string(),
            match_dot: false,
            reverse: false,
            sort_by: SortBy::Path,
            sort_files_first: vec![MatcherSpec::glob(DEFAULT_FILES_FIRST)],
        }
    }
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from serializable options. Fails on unusable files-first values.
    pub fn from_options(options: &AncestryOptions) -> Result<Self> {
        Ok(Self {
            ancestry_property: options.effective_ancestry_property().to_string(),
            match_pattern: options.effective_match().to_string(),
            match_dot: options.match_dot,
            reverse: options.reverse,
            sort_by: options.sort_by(),
            sort_files_first: options.files_first()?,
        })
    }

    pub fn ancestry_property(mut self, name: impl Into<String>) -> Self {
        self.ancestry_property = name.into();
        self
    }

    pub fn match_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.match_pattern = pattern.into();
        self
    }

    pub fn match_dot(mut self, dot: bool) -> Self {
        self.match_dot = dot;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Replace the files-first matchers. An empty list disables them.
    pub fn sort_files_first(mut self, matchers: Vec<MatcherSpec>) -> Self {
        self.sort_files_first = matchers;
        self
    }

    pub fn build(self) -> Result<AncestryPipeline> {
        let comparator = build_comparator(&self.sort_by, self.reverse, self.sort_files_first)?;
        let selector = glob_predicate(&self.match_pattern, self.match_dot)?;

        debug!(
            ancestry_property = %self.ancestry_property,
            match_pattern = %self.match_pattern,
            reverse = self.reverse,
            sort_by = ?self.sort_by,
            "Ancestry pipeline configured"
        );

        Ok(AncestryPipeline {
            ancestry_property: self.ancestry_property,
            selector,
            comparator,
        })
    }
}

/// Configured pipeline, reusable across collections.
pub struct AncestryPipeline {
    ancestry_property: String,
    selector: PathPredicate,
    comparator: Comparator,
}

impl AncestryPipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn new(options: &AncestryOptions) -> Result<Self> {
        PipelineBuilder::from_options(options)?.build()
    }

    pub fn ancestry_property(&self) -> &str {
        &self.ancestry_property
    }

    /// Whether `path` is selected by the match pattern.
    pub fn selects(&self, path: &str) -> bool {
        (self.selector)(path)
    }

    /// Build the graph for the selected items without touching the collection.
    pub fn graph(&self, files: &Files) -> AncestryGraph {
        let selected = files
            .iter()
            .filter(|(path, _)| self.selects(path))
            .map(|(path, item)| (path.as_str(), item));
        TreeBuilder::new(self.comparator.clone()).build(selected)
    }

    /// Build the graph and attach every selected item's node under the
    /// ancestry property. Unselected items are left alone.
    pub fn run(&self, files: &mut Files) -> AncestryGraph {
        let graph = self.graph(files);

        for id in graph.ids() {
            if let Some(item) = files.get_mut(graph.path(id)) {
                item.attach(&self.ancestry_property, id);
            }
        }

        info!(
            total = files.len(),
            enriched = graph.len(),
            directories = graph.buckets().len(),
            "Ancestry attached"
        );
        graph
    }
}
