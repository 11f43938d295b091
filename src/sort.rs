//! Item ordering
//!
//! Turns a sort criterion, a reverse flag and files-first matchers into one
//! comparator shared by every bucket and child list of a run.

pub mod builder;
pub mod compare;
pub mod matcher;

pub use builder::{build_comparator, SortBy};
pub use compare::{
    compare_values, sort_by_path, sort_by_property, sort_combine, sort_reverse, sort_strings,
    Comparator,
};
pub use matcher::{
    compile_glob, glob_predicate, FilesFirst, MatcherSpec, PathMatch, PathPredicate, PathTest,
    DEFAULT_FILES_FIRST,
};
