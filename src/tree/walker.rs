//! Directory walker producing a path-keyed item collection.

use crate::error::{AncestryError, Result};
use crate::item::{Files, Item};
use chrono::{DateTime, Utc};
use std::fs::Metadata;
use std::io;
use std::path::{Component, Path};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub follow_links: bool,
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
        }
    }
}

/// Collect every regular file under `root`.
///
/// Keys are `/`-joined paths relative to `root`. Each item carries `size` and,
/// when the platform reports it, `modified` as an RFC 3339 timestamp.
pub fn walk(root: &Path, config: &WalkerConfig) -> Result<Files> {
    if !root.is_dir() {
        return Err(AncestryError::PathNotFound(root.display().to_string()));
    }

    let mut walker = WalkDir::new(root).follow_links(config.follow_links);
    if let Some(depth) = config.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files = Files::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(key) = relative_key(root, entry.path()) else {
            continue;
        };
        let metadata = entry.metadata().map_err(io::Error::from);
        if let Some(item) = file_item(&key, metadata) {
            files.insert(key, item);
        }
    }

    debug!(root = %root.display(), files = files.len(), "Walked directory");
    Ok(files)
}

/// Item for one walked file, or `None` (with a warning) when its metadata
/// cannot be read.
fn file_item(key: &str, metadata: io::Result<Metadata>) -> Option<Item> {
    let metadata = match metadata {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!(path = %key, error = %e, "Skipping file with unreadable metadata");
            return None;
        }
    };

    let mut item = Item::new().with_property("size", metadata.len());
    if let Ok(modified) = metadata.modified() {
        let modified: DateTime<Utc> = modified.into();
        item = item.with_property("modified", modified.to_rfc3339());
    }
    Some(item)
}

/// `/`-joined relative path, or `None` for paths that are not valid UTF-8.
fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => segments.push(name.to_str()?),
            Component::RootDir
            | Component::Prefix(_)
            | Component::CurDir
            | Component::ParentDir => {}
        }
    }
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}
