//! Entry discovery: glob patterns to a name -> path map.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use indexmap::IndexMap;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{AssembleError, Result};

/// Ordered mapping from logical bundle name to absolute source path.
pub type EntryMap = IndexMap<String, PathBuf>;

/// Expands glob patterns into the final entry map.
///
/// The discoverer is kept by the glob-rewatch stage and re-invoked whenever
/// the watched file set changes; every invocation returns a complete
/// replacement map, never an incremental delta.
#[derive(Debug, Clone)]
pub struct EntryDiscoverer {
    patterns: Vec<String>,
    extra_entries: Vec<(String, PathBuf)>,
}

impl EntryDiscoverer {
    pub fn new(patterns: Vec<String>, extra_entries: Vec<(String, PathBuf)>) -> Self {
        Self {
            patterns,
            extra_entries,
        }
    }

    /// The glob patterns, in evaluation order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Expand all patterns against `root`.
    ///
    /// The entry name is the matched file's stem. Within one pattern matches
    /// are sorted by path, and later patterns override earlier ones, so the
    /// result depends only on pattern order - never on filesystem
    /// enumeration order. Fixed extra entries always win.
    pub fn discover(&self, root: &Path) -> Result<EntryMap> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(root)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect();
        files.sort();

        let mut entries = EntryMap::new();
        for pattern in &self.patterns {
            let matcher = compile_glob(pattern)?;
            for relative in &files {
                if matcher.is_match(relative) {
                    let Some(stem) = relative.file_stem().and_then(|s| s.to_str()) else {
                        continue;
                    };
                    entries.insert(stem.to_string(), root.join(relative));
                }
            }
        }

        for (name, path) in &self.extra_entries {
            entries.insert(name.clone(), path.clone());
        }

        debug!(count = entries.len(), "discovered entries");
        Ok(entries)
    }
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| AssembleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
