//! Two-phase category registry.
//!
//! Phase one collects distinct trimmed tags across every row; `finalize()`
//! sorts them and fixes the ID assignment; after that the registry is
//! read-only and serves rank lookups. Phase ordering is enforced by
//! sequencing in the assembler, not by synchronization.

use crate::error::{ConvertError, Result};
use crate::model::Category;

/// Collects, deduplicates, sorts, and ID-indexes category names.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    names: Vec<String>,
    finalized: bool,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a row's category tags.
    ///
    /// Tags are trimmed; empty-after-trim tags are ignored; duplicates
    /// (exact match after trim, case-sensitive) are kept once.
    pub fn register<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        debug_assert!(!self.finalized, "register() called after finalize()");

        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() {
                continue;
            }
            if !self.names.iter().any(|n| n == tag) {
                self.names.push(tag.to_string());
            }
        }
    }

    /// Sort the distinct names and fix the ID assignment.
    pub fn finalize(&mut self) {
        self.names.sort();
        self.finalized = true;
    }

    /// Look up the rank of a trimmed name in the finalized registry.
    pub fn id_of(&self, name: &str) -> Result<usize> {
        if !self.finalized {
            return Err(ConvertError::RegistryNotFinalized);
        }

        let name = name.trim();
        self.names
            .binary_search_by(|n| n.as_str().cmp(name))
            .map_err(|_| ConvertError::CategoryNotFound {
                name: name.to_string(),
            })
    }

    /// The full category list with assigned IDs.
    pub fn categories(&self) -> Vec<Category> {
        self.names
            .iter()
            .enumerate()
            .map(|(id, name)| Category {
                id,
                name: name.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
