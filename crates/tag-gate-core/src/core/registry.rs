// crates/tag-gate-core/src/core/registry.rs
// ============================================================================
// Module: Tag Gate Registry
// Description: Ordered tag collection with a derived name lookup.
// Purpose: Own tag policies and answer exact-name lookups.
// Dependencies: crate::core::tag, serde, thiserror
// ============================================================================

//! ## Overview
//! [`TagRegistry`] keeps tags in insertion order and maintains a derived
//! `name -> index` lookup. The lookup may be unbuilt; [`TagRegistry::lookup`]
//! rebuilds it on demand. Rebuilding never fails: duplicate and blank names
//! are recorded as [`RegistryConflict`] diagnostics and the first occurrence
//! of a name wins.
//!
//! ## Invariants
//! - When built, the lookup maps every valid name to the index of its first
//!   occurrence in the sequence.
//! - Mutations that shift indices drop the lookup back to the unbuilt state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::tag::Tag;
use crate::core::tag::TagError;
use crate::core::tag::is_blank;

// ============================================================================
// SECTION: Conflicts
// ============================================================================

/// Non-fatal registry inconsistency found while building the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistryConflict {
    /// A later entry reuses a name already present in the lookup.
    #[error("'{name}' already exists. Item '{index}' should be removed.")]
    DuplicateName {
        /// Duplicated tag name.
        name: String,
        /// Sequence index of the ignored entry.
        index: usize,
    },
    /// An entry has an empty or whitespace-only name.
    #[error("tag at item '{index}' has no name and was skipped.")]
    InvalidName {
        /// Sequence index of the ignored entry.
        index: usize,
    },
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Ordered tag collection with a lazily built name lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagRegistry {
    /// Tags in insertion order.
    tags: Vec<Tag>,
    /// Derived name lookup into `tags`.
    #[serde(skip)]
    lookup: HashMap<String, usize>,
    /// Whether `lookup` reflects `tags`.
    #[serde(skip)]
    built: bool,
    /// Conflicts found by the most recent build.
    #[serde(skip)]
    conflicts: Vec<RegistryConflict>,
}

impl PartialEq for TagRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.tags == other.tags
    }
}

impl Eq for TagRegistry {}

impl TagRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unbuilt registry from an ordered tag list.
    #[must_use]
    pub fn from_tags(tags: Vec<Tag>) -> Self {
        Self {
            tags,
            ..Self::default()
        }
    }

    /// Appends a tag unless an identical tag is already present.
    ///
    /// Tags with blank names are rejected. When the lookup is built the tag
    /// is indexed as well, unless its name is already indexed.
    pub fn add(&mut self, tag: Tag) -> bool {
        if !tag.has_valid_name() || self.tags.contains(&tag) {
            return false;
        }
        if self.built {
            let index = self.tags.len();
            self.lookup.entry(tag.name.clone()).or_insert(index);
        }
        self.tags.push(tag);
        true
    }

    /// Appends an all-levels-enabled tag for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidName`] when `name` is blank.
    pub fn add_by_name(&mut self, name: impl Into<String>) -> Result<bool, TagError> {
        let tag = Tag::new(name)?;
        Ok(self.add(tag))
    }

    /// Removes the first tag named exactly `name`.
    ///
    /// Returns true iff such a tag existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(position) = self.tags.iter().position(|tag| tag.name == name) else {
            return false;
        };
        self.tags.remove(position);
        if self.built {
            self.rebuild();
        }
        true
    }

    /// Rebuilds the lookup from the sequence and returns the conflicts found.
    pub fn rebuild(&mut self) -> &[RegistryConflict] {
        self.lookup.clear();
        self.conflicts.clear();
        for (index, tag) in self.tags.iter().enumerate() {
            if is_blank(&tag.name) {
                self.conflicts.push(RegistryConflict::InvalidName {
                    index,
                });
            } else if self.lookup.contains_key(&tag.name) {
                self.conflicts.push(RegistryConflict::DuplicateName {
                    name: tag.name.clone(),
                    index,
                });
            } else {
                self.lookup.insert(tag.name.clone(), index);
            }
        }
        self.built = true;
        &self.conflicts
    }

    /// Discards the lookup and marks it unbuilt. Tags are untouched.
    pub fn clear_lookup(&mut self) {
        self.lookup.clear();
        self.conflicts.clear();
        self.built = false;
    }

    /// Drops blank-named and repeated tags, keeping first occurrences in order.
    ///
    /// Returns the number of removed tags.
    pub fn remove_invalid_or_duplicate(&mut self) -> usize {
        let before = self.tags.len();
        let mut seen = HashSet::new();
        self.tags.retain(|tag| !is_blank(&tag.name) && seen.insert(tag.name.clone()));
        let removed = before - self.tags.len();
        if removed > 0 {
            self.clear_lookup();
        }
        removed
    }

    /// Looks up a tag by exact name, building the lookup first if needed.
    pub fn lookup(&mut self, name: &str) -> Option<&Tag> {
        if !self.built {
            self.rebuild();
        }
        self.lookup.get(name).and_then(|index| self.tags.get(*index))
    }

    /// Returns the first tag named `name` without touching the lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    /// Returns a mutable reference to the first tag named `name`.
    ///
    /// The lookup is dropped because the caller may rename the tag.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
        self.clear_lookup();
        self.tags.iter_mut().find(|tag| tag.name == name)
    }

    /// Returns true when a tag named `name` exists.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }

    /// Returns true when the lookup reflects the sequence.
    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.built
    }

    /// Returns conflicts recorded by the most recent build.
    #[must_use]
    pub fn conflicts(&self) -> &[RegistryConflict] {
        &self.conflicts
    }

    /// Returns tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Iterates over tags in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Returns the number of tags, including invalid entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true when the registry has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagRegistry {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl FromIterator<Tag> for TagRegistry {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self::from_tags(iter.into_iter().collect())
    }
}
