//! Internal label management utilities
//!
//! This module provides the [`LabelManager`] type for managing variable labels
//! with automatic conflict resolution and efficient lookup.

use std::collections::HashMap;
use std::sync::Arc;

use super::error::CoverError;

/// Label manager for input variables with configurable prefix
///
/// Maintains both ordered labels (Vec) and fast name->index lookup (HashMap).
/// Generated labels skip names that are already taken.
#[derive(Clone, Debug)]
pub(super) struct LabelManager<const PREFIX: char> {
    labels: Vec<Arc<str>>,
    label_map: HashMap<Arc<str>, usize>,
}

impl<const PREFIX: char> LabelManager<PREFIX> {
    pub(super) fn new() -> Self {
        Self {
            labels: Vec::new(),
            label_map: HashMap::new(),
        }
    }

    /// Create from existing labels, rejecting duplicates
    pub(super) fn from_labels(labels: Vec<Arc<str>>) -> Result<Self, CoverError> {
        let mut label_map = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if label_map.insert(Arc::clone(label), i).is_some() {
                return Err(CoverError::DuplicateLabel {
                    name: Arc::clone(label),
                });
            }
        }
        Ok(Self { labels, label_map })
    }

    pub(super) fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub(super) fn len(&self) -> usize {
        self.labels.len()
    }

    pub(super) fn as_slice(&self) -> &[Arc<str>] {
        &self.labels
    }

    /// Find position by label name
    pub(super) fn find_position(&self, name: &str) -> Option<usize> {
        self.label_map.get(name).copied()
    }

    /// First `PREFIX<n>` name, starting from `start`, not yet in use
    fn next_available_index(&self, start: usize) -> usize {
        let mut n = start;
        while self.label_map.contains_key(format!("{}{}", PREFIX, n).as_str()) {
            n += 1;
        }
        n
    }

    /// Append a generated label for `position`
    ///
    /// Uses the natural name (e.g. `x2` for position 2) unless it is taken.
    fn add_generated(&mut self, position: usize) {
        let n = self.next_available_index(position);
        let label: Arc<str> = Arc::from(format!("{}{}", PREFIX, n).as_str());
        self.label_map.insert(Arc::clone(&label), position);
        self.labels.push(label);
    }

    /// Generate labels until there are `target_size` of them
    pub(super) fn backfill_to(&mut self, target_size: usize) {
        while self.labels.len() < target_size {
            let position = self.labels.len();
            self.add_generated(position);
        }
    }
}
