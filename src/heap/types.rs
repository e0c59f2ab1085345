//! Heap item and ordering mode.

use crate::score::Attributes;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Comparator direction: which score occupies the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeapMode {
    /// Largest score at the root.
    Max,

    /// Smallest score at the root.
    ///
    /// Fully supported by the heap, though the reference front-end only
    /// ever drives the max variant.
    Min,
}

impl HeapMode {
    /// Whether score `a` outranks score `b` under this mode.
    ///
    /// Strict comparison: equal scores never outrank each other, so ties
    /// produce no swap during sift-up or sift-down.
    pub fn outranks(self, a: f64, b: f64) -> bool {
        match self {
            HeapMode::Max => a > b,
            HeapMode::Min => a < b,
        }
    }
}

/// A single heap element: identity, raw attributes, and the cached score.
///
/// Ids are assigned by the session at insert time, monotonically
/// increasing and never reused, even across deletions. The score is
/// derived; it is only ever written by score recomputation, never edited
/// directly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeapItem {
    pub id: u64,
    pub attributes: Attributes,
    pub score: f64,
}

impl HeapItem {
    pub fn new(id: u64, attributes: Attributes, score: f64) -> Self {
        Self {
            id,
            attributes,
            score,
        }
    }
}
