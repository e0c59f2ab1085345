//! Array-backed binary heap keyed by the composite score.
//!
//! The heap stores items in a `Vec` interpreted as a complete binary tree
//! via implicit indexing: for index `i`, the parent is `(i - 1) / 2` and
//! the children are `2i + 1` and `2i + 2`.
//!
//! Repair procedures are the two textbook ones:
//!
//! - **sift-up** after appending an element;
//! - **sift-down** after relocating the last element to the root.
//!
//! Full construction uses bottom-up heapify (sift-down from `n/2 - 1`
//! down to the root), which is O(n) comparisons overall.
//!
//! Scores are cached on the items. After a bulk weight change the caller
//! refreshes them with [`ScoredHeap::recompute_scores`] and then restores
//! heap order with [`ScoredHeap::reorder`]; the window between the two is
//! the only state in which the heap property may not hold.

mod engine;
mod types;

pub use engine::{left_of, parent_of, right_of, ScoredHeap};
pub use types::{HeapItem, HeapMode};
