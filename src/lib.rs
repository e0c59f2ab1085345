//! Core library of an interactive binary-heap visualizer.
//!
//! The heap on display is a priority queue whose ordering key is a
//! weighted scoring formula the user tunes live. This crate provides the
//! pure, value-based core the presentation layer drives:
//!
//! - **[`score`]**: the weighted scoring engine — a fixed three-attribute
//!   formula with configurable per-attribute weights.
//! - **[`heap`]**: the array-backed scored heap — sift-up, sift-down,
//!   bottom-up rebuild, score recomputation, and index arithmetic.
//! - **[`session`]**: the coordinating state owner — validates inserts
//!   (capacity, attribute ranges), assigns ids, and sequences score
//!   recomputation with heap rebuilds.
//! - **[`layout`]**: pure geometry for the tree diagram (node positions,
//!   canvas extents).
//! - **[`heatmap`]**: synthetic weekly activity data and color bucketing
//!   for the secondary heatmap panel.
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous, driven by user events.
//! The session owns the heap sequence outright; rendering collaborators
//! receive copies, never references into live state, so no operation has
//! a partial-update window visible to callers. Operations are total:
//! the only observable "failure" modes are a silently declined insert
//! (validation) and a no-op extraction from an empty heap.

pub mod heap;
pub mod heatmap;
pub mod layout;
pub mod score;
pub mod session;
