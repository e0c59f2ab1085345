//! Session coordination: the single owner of heap, weights, and mode.
//!
//! The session is the explicit state holder the heap and scoring engine
//! are driven through. Every mutation funnels through it:
//!
//! - **insert** validates capacity and attribute ranges before an item is
//!   created, then delegates to the heap;
//! - **weight edits** sequence score recomputation followed by a rebuild,
//!   so the transient out-of-order window never escapes the session;
//! - **mode flips**, **randomize**, and **clear** replace or re-heapify
//!   the sequence wholesale.
//!
//! Ids are assigned here: a monotonic counter, never reused, advancing
//! even across deletions and clears.

mod config;
mod state;

pub use config::SessionConfig;
pub use state::Session;
