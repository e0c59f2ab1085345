//! Weighted scoring of item attributes.
//!
//! The ordering key of the heap is not a raw value but a composite score
//! computed from three fixed attributes and a set of per-attribute weights:
//!
//! ```text
//! S = W1 * priorityScore / 100
//!   + W2 * 100 / (dispatchWindow + 1)
//!   + W3 * sizePenalty
//! ```
//!
//! The formula structure is fixed; only the weights are configurable.
//! Attribute names form a closed enumeration, so an invalid name can
//! never reach the engine.

mod engine;
mod types;

pub use engine::score;
pub use types::{Attribute, Attributes, WeightConfig, WeightEntry};
