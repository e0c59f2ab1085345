//! Composite score computation.

use super::types::{Attribute, Attributes, WeightConfig};

/// Computes the composite priority score for one set of attribute values.
///
/// Formula (fixed structure, weights configurable):
///
/// ```text
/// S = W1 * priorityScore / 100
///   + W2 * 100 / (dispatchWindow + 1)
///   + W3 * sizePenalty
/// ```
///
/// The result is rounded to two decimal places. A non-finite result maps
/// to `0.0` instead of propagating; with a validated `dispatchWindow >= 0`
/// the denominator cannot reach zero, but the engine does not rely on
/// callers upholding that.
///
/// Pure and deterministic: identical inputs always produce the same score.
///
/// # Examples
///
/// ```
/// use scoreheap::score::{score, Attributes, WeightConfig};
///
/// let s = score(&Attributes::new(85.0, 5.0, 3.0), &WeightConfig::default());
/// assert!((s - 20.52).abs() < 1e-10);
/// ```
pub fn score(attributes: &Attributes, weights: &WeightConfig) -> f64 {
    let ps = attributes.get(Attribute::PriorityScore);
    let dw = attributes.get(Attribute::DispatchWindow);
    let sp = attributes.get(Attribute::SizePenalty);

    let raw = weights.weight_of(Attribute::PriorityScore) * ps / 100.0
        + weights.weight_of(Attribute::DispatchWindow) * 100.0 / (dw + 1.0)
        + weights.weight_of(Attribute::SizePenalty) * sp;

    if raw.is_finite() {
        (raw * 100.0).round() / 100.0
    } else {
        0.0
    }
}
