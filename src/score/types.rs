//! Attribute model and weight configuration.

use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three recognized item attributes.
///
/// The attribute set is closed by design: the scoring formula has a fixed
/// structure, and modeling the names as an enumeration keeps an unknown
/// attribute from ever reaching the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Attribute {
    /// Raw priority score of the item, valid input range `0..=100`.
    PriorityScore,

    /// Remaining dispatch window, valid input range `0..=50`.
    ///
    /// Enters the formula as `100 / (window + 1)`, so a tighter window
    /// yields a higher score.
    DispatchWindow,

    /// Size penalty, valid input range `0..=10`.
    SizePenalty,
}

impl Attribute {
    /// All attributes in formula order (W1, W2, W3).
    pub const ALL: [Attribute; 3] = [
        Attribute::PriorityScore,
        Attribute::DispatchWindow,
        Attribute::SizePenalty,
    ];

    /// The input range accepted for this attribute at insert time.
    ///
    /// Range validation happens in the session before an item is created;
    /// the scoring engine itself accepts any finite value.
    pub fn valid_range(self) -> RangeInclusive<f64> {
        match self {
            Attribute::PriorityScore => 0.0..=100.0,
            Attribute::DispatchWindow => 0.0..=50.0,
            Attribute::SizePenalty => 0.0..=10.0,
        }
    }

    /// Display label for configuration panels.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::PriorityScore => "Priority Score (W1)",
            Attribute::DispatchWindow => "Dispatch Window (W2)",
            Attribute::SizePenalty => "Size Penalty (W3)",
        }
    }
}

/// Raw attribute values of a single item.
///
/// One value per recognized attribute. `Attributes::default()` is all
/// zeros, which is the substitution rule for an unspecified attribute.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attributes {
    pub priority_score: f64,
    pub dispatch_window: f64,
    pub size_penalty: f64,
}

impl Attributes {
    pub fn new(priority_score: f64, dispatch_window: f64, size_penalty: f64) -> Self {
        Self {
            priority_score,
            dispatch_window,
            size_penalty,
        }
    }

    /// Returns the value of the given attribute.
    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::PriorityScore => self.priority_score,
            Attribute::DispatchWindow => self.dispatch_window,
            Attribute::SizePenalty => self.size_penalty,
        }
    }

    /// Whether every value lies within its attribute's valid input range.
    pub fn in_range(&self) -> bool {
        Attribute::ALL.iter().all(|&attr| {
            let v = self.get(attr);
            v.is_finite() && attr.valid_range().contains(&v)
        })
    }
}

/// A single weight assignment: attribute, multiplier, and display label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightEntry {
    pub attribute: Attribute,
    pub weight: f64,
    pub label: String,
}

/// Ordered collection of per-attribute weights, one entry per attribute.
///
/// Storage enforces no weight range; input clamping to `0..=10` is the
/// session's concern. A missing entry falls back to weight `1.0`.
///
/// # Examples
///
/// ```
/// use scoreheap::score::{Attribute, WeightConfig};
///
/// let weights = WeightConfig::default()
///     .with_weight(Attribute::DispatchWindow, 0.6)
///     .with_weight(Attribute::SizePenalty, 0.1);
///
/// assert!((weights.weight_of(Attribute::PriorityScore) - 1.0).abs() < 1e-10);
/// assert!((weights.weight_of(Attribute::DispatchWindow) - 0.6).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightConfig {
    entries: Vec<WeightEntry>,
}

impl Default for WeightConfig {
    /// Unit weights for all three attributes, in formula order.
    fn default() -> Self {
        Self {
            entries: Attribute::ALL
                .iter()
                .map(|&attribute| WeightEntry {
                    attribute,
                    weight: 1.0,
                    label: attribute.label().to_string(),
                })
                .collect(),
        }
    }
}

impl WeightConfig {
    /// Builds a configuration from explicit entries.
    pub fn new(entries: Vec<WeightEntry>) -> Self {
        Self { entries }
    }

    /// Returns the weight for an attribute, defaulting to `1.0` when the
    /// entry is absent.
    pub fn weight_of(&self, attribute: Attribute) -> f64 {
        self.entries
            .iter()
            .find(|e| e.attribute == attribute)
            .map(|e| e.weight)
            .unwrap_or(1.0)
    }

    /// Sets the weight for an attribute. No-op when the entry is absent.
    pub fn set_weight(&mut self, attribute: Attribute, weight: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.attribute == attribute) {
            entry.weight = weight;
        }
    }

    /// Builder-style variant of [`set_weight`](Self::set_weight).
    pub fn with_weight(mut self, attribute: Attribute, weight: f64) -> Self {
        self.set_weight(attribute, weight);
        self
    }

    /// The entries in configuration order.
    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }
}
