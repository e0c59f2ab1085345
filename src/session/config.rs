//! Session configuration.

use std::ops::RangeInclusive;

/// Configuration for a heap session.
///
/// # Examples
///
/// ```
/// use scoreheap::session::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_capacity(15)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum number of items the session accepts. Inserts beyond this
    /// are silently declined.
    pub capacity: usize,

    /// Number of items produced by a randomize, drawn uniformly from
    /// this range.
    pub randomize_count: RangeInclusive<usize>,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: 15,
            randomize_count: 4..=9,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_randomize_count(mut self, range: RangeInclusive<usize>) -> Self {
        self.randomize_count = range;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("capacity must be at least 1".into());
        }
        if self.randomize_count.is_empty() {
            return Err("randomize_count range must be non-empty".into());
        }
        if *self.randomize_count.end() > self.capacity {
            return Err(format!(
                "randomize_count upper bound {} exceeds capacity {}",
                self.randomize_count.end(),
                self.capacity
            ));
        }
        Ok(())
    }
}
