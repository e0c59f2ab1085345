//! Session state and operations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SessionConfig;
use crate::heap::{HeapItem, HeapMode, ScoredHeap};
use crate::score::{score, Attribute, Attributes, WeightConfig};

/// Weight inputs are clamped to this range before storage.
const WEIGHT_RANGE: (f64, f64) = (0.0, 10.0);

/// Randomize draws integer attribute values from these ranges.
const RANDOM_PRIORITY_SCORE: std::ops::RangeInclusive<u32> = 1..=100;
const RANDOM_DISPATCH_WINDOW: std::ops::RangeInclusive<u32> = 1..=40;
const RANDOM_SIZE_PENALTY: std::ops::RangeInclusive<u32> = 1..=8;

/// The five demo items a fresh visualizer starts from.
const DEMO_ATTRIBUTES: [(f64, f64, f64); 5] = [
    (85.0, 5.0, 3.0),
    (60.0, 10.0, 2.0),
    (90.0, 2.0, 4.0),
    (45.0, 15.0, 1.0),
    (70.0, 8.0, 2.0),
];

/// Owner of the heap, the weight configuration, and the id counter.
///
/// All mutations flow through the session, which is responsible for the
/// validation the heap itself does not perform (capacity, attribute
/// ranges) and for sequencing `recompute_scores` + `reorder` after bulk
/// weight changes.
///
/// # Examples
///
/// ```
/// use scoreheap::score::Attributes;
/// use scoreheap::session::{Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig::default().with_seed(7))?;
/// let settled = session.insert(Attributes::new(85.0, 5.0, 3.0));
/// assert!(settled.is_some());
/// # Ok::<(), String>(())
/// ```
#[derive(Debug)]
pub struct Session {
    heap: ScoredHeap,
    weights: WeightConfig,
    config: SessionConfig,
    next_id: u64,
    rng: StdRng,
}

impl Session {
    /// Creates an empty max-mode session.
    pub fn new(config: SessionConfig) -> Result<Self, String> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            heap: ScoredHeap::new(HeapMode::Max),
            weights: WeightConfig::default(),
            config,
            next_id: 1,
            rng,
        })
    }

    /// Creates a session pre-populated with the five demo items, scored
    /// under unit weights and heap-ordered.
    pub fn with_demo_items(config: SessionConfig) -> Result<Self, String> {
        let mut session = Self::new(config)?;
        let items: Vec<HeapItem> = DEMO_ATTRIBUTES
            .iter()
            .map(|&(ps, dw, sp)| {
                let attributes = Attributes::new(ps, dw, sp);
                let item = HeapItem::new(
                    session.next_id,
                    attributes,
                    score(&attributes, &session.weights),
                );
                session.next_id += 1;
                item
            })
            .collect();
        session.heap = ScoredHeap::rebuild(items, session.heap.mode());
        Ok(session)
    }

    /// Validates and inserts a new item.
    ///
    /// Returns the index the item settled at, for highlighting. Declines
    /// silently (`None`) when the heap is at capacity or any attribute is
    /// out of range; no item is created and no id is consumed.
    pub fn insert(&mut self, attributes: Attributes) -> Option<usize> {
        if self.heap.len() >= self.config.capacity || !attributes.in_range() {
            return None;
        }
        let item = HeapItem::new(self.next_id, attributes, score(&attributes, &self.weights));
        self.next_id += 1;
        Some(self.heap.insert(item))
    }

    /// Removes and returns the root item; `None` on an empty heap.
    pub fn extract_root(&mut self) -> Option<HeapItem> {
        self.heap.extract_root()
    }

    /// Updates one weight (clamped to `0..=10`), then recomputes every
    /// score and restores heap order.
    pub fn set_weight(&mut self, attribute: Attribute, weight: f64) {
        if !weight.is_finite() {
            return;
        }
        self.weights
            .set_weight(attribute, weight.clamp(WEIGHT_RANGE.0, WEIGHT_RANGE.1));
        self.rescore();
    }

    /// Replaces the whole weight configuration, then rescores.
    pub fn set_weights(&mut self, weights: WeightConfig) {
        self.weights = weights;
        self.rescore();
    }

    /// Restores the default unit weights, then rescores.
    pub fn reset_weights(&mut self) {
        self.set_weights(WeightConfig::default());
    }

    /// Switches the comparator direction and re-heapifies.
    pub fn set_mode(&mut self, mode: HeapMode) {
        self.heap.reorder(mode);
    }

    /// Replaces the heap with 4 to 9 randomly generated items.
    ///
    /// Fresh ids are assigned; the counter keeps advancing monotonically.
    pub fn randomize(&mut self) {
        let count = self
            .rng
            .random_range(self.config.randomize_count.clone());
        let mode = self.heap.mode();

        let items: Vec<HeapItem> = (0..count)
            .map(|_| {
                let attributes = Attributes::new(
                    self.rng.random_range(RANDOM_PRIORITY_SCORE) as f64,
                    self.rng.random_range(RANDOM_DISPATCH_WINDOW) as f64,
                    self.rng.random_range(RANDOM_SIZE_PENALTY) as f64,
                );
                let item = HeapItem::new(
                    self.next_id,
                    attributes,
                    score(&attributes, &self.weights),
                );
                self.next_id += 1;
                item
            })
            .collect();

        self.heap = ScoredHeap::rebuild(items, mode);
    }

    /// Empties the heap. Ids are not reset.
    pub fn clear(&mut self) {
        self.heap = ScoredHeap::new(self.heap.mode());
    }

    pub fn mode(&self) -> HeapMode {
        self.heap.mode()
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The items in heap order.
    pub fn items(&self) -> &[HeapItem] {
        self.heap.items()
    }

    /// Copies the items out for rendering.
    pub fn snapshot(&self) -> Vec<HeapItem> {
        self.heap.snapshot()
    }

    /// The root item, without removing it.
    pub fn peek(&self) -> Option<&HeapItem> {
        self.heap.peek()
    }

    /// Recompute + reorder, the only sequence in which bulk score
    /// changes are applied.
    fn rescore(&mut self) {
        let mode = self.heap.mode();
        self.heap.recompute_scores(&self.weights);
        self.heap.reorder(mode);
    }
}
