//! Heap maintenance: sift-up, sift-down, bottom-up rebuild.

use super::types::{HeapItem, HeapMode};
use crate::score::{score, WeightConfig};

/// Index of the parent of `i`, or `None` for the root.
pub fn parent_of(i: usize) -> Option<usize> {
    if i == 0 {
        None
    } else {
        Some((i - 1) / 2)
    }
}

/// Index of the left child of `i`. Unchecked; compare against the length.
pub const fn left_of(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of `i`. Unchecked; compare against the length.
pub const fn right_of(i: usize) -> usize {
    2 * i + 2
}

/// Array-backed binary heap ordered by cached item scores.
///
/// The heap is the single owner of its items; rendering collaborators
/// receive copies via [`snapshot`](Self::snapshot), never references into
/// the backing storage.
///
/// # Examples
///
/// ```
/// use scoreheap::heap::{HeapItem, HeapMode, ScoredHeap};
/// use scoreheap::score::Attributes;
///
/// let mut heap = ScoredHeap::new(HeapMode::Max);
/// heap.insert(HeapItem::new(1, Attributes::default(), 20.52));
/// heap.insert(HeapItem::new(2, Attributes::default(), 38.23));
///
/// assert_eq!(heap.peek().map(|item| item.id), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredHeap {
    items: Vec<HeapItem>,
    mode: HeapMode,
}

impl ScoredHeap {
    /// Creates an empty heap with the given ordering mode.
    pub fn new(mode: HeapMode) -> Self {
        Self {
            items: Vec::new(),
            mode,
        }
    }

    /// Builds a valid heap from an arbitrary item sequence.
    ///
    /// Bottom-up construction: sift-down from `n/2 - 1` down to index 0.
    /// O(n) comparisons for any input permutation. This is the only way
    /// heap order is restored after a bulk score change or a mode flip.
    pub fn rebuild(items: Vec<HeapItem>, mode: HeapMode) -> Self {
        let mut heap = Self { items, mode };
        heap.heapify();
        heap
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in heap order (index 0 is the root).
    pub fn items(&self) -> &[HeapItem] {
        &self.items
    }

    /// Copies the items out for rendering.
    pub fn snapshot(&self) -> Vec<HeapItem> {
        self.items.clone()
    }

    /// The root item, without removing it.
    pub fn peek(&self) -> Option<&HeapItem> {
        self.items.first()
    }

    /// Appends an item and sifts it up to its position.
    ///
    /// Returns the index the item settled at, for highlighting. Capacity
    /// enforcement is the caller's responsibility.
    pub fn insert(&mut self, item: HeapItem) -> usize {
        self.items.push(item);
        self.sift_up(self.items.len() - 1)
    }

    /// Removes and returns the root item.
    ///
    /// Returns `None` on an empty heap (a no-op, not an error). With more
    /// than one element, the last element moves to the root and sifts
    /// down to restore the heap property.
    pub fn extract_root(&mut self) -> Option<HeapItem> {
        match self.items.len() {
            0 => None,
            1 => self.items.pop(),
            n => {
                self.items.swap(0, n - 1);
                let root = self.items.pop();
                self.sift_down(0);
                root
            }
        }
    }

    /// Re-heapifies in place under a (possibly new) ordering mode.
    pub fn reorder(&mut self, mode: HeapMode) {
        self.mode = mode;
        self.heapify();
    }

    /// Refreshes every cached score against the given weights.
    ///
    /// Does NOT reorder: item positions are unchanged, so the heap
    /// property may not hold afterwards. The caller must follow with
    /// [`reorder`](Self::reorder).
    pub fn recompute_scores(&mut self, weights: &WeightConfig) {
        for item in &mut self.items {
            item.score = score(&item.attributes, weights);
        }
    }

    fn heapify(&mut self) {
        let n = self.items.len();
        for i in (0..n / 2).rev() {
            self.sift_down(i);
        }
    }

    /// Moves the item at `index` up while it outranks its parent.
    /// Returns the index it settled at.
    fn sift_up(&mut self, index: usize) -> usize {
        let mut current = index;
        while let Some(parent) = parent_of(current) {
            if self
                .mode
                .outranks(self.items[current].score, self.items[parent].score)
            {
                self.items.swap(current, parent);
                current = parent;
            } else {
                break;
            }
        }
        current
    }

    /// Moves the item at `index` down while a child outranks it.
    ///
    /// At each step the extreme of {current, left, right} is chosen; ties
    /// keep the current index, so equal scores never swap.
    fn sift_down(&mut self, index: usize) {
        let len = self.items.len();
        let mut current = index;

        loop {
            let left = left_of(current);
            let right = right_of(current);
            let mut target = current;

            if left < len
                && self
                    .mode
                    .outranks(self.items[left].score, self.items[target].score)
            {
                target = left;
            }
            if right < len
                && self
                    .mode
                    .outranks(self.items[right].score, self.items[target].score)
            {
                target = right;
            }

            if target == current {
                break;
            }
            self.items.swap(current, target);
            current = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Attributes;

    fn item(id: u64, score: f64) -> HeapItem {
        HeapItem::new(id, Attributes::default(), score)
    }

    fn assert_heap_property(heap: &ScoredHeap) {
        let items = heap.items();
        for i in 1..items.len() {
            let p = parent_of(i).unwrap();
            assert!(
                !heap.mode().outranks(items[i].score, items[p].score),
                "heap property violated at index {i}: child {} vs parent {}",
                items[i].score,
                items[p].score
            );
        }
    }

    #[test]
    fn test_index_arithmetic() {
        assert_eq!(parent_of(0), None);
        assert_eq!(parent_of(1), Some(0));
        assert_eq!(parent_of(2), Some(0));
        assert_eq!(parent_of(5), Some(2));
        assert_eq!(left_of(0), 1);
        assert_eq!(right_of(0), 2);
        assert_eq!(left_of(3), 7);
        assert_eq!(right_of(3), 8);
    }

    #[test]
    fn test_insert_sifts_up_to_root() {
        let mut heap = ScoredHeap::new(HeapMode::Max);
        heap.insert(item(1, 10.0));
        heap.insert(item(2, 5.0));
        let settled = heap.insert(item(3, 20.0));

        assert_eq!(settled, 0);
        assert_eq!(heap.peek().map(|i| i.id), Some(3));
        assert_eq!(heap.len(), 3);
        assert_heap_property(&heap);
    }

    #[test]
    fn test_insert_returns_settled_index() {
        let mut heap = ScoredHeap::new(HeapMode::Max);
        heap.insert(item(1, 30.0));
        let settled = heap.insert(item(2, 10.0));
        // Does not outrank the root, stays at the appended slot.
        assert_eq!(settled, 1);
    }

    #[test]
    fn test_extract_root_empty_is_noop() {
        let mut heap = ScoredHeap::new(HeapMode::Max);
        assert!(heap.extract_root().is_none());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_extract_root_single_item_empties() {
        let mut heap = ScoredHeap::new(HeapMode::Max);
        heap.insert(item(1, 20.52));
        let removed = heap.extract_root();
        assert_eq!(removed.map(|i| i.id), Some(1));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_extract_root_promotes_next_extreme() {
        let mut heap = ScoredHeap::rebuild(
            vec![item(1, 20.52), item(2, 16.0), item(3, 26.80), item(4, 7.7)],
            HeapMode::Max,
        );
        let removed = heap.extract_root().unwrap();
        assert!((removed.score - 26.80).abs() < 1e-10);
        assert!((heap.peek().unwrap().score - 20.52).abs() < 1e-10);
        assert_eq!(heap.len(), 3);
        assert_heap_property(&heap);
    }

    #[test]
    fn test_extract_drains_in_sorted_order() {
        let scores = [3.0, 1.0, 4.0, 1.5, 9.0, 2.6, 5.0];
        let mut heap = ScoredHeap::new(HeapMode::Max);
        for (id, &s) in scores.iter().enumerate() {
            heap.insert(item(id as u64, s));
        }

        let mut drained = Vec::new();
        while let Some(root) = heap.extract_root() {
            drained.push(root.score);
            assert_heap_property(&heap);
        }

        let mut expected = scores.to_vec();
        expected.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(drained, expected);
    }

    #[test]
    fn test_min_mode() {
        let mut heap = ScoredHeap::new(HeapMode::Min);
        for (id, s) in [(1, 5.0), (2, 1.0), (3, 3.0), (4, 0.5)] {
            heap.insert(item(id, s));
        }
        assert!((heap.peek().unwrap().score - 0.5).abs() < 1e-10);
        assert_heap_property(&heap);

        heap.extract_root();
        assert!((heap.peek().unwrap().score - 1.0).abs() < 1e-10);
        assert_heap_property(&heap);
    }

    #[test]
    fn test_rebuild_arbitrary_permutation() {
        let items: Vec<HeapItem> = [8.0, 1.0, 9.0, 2.0, 7.0, 3.0, 6.0, 4.0, 5.0]
            .iter()
            .enumerate()
            .map(|(id, &s)| item(id as u64, s))
            .collect();

        let heap = ScoredHeap::rebuild(items.clone(), HeapMode::Max);
        assert_eq!(heap.len(), items.len());
        assert!((heap.peek().unwrap().score - 9.0).abs() < 1e-10);
        assert_heap_property(&heap);

        // Multiset of ids preserved.
        let mut ids: Vec<u64> = heap.items().iter().map(|i| i.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..items.len() as u64).collect::<Vec<_>>());
    }

    #[test]
    fn test_rebuild_idempotent() {
        let items: Vec<HeapItem> = [4.0, 2.0, 7.0, 1.0, 3.0]
            .iter()
            .enumerate()
            .map(|(id, &s)| item(id as u64, s))
            .collect();

        let once = ScoredHeap::rebuild(items, HeapMode::Max);
        let twice = ScoredHeap::rebuild(once.snapshot(), HeapMode::Max);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reorder_flips_mode() {
        let mut heap = ScoredHeap::rebuild(
            vec![item(1, 5.0), item(2, 1.0), item(3, 3.0)],
            HeapMode::Max,
        );
        heap.reorder(HeapMode::Min);
        assert_eq!(heap.mode(), HeapMode::Min);
        assert!((heap.peek().unwrap().score - 1.0).abs() < 1e-10);
        assert_heap_property(&heap);
    }

    #[test]
    fn test_equal_scores_do_not_swap() {
        let items = vec![item(1, 2.0), item(2, 2.0), item(3, 2.0)];
        let before = items.clone();
        let heap = ScoredHeap::rebuild(items, HeapMode::Max);
        // All scores equal: bottom-up heapify finds no strict violation.
        assert_eq!(heap.items(), &before[..]);
    }

    #[test]
    fn test_recompute_scores_does_not_reorder() {
        use crate::score::{Attribute, WeightConfig};

        let a = HeapItem::new(1, Attributes::new(85.0, 5.0, 3.0), 20.52);
        let b = HeapItem::new(2, Attributes::new(90.0, 2.0, 4.0), 38.23);
        let mut heap = ScoredHeap::rebuild(vec![a, b], HeapMode::Max);
        let ids_before: Vec<u64> = heap.items().iter().map(|i| i.id).collect();

        // Zeroing the dominant window term changes every score ...
        let weights = WeightConfig::default().with_weight(Attribute::DispatchWindow, 0.0);
        heap.recompute_scores(&weights);

        // ... but positions are untouched until reorder.
        let ids_after: Vec<u64> = heap.items().iter().map(|i| i.id).collect();
        assert_eq!(ids_before, ids_after);
        // 1*90/100 + 0 + 1*4 = 4.9
        assert!((heap.peek().unwrap().score - 4.9).abs() < 1e-10);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut heap = ScoredHeap::new(HeapMode::Max);
        heap.insert(item(1, 10.0));
        let mut snap = heap.snapshot();
        snap[0].score = 99.0;
        assert!((heap.peek().unwrap().score - 10.0).abs() < 1e-10);
    }
}
