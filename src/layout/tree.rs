//! Node position computation for the heap tree diagram.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertical distance between consecutive tree levels, in canvas units.
pub const LEVEL_HEIGHT: f64 = 120.0;

/// Vertical offset of the root row.
pub const TOP_MARGIN: f64 = 80.0;

/// Horizontal space reserved per node on the deepest level.
pub const SLOT_WIDTH: f64 = 100.0;

/// Padding added to both canvas dimensions.
const CANVAS_PADDING: f64 = 100.0;

/// Canvas position of one tree node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

/// Canvas extents needed to fit the whole tree.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// Number of tree levels occupied by `len` nodes: `ceil(log2(len + 1))`.
pub fn tree_levels(len: usize) -> u32 {
    if len == 0 {
        0
    } else {
        len.ilog2() + 1
    }
}

/// Computes the canvas position of every node, in heap index order.
///
/// Node `i` sits on level `floor(log2(i + 1))`; a level with `2^L` slots
/// divides the base width evenly and centers each node in its slot.
pub fn node_positions(len: usize) -> Vec<NodePosition> {
    if len == 0 {
        return Vec::new();
    }

    let levels = tree_levels(len);
    let base_width = 2f64.powi(levels as i32 - 1) * SLOT_WIDTH;

    (0..len)
        .map(|i| {
            let level = (i + 1).ilog2();
            let slot = i + 1 - (1 << level);
            let level_width = base_width / 2f64.powi(level as i32);
            NodePosition {
                x: (slot as f64 + 0.5) * level_width,
                y: level as f64 * LEVEL_HEIGHT + TOP_MARGIN,
            }
        })
        .collect()
}

/// Canvas extents for a tree of `len` nodes. Zero-sized when empty.
pub fn canvas_size(len: usize) -> CanvasSize {
    if len == 0 {
        return CanvasSize {
            width: 0.0,
            height: 0.0,
        };
    }
    let levels = tree_levels(len);
    CanvasSize {
        width: 2f64.powi(levels as i32 - 1) * SLOT_WIDTH + CANVAS_PADDING,
        height: levels as f64 * LEVEL_HEIGHT + CANVAS_PADDING,
    }
}
