//! Tree diagram geometry.
//!
//! Pure positional math for laying out a complete binary tree of `n`
//! nodes on a canvas. No rendering here: the renderer receives node
//! coordinates and canvas extents and draws whatever it likes with them.
//!
//! Geometry: each tree level is a horizontal band of height
//! [`LEVEL_HEIGHT`]; the base width reserves [`SLOT_WIDTH`] per node on
//! the deepest possible level, and each level splits that width evenly
//! among its slots, centering every node within its slot.

mod tree;

pub use tree::{
    canvas_size, node_positions, tree_levels, CanvasSize, NodePosition, LEVEL_HEIGHT, SLOT_WIDTH,
    TOP_MARGIN,
};
