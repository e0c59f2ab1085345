//! Synthetic weekly activity heatmap.
//!
//! Backs the secondary heatmap panel: a 7-day by 24-hour grid of
//! activity percentages (0..=100) synthesized to look like a plausible
//! usage pattern — busier during waking hours, quieter on weekends,
//! with lunch and evening peaks — plus the five-band color bucketing
//! the panel uses to paint cells.
//!
//! Unrelated to the heap; the two panels only share a renderer.

mod color;
mod grid;

pub use color::{ColorScheme, Rgb};
pub use grid::{synthesize_week, DayActivity, HeatmapCell, DAY_LABELS, HOURS_PER_DAY};
