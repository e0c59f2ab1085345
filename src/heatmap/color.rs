//! Five-band color bucketing for heatmap cells.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Palette selection for the heatmap panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorScheme {
    /// Slate through blue and purple to pink.
    #[default]
    Default,
    /// Dark slate through cyan to near-white.
    Cool,
    /// Near-black through orange to pale peach.
    Warm,
}

impl ColorScheme {
    /// The five bands of this palette, darkest (lowest activity) first.
    pub fn bands(self) -> [Rgb; 5] {
        match self {
            ColorScheme::Default => [
                Rgb(15, 23, 42),
                Rgb(30, 58, 138),
                Rgb(59, 130, 246),
                Rgb(147, 51, 234),
                Rgb(236, 72, 153),
            ],
            ColorScheme::Cool => [
                Rgb(15, 23, 42),
                Rgb(21, 94, 117),
                Rgb(6, 182, 212),
                Rgb(103, 232, 249),
                Rgb(224, 242, 254),
            ],
            ColorScheme::Warm => [
                Rgb(23, 23, 23),
                Rgb(124, 45, 18),
                Rgb(234, 88, 12),
                Rgb(251, 146, 60),
                Rgb(254, 215, 170),
            ],
        }
    }

    /// Maps an activity value to its palette color.
    pub fn color_for(self, value: u8) -> Rgb {
        self.bands()[band_for(value)]
    }
}

/// Band index for an activity value: thresholds at 20/40/60/80.
pub fn band_for(value: u8) -> usize {
    match value {
        0..=20 => 0,
        21..=40 => 1,
        41..=60 => 2,
        61..=80 => 3,
        _ => 4,
    }
}
