//! Energy → tree visual parameters.
//!
//! The tree lives in a fixed SVG coordinate space where the trunk base is
//! anchored at `y = 110`. Everything here is a pure function of the level.

use serde::{Deserialize, Serialize};

use crate::energy::MAX_ENERGY;

pub const TRUNK_BASE_Y: f64 = 110.0;
pub const SPARKLE_ANIMATION: &str = "sparkle 1.5s ease-in-out infinite";

/// Leaf hue, light → darker green as the tree grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafColor {
    /// level < 50
    Sprout,
    /// 50 ≤ level < 80
    Leafy,
    /// level ≥ 80
    Lush,
}

impl LeafColor {
    pub fn of(level: u8) -> Self {
        if level < 50 {
            LeafColor::Sprout
        } else if level < 80 {
            LeafColor::Leafy
        } else {
            LeafColor::Lush
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            LeafColor::Sprout => "#A5D6A7",
            LeafColor::Leafy => "#81C784",
            LeafColor::Lush => "#66BB6A",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeVisuals {
    pub level: u8,
    pub scale: f64,
    pub trunk_height: f64,
    pub trunk_y: f64,
    pub leaf_color: LeafColor,
    pub leaf_opacity: f64,
    pub flower_opacity: f64,
    pub sparkle_active: bool,
}

impl TreeVisuals {
    /// Animation to loop on the sparkles, if any.
    pub fn sparkle_animation(&self) -> Option<&'static str> {
        self.sparkle_active.then_some(SPARKLE_ANIMATION)
    }
}

/// Levels above the maximum are treated as the maximum.
pub fn map_energy(level: u8) -> TreeVisuals {
    let level = level.min(MAX_ENERGY);
    let growth = f64::from(level) / f64::from(MAX_ENERGY);
    let trunk_height = 20.0 + growth * 25.0;
    TreeVisuals {
        level,
        scale: 0.5 + growth * 0.8,
        trunk_height,
        trunk_y: TRUNK_BASE_Y - trunk_height,
        leaf_color: LeafColor::of(level),
        leaf_opacity: (0.6 + growth * 0.4).clamp(0.0, 1.0),
        flower_opacity: ((f64::from(level) - 60.0) / 40.0).clamp(0.0, 1.0),
        sparkle_active: level >= MAX_ENERGY,
    }
}
