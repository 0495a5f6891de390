use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The half of the tray a group is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Packed rightwards from the left edge
    #[default]
    Left,
    /// Packed leftwards from the right edge
    Right,
}

impl Side {
    /// Horizontal direction in which a group on this side grows: `1.0` for left, `-1.0` for right.
    pub fn direction(&self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A successfully parsed input row, before it has been assigned its original index.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscRecord {
    pub group_key: String,
    pub diameter: f32,
    pub side: Side,
}

/// A circle to be placed in the tray.
#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    /// Diameter, in the same unit as the tray
    pub diameter: f32,
    /// 1-based position among the successfully parsed input rows, drawn as the label of the disc
    pub original_index: usize,
}

impl Disc {
    pub fn new(diameter: f32, original_index: usize) -> Self {
        debug_assert!(original_index >= 1, "original index is 1-based");
        Self {
            diameter,
            original_index,
        }
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }
}
