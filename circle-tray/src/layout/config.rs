use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

/// What to do with discs whose grid cell puts them (partly) outside the tray, minus the spacing margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Trust the feasibility check and emit every disc, even if it is out of bounds
    #[default]
    Trust,
    /// Do not emit discs that are out of bounds
    Clip,
}

/// Configuration of the grid layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Position of the top-left corner of the tray outline
    pub origin: Point,
    /// Maximum number of rows of a group on the right side
    pub right_max_rows: usize,
    /// Maximum number of columns of a group on the right side
    pub right_max_cols: usize,
    /// Maximum number of rows of a group on the left side, the columns are unbounded
    pub left_max_rows: usize,
    pub bounds_policy: BoundsPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Point(0.0, 0.0),
            right_max_rows: 7,
            right_max_cols: 20,
            left_max_rows: 3,
            bounds_policy: BoundsPolicy::Trust,
        }
    }
}
