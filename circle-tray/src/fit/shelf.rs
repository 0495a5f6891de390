use serde::{Deserialize, Serialize};

use crate::entities::Tray;
use crate::util::assertions;

/// Why a disc could not be placed on a shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The disc plus its margins is wider than the tray, no shelf can ever hold it
    ExceedsWidth,
    /// The disc would breach the top margin of the tray
    ExceedsHeight,
}

/// Where the shelf simulation put a disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfPlacement {
    /// Left edge of the disc
    pub x: f32,
    /// Bottom edge of the disc (screen coordinates, the disc spans `[y - diameter, y]`)
    pub y: f32,
    /// 0-based index of the shelf, counted from the bottom of the tray
    pub shelf: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShelfOutcome {
    Placed(ShelfPlacement),
    Rejected(FailureKind),
}

/// Left-to-right, bottom-to-top shelf packing simulation.
///
/// Discs are placed next to each other starting from the bottom-left corner of the tray.
/// When a disc does not fit in the width anymore, a new shelf is started on top of the tallest
/// disc of the current shelf.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    width: f32,
    height: f32,
    spacing: f32,
    x: f32,
    y: f32,
    row_max: f32,
    shelf: usize,
}

impl ShelfPacker {
    pub fn new(tray: &Tray, spacing: f32) -> Self {
        Self {
            width: tray.width(),
            height: tray.height(),
            spacing,
            x: spacing,
            y: tray.height() - spacing,
            row_max: 0.0,
            shelf: 0,
        }
    }

    /// Places a disc of the given diameter. A rejected disc leaves the packer untouched.
    pub fn place(&mut self, diameter: f32) -> ShelfOutcome {
        let s = self.spacing;

        if s + diameter + s > self.width {
            return ShelfOutcome::Rejected(FailureKind::ExceedsWidth);
        }

        let (mut x, mut y, mut row_max, mut shelf) = (self.x, self.y, self.row_max, self.shelf);
        if x + diameter + s > self.width {
            //start a new shelf on top of the current one
            x = s;
            y -= row_max + s;
            row_max = 0.0;
            shelf += 1;
        }
        if y - diameter < s {
            return ShelfOutcome::Rejected(FailureKind::ExceedsHeight);
        }

        let placement = ShelfPlacement { x, y, shelf };
        debug_assert!(
            assertions::shelf_placement_is_in_check(self.width, self.height, s, &placement, diameter),
            "shelf placement out of bounds: {placement:?}, diameter: {diameter}"
        );

        self.x = x + diameter + s;
        self.y = y;
        self.row_max = f32::max(row_max, diameter);
        self.shelf = shelf;

        ShelfOutcome::Placed(placement)
    }

    /// Bottom edge of the current shelf.
    pub fn shelf_y(&self) -> f32 {
        self.y
    }

    /// Number of shelves opened so far.
    pub fn n_shelves(&self) -> usize {
        self.shelf + 1
    }
}
