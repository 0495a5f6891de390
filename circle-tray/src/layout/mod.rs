//! Grid layout of the groups inside the tray.
//!
//! Every group is drawn as a grid of rows and columns, its largest disc first, row-major.
//! Groups on the left side grow rightwards from the left edge, groups on the right side grow
//! leftwards from the right edge. Both sides keep their own cursor, rows stack upwards from the
//! bottom of the tray.
//!
//! This is a different heuristic than the shelf packing of [`crate::fit`]: the two sides are
//! packed as independent lanes while the feasibility check packs every group from the same corner.
//! A layout can therefore leave the tray for an instance that was reported feasible, and vice versa.
//! [`TrayLayout::out_of_bounds`] lists the discs for which this happened.

mod config;
mod grid;

#[doc(inline)]
pub use config::BoundsPolicy;
#[doc(inline)]
pub use config::LayoutConfig;
#[doc(inline)]
pub use grid::GridDims;

use log::{debug, warn};

use crate::entities::{Group, Side, Tray, TrayInstance, sorted_by_largest};
use crate::geometry::geo_traits::ContainedBy;
use crate::geometry::primitives::{Circle, Point, Rect};
use crate::util::assertions;

/// A disc to be painted: its position, size and the label drawn inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub center: Point,
    pub radius: f32,
    /// The original (1-based) input index of the disc
    pub label: usize,
}

impl Drawable {
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

/// Everything the render sink needs to paint a computation.
#[derive(Debug, Clone, PartialEq)]
pub struct TrayLayout {
    pub outline: Rect,
    pub spacing: f32,
    pub drawables: Vec<Drawable>,
    out_of_bounds: Vec<usize>,
}

impl TrayLayout {
    /// Labels of the discs that (partly) leave the tray minus the spacing margin, in placement order.
    /// Depending on the [`BoundsPolicy`] these are either part of `drawables` or omitted.
    pub fn out_of_bounds(&self) -> &[usize] {
        &self.out_of_bounds
    }

    /// The region in which discs are in bounds: the outline shrunk by the spacing.
    pub fn inner_region(&self) -> Option<Rect> {
        self.outline.resize_by(-self.spacing, -self.spacing)
    }

    pub fn drawable(&self, label: usize) -> Option<&Drawable> {
        self.drawables.iter().find(|d| d.label == label)
    }
}

/// The horizontal positions at which the next group of each side starts.
#[derive(Debug, Clone, Copy)]
struct SideCursors {
    left: f32,
    right: f32,
}

impl SideCursors {
    fn new(outline: &Rect, spacing: f32) -> Self {
        Self {
            left: outline.x_min + spacing,
            right: outline.x_max - spacing,
        }
    }

    fn get(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Moves the cursor of `side` inwards by `amount`
    fn advance(&mut self, side: Side, amount: f32) {
        match side {
            Side::Left => self.left += amount,
            Side::Right => self.right -= amount,
        }
    }
}

/// Computes the drawables of all groups.
///
/// Groups are laid out in descending order of their largest disc, the discs of a group in descending
/// order of diameter. After a group the cursor of its side moves inwards by
/// `cols * (largest + spacing) + spacing`.
pub fn layout(tray: &Tray, spacing: f32, groups: &[Group], config: &LayoutConfig) -> TrayLayout {
    let outline = tray.outline(config.origin);
    let inner = tray.inner_region(config.origin, spacing);
    let start_y = outline.y_max - spacing;

    let mut cursors = SideCursors::new(&outline, spacing);
    let mut drawables = Vec::with_capacity(groups.iter().map(Group::len).sum());
    let mut out_of_bounds = vec![];

    for group in sorted_by_largest(groups) {
        if group.is_empty() {
            continue;
        }
        let side = group.side();
        let dir = side.direction();
        let largest = group.largest_diameter();
        let grid = GridDims::new(side, largest, group.len(), tray.height(), spacing, config);

        let start_x = cursors.get(side);
        debug!(
            "[LAYOUT] group {:?} ({} circles, {} side): {}x{} grid starting at x: {:.3}",
            group.key(),
            group.len(),
            side,
            grid.rows,
            grid.cols,
            start_x
        );

        let (mut x, mut y) = (start_x, start_y);
        let (mut row, mut col) = (0, 0);

        for disc in group.sorted_discs() {
            let r = disc.radius();
            let drawable = Drawable {
                center: Point(x + dir * r, y - r),
                radius: r,
                label: disc.original_index,
            };

            let in_bounds = inner.is_some_and(|inner| drawable.circle().contained_by(&inner));
            match (in_bounds, config.bounds_policy) {
                (true, _) => drawables.push(drawable),
                (false, BoundsPolicy::Trust) => {
                    debug!("[LAYOUT] circle #{} is drawn out of bounds", drawable.label);
                    out_of_bounds.push(drawable.label);
                    drawables.push(drawable);
                }
                (false, BoundsPolicy::Clip) => {
                    warn!("[LAYOUT] circle #{} is out of bounds, not drawn", drawable.label);
                    out_of_bounds.push(drawable.label);
                }
            }

            col += 1;
            if col >= grid.cols {
                col = 0;
                row += 1;
                x = start_x;
                y -= disc.diameter + spacing;
            } else {
                x += dir * (disc.diameter + spacing);
            }

            if row >= grid.rows {
                //grid is full, continue one row higher
                row = 0;
                y -= disc.diameter + spacing;
            }
        }

        cursors.advance(side, grid.cols as f32 * (largest + spacing) + spacing);
    }

    if !out_of_bounds.is_empty() {
        warn!(
            "[LAYOUT] {} circles do not fit within the tray margins: {:?}",
            out_of_bounds.len(),
            out_of_bounds
        );
    }

    let layout = TrayLayout {
        outline,
        spacing,
        drawables,
        out_of_bounds,
    };
    debug_assert!(assertions::layout_labels_are_unique(&layout));
    layout
}

impl TrayInstance {
    /// See [`layout`]
    pub fn layout(&self, config: &LayoutConfig) -> TrayLayout {
        layout(&self.tray, self.spacing, &self.groups, config)
    }
}
