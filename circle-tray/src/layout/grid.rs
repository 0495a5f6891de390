use crate::entities::Side;
use crate::layout::LayoutConfig;

/// Number of rows and columns of the grid a group is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl GridDims {
    /// Sizes the grid of a group of `n` discs whose largest diameter is `largest`.
    ///
    /// The number of rows is limited by how many of the largest discs stack in the tray height,
    /// and by the per-side row cap. The columns follow from the rows.
    /// A grid that would end up taller than wide is replaced by a square one.
    pub fn new(
        side: Side,
        largest: f32,
        n: usize,
        tray_height: f32,
        spacing: f32,
        config: &LayoutConfig,
    ) -> Self {
        debug_assert!(n > 0, "grid of an empty group");

        // at least one row, even if the largest disc exceeds the tray height
        let stackable = ((tray_height - spacing) / (largest + spacing)).floor();
        let stackable = if stackable >= 1.0 { stackable as usize } else { 1 };

        let (mut rows, mut cols) = match side {
            Side::Right => {
                let rows = stackable.min(config.right_max_rows).max(1);
                let cols = n.div_ceil(rows).min(config.right_max_cols).max(1);
                (rows, cols)
            }
            Side::Left => {
                let rows = stackable.min(config.left_max_rows).max(1);
                (rows, n.div_ceil(rows))
            }
        };

        if rows > cols {
            let side_len = ceil_sqrt(n);
            rows = side_len;
            cols = side_len;
        }

        GridDims { rows, cols }
    }

    pub fn n_cells(&self) -> usize {
        self.rows * self.cols
    }
}

fn ceil_sqrt(n: usize) -> usize {
    let s = n.isqrt();
    if s * s < n { s + 1 } else { s }
}
