use itertools::Itertools;

use crate::fit::ShelfPlacement;
use crate::geometry::geo_traits::CollidesWith;
use crate::layout::TrayLayout;
use crate::util::FPA;

/// A disc placed by the shelf simulation must respect the spacing margin on every side of the tray.
pub fn shelf_placement_is_in_check(
    width: f32,
    height: f32,
    spacing: f32,
    placement: &ShelfPlacement,
    diameter: f32,
) -> bool {
    let ShelfPlacement { x, y, .. } = *placement;
    FPA(x) >= FPA(spacing)
        && FPA(x + diameter) <= FPA(width - spacing)
        && FPA(y - diameter) >= FPA(spacing)
        && FPA(y) <= FPA(height - spacing)
}

/// Every label appears at most once in the layout.
pub fn layout_labels_are_unique(layout: &TrayLayout) -> bool {
    layout.drawables.iter().map(|d| d.label).all_unique()
}

/// Pairs of labels whose drawn disks overlap. Touching disks do not count.
pub fn colliding_drawables(layout: &TrayLayout) -> Vec<(usize, usize)> {
    layout
        .drawables
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a.circle().collides_with(&b.circle()))
        .map(|(a, b)| (a.label, b.label))
        .collect()
}
