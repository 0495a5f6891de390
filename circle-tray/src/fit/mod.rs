//! Greedy first-fit-decreasing shelf packing.
//!
//! A `true` result guarantees that the discs of every group can be placed by the shelf heuristic.
//! A `false` result only means that the heuristic failed, it is not a proof that no packing exists.

mod shelf;

#[doc(inline)]
pub use shelf::FailureKind;
#[doc(inline)]
pub use shelf::ShelfOutcome;
#[doc(inline)]
pub use shelf::ShelfPacker;
#[doc(inline)]
pub use shelf::ShelfPlacement;

use log::{debug, info, trace};

use crate::entities::{Group, Tray, TrayInstance};

/// The first disc the shelf heuristic was unable to place.
#[derive(Debug, Clone, PartialEq)]
pub struct FitFailure {
    pub kind: FailureKind,
    pub group_key: String,
    pub original_index: usize,
    pub diameter: f32,
    /// Bottom edge of the last shelf that was successfully opened before the failure
    pub last_shelf_y: f32,
}

/// Outcome of the feasibility check
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FitReport {
    /// [`None`] if every disc of every group was placed
    pub failure: Option<FitFailure>,
    /// Number of discs handed to the shelf simulation before it finished or stopped
    pub n_discs_checked: usize,
}

impl FitReport {
    pub fn is_feasible(&self) -> bool {
        self.failure.is_none()
    }
}

/// Checks whether all groups fit in the tray, see [`check`].
pub fn fits(tray: &Tray, spacing: f32, groups: &[Group]) -> bool {
    check(tray, spacing, groups).is_feasible()
}

/// Simulates the shelf packing of every group and stops at the first disc that cannot be placed.
///
/// Every group is simulated on its own, starting from the bottom-left corner of the tray.
/// The result is the logical AND over all groups.
pub fn check(tray: &Tray, spacing: f32, groups: &[Group]) -> FitReport {
    let mut n_discs_checked = 0;

    for group in groups {
        let mut packer = ShelfPacker::new(tray, spacing);
        for disc in group.sorted_discs() {
            n_discs_checked += 1;
            match packer.place(disc.diameter) {
                ShelfOutcome::Placed(p) => {
                    trace!(
                        "[FIT] circle #{} (d: {:.3}) on shelf {} at x: {:.3}, y: {:.3}",
                        disc.original_index, disc.diameter, p.shelf, p.x, p.y
                    );
                }
                ShelfOutcome::Rejected(kind) => {
                    let failure = FitFailure {
                        kind,
                        group_key: group.key().to_owned(),
                        original_index: disc.original_index,
                        diameter: disc.diameter,
                        last_shelf_y: packer.shelf_y(),
                    };
                    info!(
                        "[FIT] circle #{} (d: {:.3}) of group {:?} cannot be placed: {:?}",
                        failure.original_index, failure.diameter, failure.group_key, kind
                    );
                    return FitReport {
                        failure: Some(failure),
                        n_discs_checked,
                    };
                }
            }
        }
        debug!(
            "[FIT] group {:?} ({} circles) fits on {} shelves",
            group.key(),
            group.len(),
            packer.n_shelves()
        );
    }

    FitReport {
        failure: None,
        n_discs_checked,
    }
}

impl TrayInstance {
    /// See [`fits`]
    pub fn fits(&self) -> bool {
        fits(&self.tray, self.spacing, &self.groups)
    }

    /// See [`check`]
    pub fn check_fit(&self) -> FitReport {
        check(&self.tray, self.spacing, &self.groups)
    }
}
