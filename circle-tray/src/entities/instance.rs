use crate::entities::{Group, Tray, ValidationError};

/// All input of a single computation, captured at once and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TrayInstance {
    pub tray: Tray,
    /// Margin between the tray boundary and any disc, and gap between adjacent discs, in both axes
    pub spacing: f32,
    pub groups: Vec<Group>,
}

impl TrayInstance {
    pub fn try_new(tray: Tray, spacing: f32, groups: Vec<Group>) -> Result<Self, ValidationError> {
        if !(spacing.is_finite() && spacing >= 0.0) {
            return Err(ValidationError::InvalidSpacing(spacing));
        }
        if let Some(disc) = groups
            .iter()
            .flat_map(|g| g.discs())
            .find(|d| !(d.diameter.is_finite() && d.diameter > 0.0))
        {
            return Err(ValidationError::InvalidDiameter {
                original_index: disc.original_index,
                diameter: disc.diameter,
            });
        }
        Ok(Self {
            tray,
            spacing,
            groups,
        })
    }

    pub fn n_discs(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }
}
