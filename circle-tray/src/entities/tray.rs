use crate::entities::ValidationError;
use crate::geometry::primitives::{Point, Rect};

/// The rectangular tray in which all circles must be placed.
/// Width, height, diameters and spacing share the same (pre-scaled) unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tray {
    width: f32,
    height: f32,
}

impl Tray {
    pub fn try_new(width: f32, height: f32) -> Result<Self, ValidationError> {
        for (dimension, value) in [("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ValidationError::NonPositiveDimension { dimension, value });
            }
        }
        Ok(Tray { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The outline of the tray with its top-left corner at `origin`.
    pub fn outline(&self, origin: Point) -> Rect {
        Rect {
            x_min: origin.x(),
            y_min: origin.y(),
            x_max: origin.x() + self.width,
            y_max: origin.y() + self.height,
        }
    }

    /// The region in which circles may be drawn: the outline shrunk by `spacing` on every side.
    /// [`None`] if the spacing consumes the entire tray.
    pub fn inner_region(&self, origin: Point, spacing: f32) -> Option<Rect> {
        self.outline(origin).resize_by(-spacing, -spacing)
    }
}
