use thiserror::Error;

/// Input that is rejected before any packing logic runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("tray {dimension} must be a finite, positive number, got {value}")]
    NonPositiveDimension { dimension: &'static str, value: f32 },

    #[error("spacing must be a finite, non-negative number, got {0}")]
    InvalidSpacing(f32),

    #[error("scale factor must be a finite, positive number, got {0}")]
    InvalidScaleFactor(f32),

    #[error("circle #{original_index} has an invalid diameter: {diameter}")]
    InvalidDiameter { original_index: usize, diameter: f32 },

    #[error(
        "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
    )]
    InvalidRect {
        x_min: f32,
        y_min: f32,
        x_max: f32,
        y_max: f32,
    },
}
