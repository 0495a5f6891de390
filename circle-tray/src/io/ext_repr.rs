use serde::{Deserialize, Serialize};

use crate::entities::Side;
use crate::fit::FailureKind;

/// External representation of a [`TrayInstance`](crate::entities::TrayInstance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtTrayInstance {
    /// Name of the instance
    #[serde(default)]
    pub name: String,
    pub tray: ExtTray,
    /// Spacing between the discs and to the tray boundary.
    /// Falls back to the importer's default if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spacing: Option<f32>,
    pub circles: ExtCircles,
}

/// External representation of a [`Tray`](crate::entities::Tray).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtTray {
    pub width: f32,
    pub height: f32,
}

/// The various ways the circles of an instance can be supplied
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtCircles {
    /// Comma-separated list of diameters, forming a single group on the left side
    Diameters(String),
    /// Arrow records (`_ => group => diameter => _ => right?`), an entry may hold several lines
    Records(Vec<ExtRow<String>>),
    /// Already structured records
    Structured(Vec<ExtRow<ExtCircle>>),
}

/// A single row of a circle list. Rows that do not match the expected shape are kept as raw JSON
/// and skipped on import instead of rejecting the whole instance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtRow<T> {
    Valid(T),
    Malformed(serde_json::Value),
}

/// A single structured circle record
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCircle {
    /// Key of the group the circle belongs to
    #[serde(default)]
    pub group: String,
    pub diameter: f32,
    #[serde(default)]
    pub side: Side,
}

/// External representation of the result of a computation: the feasibility and the layout.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub feasible: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub failure: Option<ExtFitFailure>,
    pub n_circles: usize,
    pub outline: ExtOutline,
    pub drawables: Vec<ExtDrawable>,
    /// Labels of the circles whose grid cell leaves the tray margins
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub out_of_bounds: Vec<usize>,
}

/// External representation of a [`FitFailure`](crate::fit::FitFailure).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFitFailure {
    pub kind: FailureKind,
    pub group: String,
    /// Label of the circle that could not be placed
    pub circle: usize,
    pub diameter: f32,
}

/// The tray outline, with its top-left corner at (x, y)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtOutline {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// External representation of a [`Drawable`](crate::layout::Drawable).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtDrawable {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub label: usize,
}
