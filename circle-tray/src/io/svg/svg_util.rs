use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::primitives::{Point, Rect};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the original index inside every disc
    #[serde(default = "default_true")]
    pub labels: bool,
    ///Draw the region within the spacing margin as a dashed rectangle
    #[serde(default)]
    pub inner_margin: bool,
    ///Highlight discs that leave the tray margins
    #[serde(default = "default_true")]
    pub highlight_out_of_bounds: bool,
    ///Upper bound of the font size of the labels
    #[serde(default = "default_max_font_size")]
    pub max_label_font_size: f32,
}

fn default_true() -> bool {
    true
}

fn default_max_font_size() -> f32 {
    40.0
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            labels: true,
            inner_margin: false,
            highlight_out_of_bounds: true,
            max_label_font_size: default_max_font_size(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub tray_fill: Color,
    pub disc_fill: Color,
    pub label_fill: Color,
    pub out_of_bounds_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        tray_fill: Color(0xCC, 0x82, 0x4A),
        disc_fill: Color(0xFF, 0xC8, 0x79),
        label_fill: Color(0x2D, 0x2D, 0x2D),
        out_of_bounds_color: Color(0xFF, 0x00, 0x00), // RED
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        tray_fill: Color(0xD3, 0xD3, 0xD3),
        disc_fill: Color(0x7A, 0x7A, 0x7A),
        label_fill: Color(0xFF, 0xFF, 0xFF),
        out_of_bounds_color: Color(0xD0, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid color: {s:?}, expected #RRGGBB"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("invalid color: {s:?}, {e}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(D::Error::custom)
    }
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn circle(center: Point, radius: f32, params: &[(&str, &str)]) -> Circle {
    let mut circle = Circle::new()
        .set("cx", center.x())
        .set("cy", center.y())
        .set("r", radius);
    for param in params {
        circle = circle.set(param.0, param.1)
    }
    circle
}

pub fn rect_data(rect: &Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}
