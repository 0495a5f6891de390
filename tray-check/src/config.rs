use circle_tray::io::svg::SvgDrawOptions;
use circle_tray::layout::LayoutConfig;
use serde::{Deserialize, Serialize};

/// Configuration of the tray checker
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct TrayCheckConfig {
    /// Uniform factor applied to the tray dimensions, the spacing and all diameters of an instance
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    /// Spacing used for instances that do not define one (before scaling)
    #[serde(default)]
    pub default_spacing: f32,
    /// Configuration of the grid layout
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for TrayCheckConfig {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            default_spacing: 0.0,
            layout: LayoutConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

fn default_scale_factor() -> f32 {
    4.0
}
