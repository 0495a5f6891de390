use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use crate::layout::TrayLayout;

/// Paints the tray outline and every drawable of the layout, labeled with its original index.
pub fn layout_to_svg(layout: &TrayLayout, options: SvgDrawOptions, title: &str) -> Document {
    let outline = layout.outline;
    let vbox = outline.scale(1.10);
    let theme = &options.theme;

    let stroke_width =
        f32::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the tray
        let label_content = format!(
            "width: {:.3} | height: {:.3} | spacing: {:.3} | circles: {} | {}",
            outline.width(),
            outline.height(),
            layout.spacing,
            layout.drawables.len(),
            title,
        );
        Text::new(label_content)
            .set("x", outline.x_min)
            .set(
                "y",
                outline.y_min - 0.5 * 0.025 * f32::min(outline.width(), outline.height()),
            )
            .set("font-size", f32::min(outline.width(), outline.height()) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let tray_group = {
        let mut tray_group = Group::new().set("id", "tray").add(
            svg_util::data_to_path(
                svg_util::rect_data(&outline),
                &[
                    ("fill", &*format!("{}", theme.tray_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )
            .add(Title::new(format!(
                "tray, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
                outline.x_min, outline.y_min, outline.x_max, outline.y_max
            ))),
        );

        if let (true, Some(inner)) = (options.inner_margin, layout.inner_region()) {
            tray_group = tray_group.add(svg_util::data_to_path(
                svg_util::rect_data(&inner),
                &[
                    ("fill", "none"),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                    ("stroke-opacity", "0.5"),
                    ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ("stroke-linecap", "round"),
                    ("stroke-linejoin", "round"),
                ],
            ));
        }
        tray_group
    };

    let discs_group = {
        let mut discs_group = Group::new().set("id", "discs");
        let oob_stroke = svg_util::change_brightness(theme.out_of_bounds_color, 0.8);

        for drawable in &layout.drawables {
            let out_of_bounds = options.highlight_out_of_bounds
                && layout.out_of_bounds().contains(&drawable.label);
            let (stroke, width_factor) = match out_of_bounds {
                true => (format!("{oob_stroke}"), 3.0),
                false => ("black".to_owned(), 1.0),
            };

            let mut disc_group = Group::new()
                .set("id", format!("disc_{}", drawable.label))
                .add(Title::new(format!(
                    "circle #{}, d: {:.3}, center: ({:.3}, {:.3})",
                    drawable.label,
                    2.0 * drawable.radius,
                    drawable.center.x(),
                    drawable.center.y()
                )))
                .add(svg_util::circle(
                    drawable.center,
                    drawable.radius,
                    &[
                        ("fill", &*format!("{}", theme.disc_fill)),
                        ("stroke", &*stroke),
                        ("stroke-width", &*format!("{}", width_factor * stroke_width)),
                        ("opacity", "0.9"),
                    ],
                ));

            if options.labels {
                let font_size = f32::min(drawable.radius, options.max_label_font_size);
                disc_group = disc_group.add(
                    Text::new(format!("{}", drawable.label))
                        .set("x", drawable.center.x())
                        .set("y", drawable.center.y())
                        .set("font-size", font_size)
                        .set("font-family", "Arial, sans-serif")
                        .set("fill", format!("{}", theme.label_fill))
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central"),
                );
            }
            discs_group = discs_group.add(disc_group);
        }
        discs_group
    };

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    Document::new()
        .set("viewBox", vbox_svg)
        .add(tray_group)
        .add(discs_group)
        .add(label)
}
