use crate::fit::FitReport;
use crate::io::ext_repr::{ExtDrawable, ExtFitFailure, ExtOutline, ExtSolution};
use crate::layout::TrayLayout;

/// Exports the feasibility report and the layout of a computation to an external representation.
pub fn export_solution(report: &FitReport, layout: &TrayLayout, n_circles: usize) -> ExtSolution {
    let outline = layout.outline;

    ExtSolution {
        feasible: report.is_feasible(),
        failure: report.failure.as_ref().map(|f| ExtFitFailure {
            kind: f.kind,
            group: f.group_key.clone(),
            circle: f.original_index,
            diameter: f.diameter,
        }),
        n_circles,
        outline: ExtOutline {
            x: outline.x_min,
            y: outline.y_min,
            width: outline.width(),
            height: outline.height(),
        },
        drawables: layout
            .drawables
            .iter()
            .map(|d| ExtDrawable {
                cx: d.center.x(),
                cy: d.center.y(),
                r: d.radius,
                label: d.label,
            })
            .collect(),
        out_of_bounds: layout.out_of_bounds().to_vec(),
    }
}
