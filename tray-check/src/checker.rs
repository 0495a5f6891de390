use std::time::Instant;

use circle_tray::entities::TrayInstance;
use circle_tray::fit::FitReport;
use circle_tray::io::export;
use circle_tray::io::ext_repr::ExtSolution;
use circle_tray::layout::TrayLayout;
use log::info;
use thousands::Separable;

use crate::config::TrayCheckConfig;

/// Runs one submission: the feasibility check and the layout of a single instance.
pub struct TrayChecker {
    pub instance: TrayInstance,
    pub config: TrayCheckConfig,
}

/// Everything computed for one submission
#[derive(Debug, Clone)]
pub struct CheckSolution {
    pub report: FitReport,
    pub layout: TrayLayout,
    /// Wall time of the computation, in milliseconds
    pub time_ms: f64,
}

impl CheckSolution {
    pub fn is_feasible(&self) -> bool {
        self.report.is_feasible()
    }

    pub fn export(&self, n_circles: usize) -> ExtSolution {
        export::export_solution(&self.report, &self.layout, n_circles)
    }
}

impl TrayChecker {
    pub fn new(instance: TrayInstance, config: TrayCheckConfig) -> Self {
        Self { instance, config }
    }

    pub fn check(&self) -> CheckSolution {
        let start = Instant::now();

        // both engines consume the same grouped input independently
        let report = self.instance.check_fit();
        let layout = self.instance.layout(&self.config.layout);

        let time_ms = start.elapsed().as_secs_f64() * 1000.0;

        match &report.failure {
            None => info!(
                "[CHECK] all {} circles fit inside the tray",
                self.instance.n_discs().separate_with_commas()
            ),
            Some(failure) => info!(
                "[CHECK] circles do not fit inside the tray, circle #{} of group {:?} could not be placed ({}/{} checked)",
                failure.original_index,
                failure.group_key,
                report.n_discs_checked.separate_with_commas(),
                self.instance.n_discs().separate_with_commas()
            ),
        }
        info!(
            "[CHECK] layout of {} drawables ({} out of bounds) computed in {:.3}ms",
            layout.drawables.len().separate_with_commas(),
            layout.out_of_bounds().len(),
            time_ms
        );

        CheckSolution {
            report,
            layout,
            time_ms,
        }
    }
}
