use circle_tray::io::ext_repr::{ExtSolution, ExtTrayInstance};
use serde::{Deserialize, Serialize};

use crate::config::TrayCheckConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckOutput {
    #[serde(flatten)]
    pub instance: ExtTrayInstance,
    pub solution: ExtSolution,
    pub config: TrayCheckConfig,
}
