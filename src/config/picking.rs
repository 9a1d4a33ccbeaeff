use serde::{Deserialize, Serialize};

use crate::rendering::picking::TieBreak;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickConfig {
    #[serde(default)]
    pub tie_break: TieBreak,
}
