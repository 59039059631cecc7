//! Selection configuration from TOML (`[selection]` section)

use roulette_application::SelectionParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelectionConfig {
    /// Fixed RNG seed for reproducible picks
    pub seed: Option<u64>,
}

impl FileSelectionConfig {
    pub fn to_selection_params(&self) -> SelectionParams {
        SelectionParams { seed: self.seed }
    }
}
