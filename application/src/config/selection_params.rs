//! Selection parameters for use cases
//!
//! [`SelectionParams`] groups the static parameters that control how the
//! choose and quick-decision use cases draw random numbers.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionParams {
    /// Fixed RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl SelectionParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random number generator these params describe
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
