//! Construction config
//!
//! Lets a host application carry generator setup inside its own serde
//! config files.
//!
//! ```
//! use resumable_rng::RngConfig;
//!
//! let config: RngConfig = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
//! let rng = config.build();
//! assert_eq!(rng.seed(), 42);
//! ```

use crate::generator::DeterministicRng;
use crate::seed::{SeedSource, TimeSeed};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngConfig {
    /// Fixed seed; `None` falls back to a seed source
    #[serde(default)]
    pub seed: Option<i32>,
}

impl RngConfig {
    pub fn with_seed(seed: i32) -> Self {
        Self { seed: Some(seed) }
    }

    /// Build a generator, falling back to the wall clock when unseeded
    pub fn build(&self) -> DeterministicRng {
        self.build_with(&TimeSeed)
    }

    /// Build a generator, falling back to `fallback` when unseeded
    pub fn build_with<S: SeedSource + ?Sized>(&self, fallback: &S) -> DeterministicRng {
        match self.seed {
            Some(seed) => DeterministicRng::new(seed),
            None => DeterministicRng::from_seed_source(fallback),
        }
    }
}
