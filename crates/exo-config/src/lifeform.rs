//! Lifeform synthesis defaults.

use exo_core::lifeform::DEFAULT_BASE_SIZE_M;
use exo_core::{HabitatTag, LifeformRequest};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_habitat() -> String {
    HabitatTag::Terrestrial.to_string()
}

const fn default_base_size() -> f64 {
    DEFAULT_BASE_SIZE_M
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LifeformConfig {
    /// Habitat tag used when the caller does not pick one (e.g. "aquatic").
    #[serde(default = "default_habitat")]
    pub habitat: String,

    /// Base lifeform size in meters before planetary scaling.
    #[serde(default = "default_base_size")]
    pub base_size: f64,
}

impl Default for LifeformConfig {
    fn default() -> Self {
        Self {
            habitat: default_habitat(),
            base_size: default_base_size(),
        }
    }
}

impl LifeformConfig {
    /// Synthesis request built from these defaults.
    #[must_use]
    pub fn request(&self) -> LifeformRequest {
        LifeformRequest::new(self.habitat.as_str(), self.base_size)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.base_size > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::invalid(
                "lifeform.base_size",
                format!("must be positive, got {}", self.base_size),
            ))
        }
    }
}
