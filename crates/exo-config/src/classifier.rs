//! External candidate-classifier settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_threshold() -> f64 {
    0.5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Probability at or above which a body counts as a candidate.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl ClassifierConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(ConfigError::invalid(
                "classifier.threshold",
                format!("must be within [0, 1], got {}", self.threshold),
            ))
        }
    }
}
