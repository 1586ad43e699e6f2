//! Profile export settings.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "planet_profile.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where `--export` writes the profile when no explicit path is given.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
