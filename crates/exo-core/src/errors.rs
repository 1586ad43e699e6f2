//! Error types for the profile pipeline.
//!
//! Missing fields and unrecognized habitat tags are not errors: the resolver
//! and synthesizer substitute defaults for them. Only caller-supplied
//! parameters and profile export can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A caller-supplied parameter is outside its accepted domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Writing the exported profile failed.
    #[error("Failed to export profile to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile could not be encoded as JSON.
    #[error("Failed to encode profile: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
