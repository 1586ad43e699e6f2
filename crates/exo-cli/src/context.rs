use anyhow::Context;
use exo_config::ExoConfig;
use exo_schema::SchemaRegistry;

use crate::cli::GlobalFlags;

/// Everything a command handler needs besides its own arguments.
pub struct AppContext {
    pub config: ExoConfig,
    pub schemas: SchemaRegistry,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = ExoConfig::load_with_dotenv(flags.config.as_deref())
            .context("failed to load exoprofile configuration")?;
        tracing::debug!(
            habitat = %config.lifeform.habitat,
            base_size = config.lifeform.base_size,
            threshold = config.classifier.threshold,
            "configuration loaded"
        );

        Ok(Self {
            config,
            schemas: SchemaRegistry::new(),
        })
    }
}
