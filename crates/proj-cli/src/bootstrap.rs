use std::path::Path;

use anyhow::Context;
use proj_config::ProjectsConfig;

use crate::cli::OutputFormat;

/// Load layered configuration (including `.env`) and apply `--database`.
pub fn load_config(database_override: Option<&Path>) -> anyhow::Result<ProjectsConfig> {
    let config = ProjectsConfig::load_with_dotenv().context("failed to load configuration")?;
    Ok(apply_database_override(config, database_override))
}

/// A `--database` path always selects a local store, even when a remote URL
/// is configured.
pub fn apply_database_override(
    mut config: ProjectsConfig,
    database_override: Option<&Path>,
) -> ProjectsConfig {
    if let Some(path) = database_override {
        tracing::debug!(path = %path.display(), "using --database override");
        config.database.path = path.to_string_lossy().into_owned();
        config.database.url.clear();
        config.database.auth_token.clear();
    }
    config
}

/// Output format from `general.default_format`.
pub fn default_format(config: &ProjectsConfig) -> anyhow::Result<OutputFormat> {
    OutputFormat::from_config(&config.general.default_format)
        .map_err(|reason| anyhow::anyhow!("invalid general.default_format: {reason}"))
}
