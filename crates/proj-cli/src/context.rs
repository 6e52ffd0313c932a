use anyhow::Context;
use proj_config::ProjectsConfig;
use proj_db::service::ProjectsService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ProjectsService,
}

impl AppContext {
    /// Resolve the configured store and open the service over it.
    pub async fn init(config: &ProjectsConfig) -> anyhow::Result<Self> {
        let target = config
            .database
            .target()
            .context("invalid database configuration")?;
        let service = ProjectsService::open(&target)
            .await
            .context("failed to open the project database")?;
        Ok(Self { service })
    }
}
