use axum_helpers::SessionConfig;
use core_config::{app_info, server::ServerConfig, upload::UploadConfig, AppInfo, FromEnv};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub upload: UploadConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let session = SessionConfig::from_env()?;
        let upload = UploadConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            mongodb,
            server,
            session,
            upload,
        })
    }
}
