use serde::Deserialize;
use service_core::config::{self as core_config, get_env, Environment};
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct PeopleConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub environment: Environment,
    pub log_level: String,
    pub mongodb: MongoDbSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoDbSettings {
    pub connection_string: String,
    pub database_name: String,
}

impl PeopleConfig {
    pub fn load() -> Result<Self, AppError> {
        // Handles .env and the APP__ prefix
        let common = core_config::Config::load()?;
        let environment = Environment::from_env()?;
        let is_prod = environment.is_prod();

        Ok(PeopleConfig {
            common,
            environment,
            log_level: get_env("LOG_LEVEL", Some("info"), false)?,
            mongodb: MongoDbSettings {
                connection_string: get_env(
                    "MONGODB_CONNECTION_STRING",
                    Some("mongodb://localhost:27017"),
                    is_prod,
                )?,
                database_name: get_env("MONGODB_DATABASE_NAME", Some("people_db"), is_prod)?,
            },
        })
    }

    pub fn swagger_enabled(&self) -> bool {
        self.environment == Environment::Dev
    }
}
