use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    pub surrealdb_address: String,
    pub surrealdb_username: String,
    pub surrealdb_password: String,
    pub surrealdb_namespace: String,
    pub surrealdb_database: String,
    pub author_dump_path: String,
    pub works_dump_path: String,
    #[serde(default = "default_line_concurrency")]
    pub ingest_line_concurrency: usize,
    #[serde(default = "default_progress_log_interval")]
    pub progress_log_interval: usize,
}

fn default_line_concurrency() -> usize {
    1
}

fn default_progress_log_interval() -> usize {
    10_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            surrealdb_address: "mem://".to_string(),
            surrealdb_username: "root".to_string(),
            surrealdb_password: "root".to_string(),
            surrealdb_namespace: "catalog".to_string(),
            surrealdb_database: "catalog".to_string(),
            author_dump_path: "./data/ol_dump_authors.txt".to_string(),
            works_dump_path: "./data/ol_dump_works.txt".to_string(),
            ingest_line_concurrency: default_line_concurrency(),
            progress_log_interval: default_progress_log_interval(),
        }
    }
}

pub fn get_config() -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?;

    config.try_deserialize()
}
