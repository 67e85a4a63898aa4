use std::str::FromStr;
use std::sync::Arc;

use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;

use crate::config::AppConfig;

pub struct GlobalState {
    pub config: AppConfig,
    pub db: Arc<sqlx::PgPool>,
}

impl GlobalState {
    pub fn new(config: AppConfig, db: Arc<sqlx::PgPool>) -> Self {
        Self { config, db }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SetupDatabaseError {
    #[error("failed to parse database uri: {0}")]
    UriParse(sqlx::Error),
    #[error("connect error: {0}")]
    Connect(#[from] sqlx::Error),
}

pub async fn setup_database(config: &AppConfig) -> Result<Arc<sqlx::PgPool>, SetupDatabaseError> {
    let options = PgConnectOptions::from_str(&config.database.uri)
        .map_err(SetupDatabaseError::UriParse)?
        .disable_statement_logging()
        .to_owned();

    let db = sqlx::PgPool::connect_with(options)
        .await
        .map_err(SetupDatabaseError::Connect)?;

    Ok(Arc::new(db))
}
