use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;

pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.to_owned());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("fyyur_server::entity::*")
        .sync(&db)
        .await?;

    info!(backend = ?db.get_database_backend(), "Database schema synced");
    Ok(db)
}
