use anyhow::Result;
use sqlx::migrate::MigrateDatabase;

#[tracing::instrument(skip_all, fields(url = %config.database.url))]
pub async fn migrate(config: sequenceit::config::Config) -> Result<()> {
    tracing::info!("running database migrations");

    let pool = sequenceit::db::create_pool(&config.database.url, 1).await?;
    sequenceit::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("migrations completed");

    Ok(())
}

#[tracing::instrument(skip_all, fields(url = %config.database.url))]
pub async fn reset(config: sequenceit::config::Config) -> Result<()> {
    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("dropping existing database");
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("database does not exist, nothing to drop");
    }

    migrate(config).await
}
