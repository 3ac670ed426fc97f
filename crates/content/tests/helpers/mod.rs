use std::{path::PathBuf, str::FromStr};

use sequenceit_content::{Collection, Command, FormData};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    sequenceit_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub fn form(pairs: &[(&str, &str)]) -> FormData {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Creates records one millisecond apart so ids sort in insertion order.
#[allow(dead_code)]
pub async fn create_all(
    cmd: &Command,
    collection: Collection,
    forms: Vec<FormData>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for form in forms {
        ids.push(cmd.create(collection, &form).await?);
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    Ok(ids)
}
