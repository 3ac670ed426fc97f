use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;

#[tokio::test]
async fn test_migrator_creates_every_table() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;

    sequenceit_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    let tables: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(&mut *conn)
            .await?;
    let tables = tables.into_iter().map(|t| t.0).collect::<Vec<_>>();

    for table in [
        "benefit",
        "blog_post",
        "career",
        "case_study",
        "documentation",
        "faq",
        "project",
        "service",
        "team_member",
        "testimonial",
        "user",
    ] {
        assert!(tables.iter().any(|t| t == table), "missing table {table}");
    }

    Ok(())
}

#[tokio::test]
async fn test_user_email_is_unique_case_insensitive() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;

    sequenceit_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    sqlx::query(
        r#"INSERT INTO "user" (id, email, password_hash, role, created_at) VALUES ('a', 'Admin@Site.test', 'x', 'Admin', 0)"#,
    )
    .execute(&mut *conn)
    .await?;

    let duplicate = sqlx::query(
        r#"INSERT INTO "user" (id, email, password_hash, role, created_at) VALUES ('b', 'admin@site.test', 'x', 'Admin', 0)"#,
    )
    .execute(&mut *conn)
    .await;

    assert!(duplicate.is_err());

    Ok(())
}
