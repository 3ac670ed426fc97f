use clap::ValueEnum;
use sequenceit_shared::Error;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    User,
    Admin,
}

impl From<Role> for sequenceit::user::Role {
    fn from(value: Role) -> Self {
        match value {
            Role::User => Self::User,
            Role::Admin => Self::Admin,
        }
    }
}

#[tracing::instrument(skip_all, fields(email = %email))]
pub async fn set_role(
    config: sequenceit::config::Config,
    email: String,
    role: Role,
) -> anyhow::Result<()> {
    let pool = sequenceit::db::create_pool(&config.database.url, 1).await?;
    sequenceit::db::migrate(&pool).await?;

    let command = sequenceit::user::Command(pool.clone());
    let role = sequenceit::user::Role::from(role);

    match command.set_role(&email, role).await {
        Ok(()) => tracing::info!(role = %role, "role updated"),
        Err(Error::NotFound) => tracing::error!("user {email} not found"),
        Err(err) => return Err(err.into()),
    }

    pool.close().await;

    Ok(())
}
