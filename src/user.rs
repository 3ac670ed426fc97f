use std::time::{SystemTime, UNIX_EPOCH};

use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sequenceit_db::table::User;
use sequenceit_shared::{Error, Result, invalid};
use sqlx::{SqlitePool, prelude::FromRow};
use strum::{AsRefStr, Display, EnumString};
use ulid::Ulid;
use validator::Validate;

#[derive(EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: sqlx::types::Text<Role>,
    pub created_at: i64,
}

impl UserRow {
    pub fn is_admin(&self) -> bool {
        self.role.0 == Role::Admin
    }
}

#[derive(Validate)]
pub struct LoginInput {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub role: Role,
}

/// Admin accounts.
#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    pub async fn register(&self, input: RegisterInput) -> Result<String> {
        input.validate()?;

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| Error::Server(e.to_string()))?
            .to_string();

        let id = Ulid::new().to_string();
        let created_at = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;

        let statment = sea_query::Query::insert()
            .into_table(User::Table)
            .columns([
                User::Id,
                User::Email,
                User::PasswordHash,
                User::Role,
                User::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.email.to_lowercase().into(),
                password_hash.into(),
                input.role.to_string().into(),
                created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(user_id = %id, role = %input.role, "user registered");

        Ok(id)
    }

    /// Returns the account matching the credentials.
    pub async fn login(&self, input: LoginInput) -> Result<UserRow> {
        input.validate()?;

        let Some(user) = self.find_by_email(&input.email).await? else {
            return Err(invalid(
                "email",
                "credentials",
                "Invalid email or password. Please try again.",
            ));
        };

        let parsed_hash =
            PasswordHash::new(&user.password_hash).map_err(|e| Error::Server(e.to_string()))?;

        if Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            return Err(invalid(
                "email",
                "credentials",
                "Invalid email or password. Please try again.",
            ));
        }

        Ok(user)
    }

    pub async fn set_role(&self, email: &str, role: Role) -> Result<()> {
        let statment = sea_query::Query::update()
            .table(User::Table)
            .values([(User::Role, role.to_string().into())])
            .and_where(Expr::col(User::Email).eq(email.to_lowercase()))
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.find(Expr::col(User::Email).eq(email.to_lowercase()))
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.find(Expr::col(User::Id).eq(id)).await
    }

    async fn find(&self, cond: Expr) -> Result<Option<UserRow>> {
        let statment = sea_query::Query::select()
            .columns([
                User::Id,
                User::Email,
                User::PasswordHash,
                User::Role,
                User::CreatedAt,
            ])
            .from(User::Table)
            .and_where(cond)
            .limit(1)
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    /// Creates the configured root account as an admin when it does not exist.
    pub async fn ensure_root(&self, email: &str, password: &str) -> Result<()> {
        if let Some(user) = self.find_by_email(email).await? {
            if !user.is_admin() {
                self.set_role(email, Role::Admin).await?;
                tracing::info!(email, "root account promoted to admin");
            }

            return Ok(());
        }

        self.register(RegisterInput {
            email: email.to_owned(),
            password: password.to_owned(),
            role: Role::Admin,
        })
        .await?;

        tracing::info!(email, "root account created");

        Ok(())
    }
}
