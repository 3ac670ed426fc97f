use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::TeamMember;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(TeamMember::Table)
        .col(
            ColumnDef::new(TeamMember::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(TeamMember::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(TeamMember::Role)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(ColumnDef::new(TeamMember::Bio).text())
        .col(ColumnDef::new(TeamMember::ImageUrl).string().string_len(2048))
        .col(ColumnDef::new(TeamMember::LinkedinUrl).string().string_len(2048))
        .col(ColumnDef::new(TeamMember::GithubUrl).string().string_len(2048))
        .col(ColumnDef::new(TeamMember::TeamCategory).string().string_len(50))
        .col(ColumnDef::new(TeamMember::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(TeamMember::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(TeamMember::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
