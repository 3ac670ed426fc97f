use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Career;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Career::Table)
        .col(
            ColumnDef::new(Career::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Career::Title)
                .string()
                .not_null()
                .string_len(150),
        )
        .col(ColumnDef::new(Career::Department).string().string_len(50))
        .col(ColumnDef::new(Career::Location).string().string_len(50))
        .col(ColumnDef::new(Career::EmploymentType).string().string_len(50))
        .col(ColumnDef::new(Career::Description).text().not_null())
        .col(
            ColumnDef::new(Career::Requirements)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(Career::Published)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Career::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Career::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Career::Table).to_owned()
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
