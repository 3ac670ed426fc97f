use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Service;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Service::Table)
        .col(
            ColumnDef::new(Service::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Service::Title)
                .string()
                .not_null()
                .string_len(150),
        )
        .col(ColumnDef::new(Service::Description).text().not_null())
        .col(ColumnDef::new(Service::Icon).string().string_len(50))
        .col(
            ColumnDef::new(Service::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Service::Published)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Service::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Service::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Service::Table).to_owned()
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
