use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Documentation;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Documentation::Table)
        .col(
            ColumnDef::new(Documentation::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Documentation::Title)
                .string()
                .not_null()
                .string_len(150),
        )
        .col(ColumnDef::new(Documentation::Category).string().string_len(50))
        .col(ColumnDef::new(Documentation::Content).text().not_null())
        .col(ColumnDef::new(Documentation::Icon).string().string_len(50))
        .col(
            ColumnDef::new(Documentation::OrderIndex)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Documentation::Published)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Documentation::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Documentation::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Documentation::Table).to_owned()
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

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_documentation_u7KpQe")
        .table(Documentation::Table)
        .col(Documentation::Category)
        .col(Documentation::OrderIndex)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_documentation_u7KpQe")
        .table(Documentation::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
