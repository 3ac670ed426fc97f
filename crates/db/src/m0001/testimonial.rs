use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Testimonial;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Testimonial::Table)
        .col(
            ColumnDef::new(Testimonial::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Testimonial::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Testimonial::Role)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(ColumnDef::new(Testimonial::Company).string().string_len(100))
        .col(ColumnDef::new(Testimonial::Content).text().not_null())
        .col(ColumnDef::new(Testimonial::ImageUrl).string().string_len(2048))
        .col(
            ColumnDef::new(Testimonial::Rating)
                .integer()
                .not_null()
                .default(5),
        )
        .col(
            ColumnDef::new(Testimonial::Published)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Testimonial::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Testimonial::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Testimonial::Table).to_owned()
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
        .name("idx_testimonial_Qm4vTz")
        .table(Testimonial::Table)
        .col(Testimonial::Published)
        .col(Testimonial::CreatedAt)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_testimonial_Qm4vTz")
        .table(Testimonial::Table)
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
