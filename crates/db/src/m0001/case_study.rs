use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::CaseStudy;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(CaseStudy::Table)
        .col(
            ColumnDef::new(CaseStudy::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(CaseStudy::Title)
                .string()
                .not_null()
                .string_len(150),
        )
        .col(
            ColumnDef::new(CaseStudy::Client)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(ColumnDef::new(CaseStudy::Industry).string().string_len(100))
        .col(ColumnDef::new(CaseStudy::ImageUrl).string().string_len(2048))
        .col(ColumnDef::new(CaseStudy::Challenge).text())
        .col(ColumnDef::new(CaseStudy::Solution).text())
        .col(ColumnDef::new(CaseStudy::Testimonial).text())
        .col(
            ColumnDef::new(CaseStudy::Tags)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(CaseStudy::Results)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(CaseStudy::Published)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(CaseStudy::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(CaseStudy::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(CaseStudy::Table).to_owned()
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
