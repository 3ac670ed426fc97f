use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::BlogPost;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(BlogPost::Table)
        .col(
            ColumnDef::new(BlogPost::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(BlogPost::Title)
                .string()
                .not_null()
                .string_len(150),
        )
        .col(ColumnDef::new(BlogPost::Excerpt).string().string_len(500))
        .col(ColumnDef::new(BlogPost::Content).text().not_null())
        .col(ColumnDef::new(BlogPost::Category).string().string_len(50))
        .col(ColumnDef::new(BlogPost::Author).string().string_len(100))
        .col(ColumnDef::new(BlogPost::ImageUrl).string().string_len(2048))
        .col(ColumnDef::new(BlogPost::ReadTime).integer())
        .col(
            ColumnDef::new(BlogPost::Published)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(BlogPost::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(BlogPost::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(BlogPost::Table).to_owned()
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
        .name("idx_blog_post_Vx81Lc")
        .table(BlogPost::Table)
        .col(BlogPost::Published)
        .col(BlogPost::CreatedAt)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_blog_post_Vx81Lc")
        .table(BlogPost::Table)
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
