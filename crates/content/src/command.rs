use std::time::{SystemTime, UNIX_EPOCH};

use sea_query::{Alias, Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sequenceit_shared::{Error, Result, bail};
use sqlx::SqlitePool;
use ulid::Ulid;

use crate::{
    Collection,
    input::{self, FormData, Input},
    record::Value,
};

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    pub async fn create(&self, collection: Collection, form: &FormData) -> Result<String> {
        let input = input::parse(collection.schema(), form)?;

        self.insert(collection, input).await
    }

    /// Inserts already validated values. Used by public submissions that force
    /// their own published state.
    pub async fn insert(&self, collection: Collection, input: Input) -> Result<String> {
        let schema = collection.schema();
        let id = Ulid::new().to_string();
        let now = now()?;

        let mut columns = vec![Alias::new("id")];
        let mut values: Vec<Expr> = vec![id.clone().into()];

        for field in schema.fields {
            columns.push(Alias::new(field.name));
            values.push(to_expr(input.values.get(field.name).unwrap_or(&Value::Null))?);
        }

        if schema.has_published {
            columns.push(Alias::new("published"));
            values.push(input.published.unwrap_or_default().into());
        }

        columns.extend([Alias::new("created_at"), Alias::new("updated_at")]);
        values.extend([now.into(), now.into()]);

        let statment = sea_query::Query::insert()
            .into_table(Alias::new(collection.table()))
            .columns(columns)
            .values_panic(values)
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(collection = %collection, id = %id, "record created");

        Ok(id)
    }

    pub async fn update(
        &self,
        collection: Collection,
        id: impl Into<String>,
        form: &FormData,
    ) -> Result<()> {
        let schema = collection.schema();
        let input = input::parse(schema, form)?;
        let id = id.into();

        let mut values = vec![];
        for field in schema.fields {
            values.push((
                Alias::new(field.name),
                to_expr(input.values.get(field.name).unwrap_or(&Value::Null))?,
            ));
        }

        if let Some(published) = input.published {
            values.push((Alias::new("published"), published.into()));
        }

        values.push((Alias::new("updated_at"), now()?.into()));

        let statment = sea_query::Query::update()
            .table(Alias::new(collection.table()))
            .values(values)
            .and_where(Expr::col(Alias::new("id")).eq(id.as_str()))
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        tracing::info!(collection = %collection, id = %id, "record updated");

        Ok(())
    }

    pub async fn delete(&self, collection: Collection, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        let statment = sea_query::Query::delete()
            .from_table(Alias::new(collection.table()))
            .and_where(Expr::col(Alias::new("id")).eq(id.as_str()))
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        tracing::info!(collection = %collection, id = %id, "record deleted");

        Ok(())
    }

    pub async fn set_published(
        &self,
        collection: Collection,
        id: impl Into<String>,
        published: bool,
    ) -> Result<()> {
        if !collection.schema().has_published {
            bail!("{collection} has no published flag");
        }

        let id = id.into();
        let statment = sea_query::Query::update()
            .table(Alias::new(collection.table()))
            .values([
                (Alias::new("published"), published.into()),
                (Alias::new("updated_at"), now()?.into()),
            ])
            .and_where(Expr::col(Alias::new("id")).eq(id.as_str()))
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        tracing::info!(collection = %collection, id = %id, published, "record publish state changed");

        Ok(())
    }
}

fn to_expr(value: &Value) -> Result<Expr> {
    Ok(match value {
        Value::Null => Option::<String>::None.into(),
        Value::Text(v) => v.to_owned().into(),
        Value::Integer(v) => (*v).into(),
        Value::List(v) => serde_json::to_string(v)?.into(),
        Value::Results(v) => serde_json::to_string(v)?.into(),
    })
}

fn now() -> Result<i64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64)
}
