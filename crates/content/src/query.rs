use sea_query::{
    Alias, Asterisk, Cond, Expr, ExprTrait, Func, LikeExpr, Order, SqliteQueryBuilder,
};
use sea_query_sqlx::SqlxBinder;
use sequenceit_shared::Result;
use serde::Deserialize;
use sqlx::SqlitePool;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{
    Collection,
    record::Record,
    schema::{Direction, FieldKind, Schema},
};

#[derive(
    EnumString, Display, VariantArray, AsRefStr, Deserialize, Default, Clone, Copy, Debug, PartialEq,
)]
pub enum SortBy {
    #[default]
    #[serde(rename = "default")]
    #[strum(serialize = "default")]
    Default,
    #[serde(rename = "newest")]
    #[strum(serialize = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    #[strum(serialize = "oldest")]
    Oldest,
    #[serde(rename = "title-asc")]
    #[strum(serialize = "title-asc")]
    TitleAsc,
    #[serde(rename = "title-desc")]
    #[strum(serialize = "title-desc")]
    TitleDesc,
}

#[derive(Debug, Default, Clone)]
pub struct ListQuery {
    pub published_only: bool,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: SortBy,
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Default::default()
        }
    }
}

#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Query {
    pub async fn list(&self, collection: Collection, input: ListQuery) -> Result<Vec<Record>> {
        let schema = collection.schema();
        let mut statment = select(collection);

        if input.published_only && schema.has_published {
            statment.and_where(Expr::col(Alias::new("published")).eq(true));
        }

        if let (Some(column), Some(category)) = (schema.category, input.category) {
            let category = category.trim();
            if !category.is_empty() && category != "All" {
                statment.and_where(Expr::col(Alias::new(column)).eq(category));
            }
        }

        if let Some(search) = input.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = like_pattern(search);
            let mut cond = Cond::any();
            for column in schema.search {
                cond = cond.add(search_column(schema, column, &pattern));
            }
            statment.cond_where(cond);
        }

        match input.sort {
            SortBy::Default => {
                for (column, direction) in schema.order {
                    statment.order_by_expr(Expr::col(Alias::new(*column)), order(*direction));
                }
                statment.order_by_expr(Expr::col(Alias::new("id")), Order::Asc);
            }
            SortBy::Newest => {
                statment
                    .order_by_expr(Expr::col(Alias::new("created_at")), Order::Desc)
                    .order_by_expr(Expr::col(Alias::new("id")), Order::Desc);
            }
            SortBy::Oldest => {
                statment
                    .order_by_expr(Expr::col(Alias::new("created_at")), Order::Asc)
                    .order_by_expr(Expr::col(Alias::new("id")), Order::Asc);
            }
            SortBy::TitleAsc => {
                statment.order_by_expr(title_nocase(schema), Order::Asc);
            }
            SortBy::TitleDesc => {
                statment.order_by_expr(title_nocase(schema), Order::Desc);
            }
        }

        if let Some(limit) = input.limit {
            statment.limit(limit);
        }

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_with(&sql, values).fetch_all(&self.0).await?;

        Ok(rows
            .iter()
            .map(|row| Record::from_row(schema, row))
            .collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub async fn find(
        &self,
        collection: Collection,
        id: impl Into<String>,
    ) -> Result<Option<Record>> {
        let statment = select(collection)
            .and_where(Expr::col(Alias::new("id")).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_with(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row
            .map(|row| Record::from_row(collection.schema(), &row))
            .transpose()?)
    }

    pub async fn count(&self, collection: Collection) -> Result<i64> {
        let statment = sea_query::Query::select()
            .expr(Func::count(Expr::col(Asterisk)))
            .from(Alias::new(collection.table()))
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_one(&self.0)
            .await?)
    }

    /// Distinct non-empty values of the collection's category column,
    /// alphabetically.
    pub async fn categories(
        &self,
        collection: Collection,
        published_only: bool,
    ) -> Result<Vec<String>> {
        let schema = collection.schema();
        let Some(column) = schema.category else {
            return Ok(vec![]);
        };

        let mut statment = sea_query::Query::select()
            .distinct()
            .column(Alias::new(column))
            .from(Alias::new(collection.table()))
            .and_where(Expr::col(Alias::new(column)).is_not_null())
            .and_where(Expr::col(Alias::new(column)).ne(""))
            .order_by(Alias::new(column), Order::Asc)
            .to_owned();

        if published_only && schema.has_published {
            statment.and_where(Expr::col(Alias::new("published")).eq(true));
        }

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}

fn select(collection: Collection) -> sea_query::SelectStatement {
    sea_query::Query::select()
        .columns(collection.schema().columns().into_iter().map(Alias::new))
        .from(Alias::new(collection.table()))
        .to_owned()
}

/// `%search%` with LIKE wildcards in the input escaped by `\`.
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    pattern
}

/// List columns hold a JSON array, so each element is matched on its own
/// instead of the encoded text.
fn search_column(schema: &Schema, column: &str, pattern: &str) -> Expr {
    let is_list = schema
        .field(column)
        .is_some_and(|f| matches!(f.kind, FieldKind::List));

    if is_list {
        return Expr::cust_with_values(
            format!(
                r#"EXISTS (SELECT 1 FROM json_each("{column}") WHERE json_each.value LIKE ? ESCAPE '\')"#
            ),
            [pattern.to_owned()],
        );
    }

    Expr::col(Alias::new(column)).like(LikeExpr::new(pattern).escape('\\'))
}

fn title_nocase(schema: &Schema) -> Expr {
    Expr::cust(format!("\"{}\" COLLATE NOCASE", schema.title))
}

fn order(direction: Direction) -> Order {
    match direction {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    }
}
