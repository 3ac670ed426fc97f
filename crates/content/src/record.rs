use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::{Row, sqlite::SqliteRow};

use crate::schema::{FieldKind, Schema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub metric: String,
    pub value: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
    List(Vec<String>),
    Results(Vec<ResultItem>),
}

impl Value {
    /// The value as it is written back into an admin form input.
    pub fn to_form(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Text(v) => v.to_owned(),
            Value::Integer(v) => v.to_string(),
            Value::List(v) => v.join(", "),
            Value::Results(v) => v
                .iter()
                .map(|r| format!("{}|{}|{}", r.metric, r.value, r.icon))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    pub id: String,
    pub values: BTreeMap<&'static str, Value>,
    pub published: Option<bool>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Record {
    pub(crate) fn from_row(schema: &Schema, row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let mut values = BTreeMap::new();

        for field in schema.fields {
            let value = match field.kind {
                FieldKind::Integer | FieldKind::Rating => row
                    .try_get::<Option<i64>, _>(field.name)?
                    .map(Value::Integer),
                FieldKind::List => {
                    let raw = row.try_get::<Option<String>, _>(field.name)?;
                    Some(Value::List(decode_json(field.name, raw)?))
                }
                FieldKind::Results => {
                    let raw = row.try_get::<Option<String>, _>(field.name)?;
                    Some(Value::Results(decode_json(field.name, raw)?))
                }
                _ => row
                    .try_get::<Option<String>, _>(field.name)?
                    .map(Value::Text),
            };

            values.insert(field.name, value.unwrap_or(Value::Null));
        }

        let published = if schema.has_published {
            Some(row.try_get::<bool, _>("published")?)
        } else {
            None
        };

        Ok(Self {
            id: row.try_get("id")?,
            values,
            published,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    pub fn get(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&Value::Null)
    }

    /// Text content of a field, empty when unset.
    pub fn text(&self, name: &str) -> &str {
        match self.get(name) {
            Value::Text(v) => v,
            _ => "",
        }
    }

    pub fn opt_text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Value::Text(v) if !v.trim().is_empty() => Some(v),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn list(&self, name: &str) -> &[String] {
        match self.get(name) {
            Value::List(v) => v,
            _ => &[],
        }
    }

    pub fn results(&self, name: &str) -> &[ResultItem] {
        match self.get(name) {
            Value::Results(v) => v,
            _ => &[],
        }
    }

    /// Short human readable rendering used in admin tables.
    pub fn display(&self, name: &str) -> String {
        let value = self.get(name).to_form();
        let mut chars = value.chars();
        let short: String = chars.by_ref().take(80).collect();

        if chars.next().is_some() {
            format!("{short}…")
        } else {
            short
        }
    }

    pub fn form_value(&self, name: &str) -> String {
        self.get(name).to_form()
    }

    pub fn is_published(&self) -> bool {
        self.published.unwrap_or(true)
    }
}

fn decode_json<T: serde::de::DeserializeOwned + Default>(
    column: &str,
    raw: Option<String>,
) -> Result<T, sqlx::Error> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Ok(T::default());
    };

    serde_json::from_str(&raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_owned(),
        source: Box::new(e),
    })
}
