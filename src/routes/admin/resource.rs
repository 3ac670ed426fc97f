//! Generic admin CRUD over every content collection.

use std::{collections::BTreeMap, str::FromStr};

use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use sequenceit_content::{
    Collection, FormData, ListQuery, Record,
    schema::{Field, FieldKind, Schema},
};
use sequenceit_shared::Error;
use serde::Deserialize;

use crate::{
    auth::AuthAdmin,
    routes::AppState,
    template::{NotFoundTemplate, ServerTemplate, Template, field_errors, filters},
};

/// Columns shown in the list table, after the title.
const LIST_COLUMNS: usize = 2;

fn collection(slug: &str) -> Option<Collection> {
    Collection::from_str(slug).ok()
}

fn not_found(template: &Template) -> Response {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate)).into_response()
}

fn server_error(template: &Template, err: Error) -> Response {
    tracing::error!("{err}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        template.render(ServerTemplate),
    )
        .into_response()
}

fn list_url(collection: Collection) -> String {
    format!("/admin/{}", collection.slug())
}

#[derive(Deserialize, Default)]
pub struct ListParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "admin/list.html")]
pub struct ListTemplate {
    pub collection: Collection,
    pub schema: &'static Schema,
    pub records: Vec<Record>,
    pub columns: Vec<&'static Field>,
    pub categories: Vec<String>,
    pub category: String,
    pub q: String,
}

impl ListTemplate {
    pub fn title_label(&self) -> &'static str {
        self.schema
            .field(self.schema.title)
            .map(|f| f.label)
            .unwrap_or("Title")
    }
}

pub async fn list(
    template: Template,
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ListParams>,
) -> Response {
    let Some(collection) = collection(&slug) else {
        return not_found(&template);
    };
    let schema = collection.schema();
    let category = params.category.unwrap_or_default();
    let q = params.q.unwrap_or_default();

    let records = crate::try_page_response!(
        state.query.list(
            collection,
            ListQuery {
                category: Some(category.to_owned()),
                search: Some(q.to_owned()),
                ..Default::default()
            }
        ),
        template
    );

    let categories = crate::try_page_response!(
        state.query.categories(collection, false),
        template
    );

    let columns = schema
        .fields
        .iter()
        .filter(|f| f.name != schema.title && !f.is_long_text())
        .take(LIST_COLUMNS)
        .collect();

    template
        .render(ListTemplate {
            collection,
            schema,
            records,
            columns,
            categories,
            category,
            q,
        })
        .into_response()
}

#[derive(askama::Template)]
#[template(path = "admin/form.html")]
pub struct FormTemplate {
    pub collection: Collection,
    pub schema: &'static Schema,
    pub id: Option<String>,
    pub values: BTreeMap<String, String>,
    pub published: bool,
    pub errors: BTreeMap<String, String>,
}

impl FormTemplate {
    fn new(collection: Collection) -> Self {
        let schema = collection.schema();

        Self {
            collection,
            schema,
            id: None,
            values: schema
                .fields
                .iter()
                .map(|f| (f.name.to_owned(), f.default.unwrap_or_default().to_owned()))
                .collect(),
            published: false,
            errors: BTreeMap::new(),
        }
    }

    fn from_record(collection: Collection, record: &Record) -> Self {
        let schema = collection.schema();

        Self {
            collection,
            schema,
            id: Some(record.id.to_owned()),
            values: schema
                .fields
                .iter()
                .map(|f| (f.name.to_owned(), record.form_value(f.name)))
                .collect(),
            published: record.is_published(),
            errors: BTreeMap::new(),
        }
    }

    fn from_form(
        collection: Collection,
        id: Option<String>,
        form: &FormData,
        errors: BTreeMap<String, String>,
    ) -> Self {
        let schema = collection.schema();

        Self {
            collection,
            schema,
            id,
            values: schema
                .fields
                .iter()
                .map(|f| (f.name.to_owned(), form.get(f.name).cloned().unwrap_or_default()))
                .collect(),
            published: form.contains_key("published"),
            errors,
        }
    }

    pub fn action(&self) -> String {
        match &self.id {
            Some(id) => format!("/admin/{}/{id}", self.collection.slug()),
            None => list_url(self.collection),
        }
    }

    pub fn value(&self, field: &Field) -> &str {
        self.values
            .get(field.name)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn error(&self, field: &Field) -> Option<&str> {
        self.errors.get(field.name).map(String::as_str)
    }

    pub fn is_selected(&self, field: &Field, option: &str) -> bool {
        self.value(field) == option
    }

    pub fn input_type(&self, field: &Field) -> &'static str {
        match field.kind {
            FieldKind::Url => "url",
            FieldKind::Integer | FieldKind::Rating => "number",
            _ => "text",
        }
    }
}

/// Re-renders the submitted form with its field errors, or the error page
/// for anything that is not a validation failure.
fn rejected(
    template: &Template,
    collection: Collection,
    id: Option<String>,
    form: &FormData,
    err: Error,
) -> Response {
    match err {
        Error::Validate(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            template.render(FormTemplate::from_form(
                collection,
                id,
                form,
                field_errors(&err),
            )),
        )
            .into_response(),
        Error::NotFound => not_found(template),
        err => server_error(template, err),
    }
}

pub async fn new(template: Template, _admin: AuthAdmin, Path(slug): Path<String>) -> Response {
    let Some(collection) = collection(&slug) else {
        return not_found(&template);
    };

    template.render(FormTemplate::new(collection))
}

pub async fn create(
    template: Template,
    AuthAdmin(user): AuthAdmin,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<FormData>,
) -> Response {
    let Some(collection) = collection(&slug) else {
        return not_found(&template);
    };

    match state.command.create(collection, &form).await {
        Ok(id) => {
            tracing::info!(admin = %user.id, collection = %collection, id = %id, "record created");

            Redirect::to(&list_url(collection)).into_response()
        }
        Err(err) => rejected(&template, collection, None, &form, err),
    }
}

pub async fn edit(
    template: Template,
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
) -> Response {
    let Some(collection) = collection(&slug) else {
        return not_found(&template);
    };

    let record = crate::try_page_response!(opt: state.query.find(collection, id), template);

    template.render(FormTemplate::from_record(collection, &record))
}

pub async fn update(
    template: Template,
    AuthAdmin(user): AuthAdmin,
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
    Form(form): Form<FormData>,
) -> Response {
    let Some(collection) = collection(&slug) else {
        return not_found(&template);
    };

    match state.command.update(collection, id.to_owned(), &form).await {
        Ok(()) => {
            tracing::info!(admin = %user.id, collection = %collection, id = %id, "record updated");

            Redirect::to(&list_url(collection)).into_response()
        }
        Err(err) => rejected(&template, collection, Some(id), &form, err),
    }
}

pub async fn delete(
    template: Template,
    AuthAdmin(user): AuthAdmin,
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
) -> Response {
    let Some(collection) = collection(&slug) else {
        return not_found(&template);
    };

    match state.command.delete(collection, id.to_owned()).await {
        Ok(()) => {
            tracing::info!(admin = %user.id, collection = %collection, id = %id, "record deleted");

            Redirect::to(&list_url(collection)).into_response()
        }
        Err(Error::NotFound) => not_found(&template),
        Err(err) => server_error(&template, err),
    }
}

async fn toggle(
    template: Template,
    state: AppState,
    slug: String,
    id: String,
    published: bool,
) -> Response {
    let Some(collection) = collection(&slug).filter(|c| c.schema().has_published) else {
        return not_found(&template);
    };

    match state.command.set_published(collection, id, published).await {
        Ok(()) => Redirect::to(&list_url(collection)).into_response(),
        Err(Error::NotFound) => not_found(&template),
        Err(err) => server_error(&template, err),
    }
}

pub async fn publish(
    template: Template,
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
) -> Response {
    toggle(template, state, slug, id, true).await
}

pub async fn unpublish(
    template: Template,
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
) -> Response {
    toggle(template, state, slug, id, false).await
}
