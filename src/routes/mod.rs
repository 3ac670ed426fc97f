use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use sequenceit_notification::{Dispatcher, Mailer};
use sqlx::SqlitePool;

use crate::template::{NotFoundTemplate, Template};

mod admin;
mod api;
mod blog;
mod careers;
mod case_studies;
mod contact;
mod documentation;
mod faqs;
mod feedback;
mod health;
mod index;
mod policy;
mod projects;
mod support;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub read_db: SqlitePool,
    pub write_db: SqlitePool,
    pub query: sequenceit_content::Query,
    pub command: sequenceit_content::Command,
    pub user_command: crate::user::Command,
    pub dispatcher: Dispatcher,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(
        config: crate::config::Config,
        read_db: SqlitePool,
        write_db: SqlitePool,
        dispatcher: Dispatcher,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            config,
            query: sequenceit_content::Query(read_db.clone()),
            command: sequenceit_content::Command(write_db.clone()),
            user_command: crate::user::Command(write_db.clone()),
            read_db,
            write_db,
            dispatcher,
            mailer,
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/projects", get(projects::page))
        .route("/blog", get(blog::page))
        .route("/careers", get(careers::page))
        .route("/case-studies", get(case_studies::page))
        .route("/documentation", get(documentation::page))
        .route("/faqs", get(faqs::page))
        .route("/support", get(support::page))
        .route("/feedback", get(feedback::page).post(feedback::action))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/privacy-policy", get(policy::privacy))
        .route("/terms-of-service", get(policy::terms))
        .route("/cookie-policy", get(policy::cookies))
        .route("/company-policy", get(policy::company))
        .route(
            "/api/send-email",
            post(api::send_email).fallback(api::method_not_allowed),
        )
        .route("/admin/login", get(admin::login::page).post(admin::login::action))
        .route("/admin/logout", get(admin::login::logout))
        .route("/admin", get(admin::dashboard::page))
        .route(
            "/admin/{collection}",
            get(admin::resource::list).post(admin::resource::create),
        )
        .route("/admin/{collection}/new", get(admin::resource::new))
        .route("/admin/{collection}/{id}", post(admin::resource::update))
        .route("/admin/{collection}/{id}/edit", get(admin::resource::edit))
        .route(
            "/admin/{collection}/{id}/delete",
            post(admin::resource::delete),
        )
        .route(
            "/admin/{collection}/{id}/publish",
            post(admin::resource::publish),
        )
        .route(
            "/admin/{collection}/{id}/unpublish",
            post(admin::resource::unpublish),
        )
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}

/// Records sharing one category value, in the order the query returned them.
pub struct Group {
    pub name: String,
    pub anchor: String,
    pub records: Vec<sequenceit_content::Record>,
}

/// Groups records by `column`, keeping first-seen group order. Records
/// without a value land in `fallback`.
pub fn group_by(
    records: Vec<sequenceit_content::Record>,
    column: &str,
    fallback: &str,
) -> Vec<Group> {
    let mut groups: Vec<Group> = vec![];

    for record in records {
        let name = record.opt_text(column).unwrap_or(fallback).to_owned();

        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.records.push(record),
            None => groups.push(Group {
                anchor: anchor(&name),
                name,
                records: vec![record],
            }),
        }
    }

    groups
}

/// Turns a category label into an element id, e.g. `AI & Data` -> `ai---data`.
fn anchor(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
