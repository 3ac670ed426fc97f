use axum::{extract::State, response::IntoResponse};
use sequenceit_content::{Collection, ListQuery, Record};

use crate::{
    routes::{AppState, Group, contact::ContactFormTemplate, group_by},
    template::Template,
};

const LATEST_PROJECTS: u64 = 6;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub services: Vec<Record>,
    pub projects: Vec<Record>,
    pub categories: Vec<String>,
    pub teams: Vec<Group>,
    pub testimonials: Vec<Record>,
    pub contact_form: String,
}

pub async fn page(template: Template, State(state): State<AppState>) -> impl IntoResponse {
    let services = crate::try_page_response!(
        state.query.list(Collection::Services, ListQuery::published()),
        template
    );

    let projects = crate::try_page_response!(
        state.query.list(
            Collection::Projects,
            ListQuery {
                limit: Some(LATEST_PROJECTS),
                ..Default::default()
            }
        ),
        template
    );

    let categories = crate::try_page_response!(
        state.query.categories(Collection::Projects, false),
        template
    );

    let team = crate::try_page_response!(
        state.query.list(Collection::TeamMembers, ListQuery::default()),
        template
    );

    let testimonials = crate::try_page_response!(
        state.query.list(Collection::Testimonials, ListQuery::published()),
        template
    );

    template
        .render(IndexTemplate {
            services,
            projects,
            categories,
            teams: group_by(team, "team_category", "Team"),
            testimonials,
            contact_form: template.to_string(ContactFormTemplate::default()),
        })
        .into_response()
}
