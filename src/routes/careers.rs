use axum::{extract::State, response::IntoResponse};
use sequenceit_content::{Collection, ListQuery, Record};

use crate::{routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "careers.html")]
pub struct CareersTemplate {
    pub careers: Vec<Record>,
    pub benefits: Vec<Record>,
}

pub async fn page(template: Template, State(state): State<AppState>) -> impl IntoResponse {
    let careers = crate::try_page_response!(
        state.query.list(Collection::Careers, ListQuery::published()),
        template
    );
    let benefits = crate::try_page_response!(
        state.query.list(Collection::Benefits, ListQuery::published()),
        template
    );

    template
        .render(CareersTemplate { careers, benefits })
        .into_response()
}
