use axum::{extract::State, response::IntoResponse};
use sequenceit_content::{Collection, ListQuery, Record};

use crate::{routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "case-studies.html")]
pub struct CaseStudiesTemplate {
    pub case_studies: Vec<Record>,
}

pub async fn page(template: Template, State(state): State<AppState>) -> impl IntoResponse {
    let case_studies = crate::try_page_response!(
        state.query.list(Collection::CaseStudies, ListQuery::published()),
        template
    );

    template
        .render(CaseStudiesTemplate { case_studies })
        .into_response()
}
