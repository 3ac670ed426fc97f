use axum::{extract::State, response::IntoResponse};
use sequenceit_content::{Collection, ListQuery};

use crate::{
    routes::{AppState, Group, group_by},
    template::Template,
};

#[derive(askama::Template)]
#[template(path = "documentation.html")]
pub struct DocumentationTemplate {
    pub groups: Vec<Group>,
}

pub async fn page(template: Template, State(state): State<AppState>) -> impl IntoResponse {
    let docs = crate::try_page_response!(
        state.query.list(Collection::Documentation, ListQuery::published()),
        template
    );

    template
        .render(DocumentationTemplate {
            groups: group_by(docs, "category", "General"),
        })
        .into_response()
}
