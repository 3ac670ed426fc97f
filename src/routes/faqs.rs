use axum::{extract::State, response::IntoResponse};
use sequenceit_content::{Collection, ListQuery};

use crate::{
    routes::{AppState, Group, group_by},
    template::Template,
};

#[derive(askama::Template)]
#[template(path = "faqs.html")]
pub struct FaqsTemplate {
    pub groups: Vec<Group>,
}

pub async fn page(template: Template, State(state): State<AppState>) -> impl IntoResponse {
    let faqs = crate::try_page_response!(
        state.query.list(Collection::Faqs, ListQuery::published()),
        template
    );

    template
        .render(FaqsTemplate {
            groups: group_by(faqs, "category", "General"),
        })
        .into_response()
}
