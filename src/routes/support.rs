use axum::response::IntoResponse;

use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "support.html")]
pub struct SupportTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(SupportTemplate)
}
