use axum::response::IntoResponse;

use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "policy/privacy.html")]
pub struct PrivacyTemplate;

#[derive(askama::Template)]
#[template(path = "policy/terms.html")]
pub struct TermsTemplate;

#[derive(askama::Template)]
#[template(path = "policy/cookies.html")]
pub struct CookiesTemplate;

#[derive(askama::Template)]
#[template(path = "policy/company.html")]
pub struct CompanyTemplate;

pub async fn privacy(template: Template) -> impl IntoResponse {
    template.render(PrivacyTemplate)
}

pub async fn terms(template: Template) -> impl IntoResponse {
    template.render(TermsTemplate)
}

pub async fn cookies(template: Template) -> impl IntoResponse {
    template.render(CookiesTemplate)
}

pub async fn company(template: Template) -> impl IntoResponse {
    template.render(CompanyTemplate)
}
