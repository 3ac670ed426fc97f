use std::collections::BTreeMap;

use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use sequenceit_content::{Collection, FormData};

use crate::{
    routes::AppState,
    template::{Template, ToastErrorTemplate, ToastSuccessTemplate, field_errors},
};

const FIELDS: [&str; 5] = ["name", "role", "company", "content", "rating"];

#[derive(askama::Template)]
#[template(path = "partials/feedback-form.html")]
pub struct FeedbackFormTemplate {
    pub values: BTreeMap<&'static str, String>,
    pub errors: BTreeMap<String, String>,
}

impl Default for FeedbackFormTemplate {
    fn default() -> Self {
        Self::retained(&FormData::new(), BTreeMap::new())
    }
}

impl FeedbackFormTemplate {
    fn retained(form: &FormData, errors: BTreeMap<String, String>) -> Self {
        let mut values: BTreeMap<&'static str, String> = FIELDS
            .iter()
            .map(|f| (*f, form.get(*f).cloned().unwrap_or_default()))
            .collect();

        values
            .entry("rating")
            .and_modify(|r| {
                if r.trim().is_empty() {
                    *r = "5".to_owned();
                }
            });

        Self { values, errors }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

#[derive(askama::Template)]
#[template(path = "feedback.html")]
pub struct FeedbackTemplate {
    pub form: String,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(FeedbackTemplate {
        form: template.to_string(FeedbackFormTemplate::default()),
    })
}

/// Public testimonial submission. Entries stay hidden until an admin
/// publishes them.
pub async fn action(
    template: Template,
    State(state): State<AppState>,
    Form(form): Form<FormData>,
) -> impl IntoResponse {
    let mut input = match sequenceit_content::parse(Collection::Testimonials.schema(), &form) {
        Ok(input) => input,
        Err(err) => {
            let original =
                template.to_string(FeedbackFormTemplate::retained(&form, field_errors(&err)));

            return template
                .render(ToastErrorTemplate {
                    original: Some(&original),
                    message: "Please check the highlighted fields",
                    description: None,
                })
                .into_response();
        }
    };

    input.published = Some(false);

    let id = crate::try_response!(
        state.command.insert(Collection::Testimonials, input),
        template,
        Some(FeedbackFormTemplate::retained(&form, BTreeMap::new()))
    );

    tracing::info!(testimonial_id = %id, "feedback submitted for review");

    let original = template.to_string(FeedbackFormTemplate::default());

    template
        .render(ToastSuccessTemplate {
            original: Some(&original),
            message: "Thank you for your feedback!",
            description: Some("It will appear on the site once our team has reviewed it."),
        })
        .into_response()
}
