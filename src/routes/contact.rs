use std::collections::BTreeMap;

use axum::{
    extract::{Form, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use sequenceit_notification::ContactSubmission;
use sequenceit_shared::Error;
use validator::Validate;

use crate::{
    routes::AppState,
    template::{Template, ToastErrorTemplate, ToastSuccessTemplate, field_errors, is_fragment},
};

pub const SUCCESS_MESSAGE: &str = "Message Sent!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for contacting us. We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to Send";
pub const FAILURE_DESCRIPTION: &str = "Both email methods failed. Please try again later.";

/// The contact form, empty or refilled with a submission that was not sent.
#[derive(askama::Template, Default)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub errors: BTreeMap<String, String>,
}

impl ContactFormTemplate {
    fn retained(input: ContactSubmission, errors: BTreeMap<String, String>) -> Self {
        Self {
            name: input.name,
            email: input.email,
            company: input.company.unwrap_or_default(),
            message: input.message,
            errors,
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: String,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate {
        form: template.to_string(ContactFormTemplate::default()),
    })
}

/// Enhanced posts get the form and toast partial, plain posts the whole page
/// with the toast above the form.
fn respond(template: &Template, headers: &HeaderMap, partial: String) -> Response {
    if is_fragment(headers) {
        return Html(partial).into_response();
    }

    template.render(ContactTemplate { form: partial })
}

pub async fn action(
    template: Template,
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<ContactSubmission>,
) -> Response {
    if let Err(errors) = input.validate() {
        let errors = field_errors(&Error::Validate(errors));
        let form = template.to_string(ContactFormTemplate::retained(input, errors));

        let partial = template.to_string(ToastErrorTemplate {
            original: Some(&form),
            message: "Missing required fields",
            description: Some("Please fill in your name, email and message."),
        });

        return respond(&template, &headers, partial);
    }

    let result = state.dispatcher.dispatch(&input).await;

    if !result.any_succeeded {
        for outcome in &result.outcomes {
            tracing::warn!(
                channel = %outcome.channel,
                error = outcome.error_detail.as_deref().unwrap_or_default(),
                "contact channel failed"
            );
        }

        let form = template.to_string(ContactFormTemplate::retained(input, BTreeMap::new()));

        let partial = template.to_string(ToastErrorTemplate {
            original: Some(&form),
            message: FAILURE_MESSAGE,
            description: Some(FAILURE_DESCRIPTION),
        });

        return respond(&template, &headers, partial);
    }

    let description = match result.qualifier() {
        Some(qualifier) => format!("{SUCCESS_DESCRIPTION} {qualifier}"),
        None => SUCCESS_DESCRIPTION.to_owned(),
    };
    let form = template.to_string(ContactFormTemplate::default());

    let partial = template.to_string(ToastSuccessTemplate {
        original: Some(&form),
        message: SUCCESS_MESSAGE,
        description: Some(&description),
    });

    respond(&template, &headers, partial)
}
