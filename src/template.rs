use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::BTreeMap, convert::Infallible};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";
pub const NOT_FOUND: &str = "Not found";
pub const FORBIDDEN: &str = "Forbidden";

/// Sent by `app.js` on enhanced form posts, which expect a partial back.
pub const FRAGMENT_HEADER: &str = "ts-request";

pub fn is_fragment(headers: &HeaderMap) -> bool {
    headers.contains_key(FRAGMENT_HEADER)
}

pub(crate) mod filters {
    use time::{OffsetDateTime, macros::format_description};

    #[askama::filter_fn]
    pub fn date(value: &i64, _values: &dyn askama::Values) -> askama::Result<String> {
        let date = OffsetDateTime::from_unix_timestamp(*value)
            .map_err(|e| askama::Error::Custom(Box::new(e)))?;

        date.format(format_description!(
            "[month repr:short] [day padding:none], [year]"
        ))
        .map_err(|e| askama::Error::Custom(Box::new(e)))
    }
}

/// Page renderer. Every handler pulls one from the request.
pub struct Template;

impl Template {
    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match template.render() {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("{err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template)
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "403.html")]
pub struct ForbiddenTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[derive(askama::Template)]
#[template(path = "partials/toast-success.html")]
pub struct ToastSuccessTemplate<'a> {
    pub original: Option<&'a str>,
    pub message: &'a str,
    pub description: Option<&'a str>,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub original: Option<&'a str>,
    pub message: &'a str,
    pub description: Option<&'a str>,
}

/// First message per field, for rendering inline form errors.
pub fn field_errors(err: &sequenceit_shared::Error) -> BTreeMap<String, String> {
    let sequenceit_shared::Error::Validate(errors) = err else {
        return BTreeMap::new();
    };

    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            let error = errors.first()?;
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());

            Some((field.to_string(), message))
        })
        .collect()
}

#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        $crate::try_page_response!(sync: $result.await, $template)
    };

    (opt: $result:expr, $template:expr) => {
        $crate::try_page_response!(sync opt: $result.await, $template)
    };

    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    $template.render($crate::template::ServerTemplate),
                )
                    .into_response();
            }
        }
    };

    (sync opt: $result:expr, $template:expr) => {
        match $result {
            Ok(Some(r)) => r,
            Ok(_) => {
                return (
                    axum::http::StatusCode::NOT_FOUND,
                    $template.render($crate::template::NotFoundTemplate),
                )
                    .into_response();
            }
            Err(err) => {
                tracing::error!("{err}");

                return (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    $template.render($crate::template::ServerTemplate),
                )
                    .into_response();
            }
        }
    };
}

#[macro_export]
macro_rules! try_response {
    (@render $template:expr, $fallback:expr, $message:expr) => {
        match $fallback {
            Some(t) => {
                return $template
                    .render($crate::template::ToastErrorTemplate {
                        original: Some(&$template.to_string(t)),
                        message: $message,
                        description: None,
                    })
                    .into_response();
            }
            _ => {
                return (
                    [("ts-swap", "skip")],
                    $template.render($crate::template::ToastErrorTemplate {
                        original: None,
                        message: $message,
                        description: None,
                    }),
                )
                    .into_response();
            }
        }
    };

    ($result:expr, $template:expr) => {
        $crate::try_response!(sync: $result.await, $template, None::<$crate::template::NotFoundTemplate>)
    };

    ($result:expr, $template:expr, $fallback:expr) => {
        $crate::try_response!(sync: $result.await, $template, $fallback)
    };

    (sync: $result:expr, $template:expr) => {
        $crate::try_response!(sync: $result, $template, None::<$crate::template::NotFoundTemplate>)
    };

    (sync: $result:expr, $template:expr, $fallback:expr) => {
        match $result {
            Ok(r) => r,
            Err(sequenceit_shared::Error::Server(err)) => {
                tracing::error!("{err}");
                $crate::try_response!(@render $template, $fallback, $crate::template::SERVER_ERROR_MESSAGE)
            }
            Err(sequenceit_shared::Error::Unknown(err)) => {
                tracing::error!("{err:#}");
                $crate::try_response!(@render $template, $fallback, $crate::template::SERVER_ERROR_MESSAGE)
            }
            Err(sequenceit_shared::Error::Forbidden) => {
                $crate::try_response!(@render $template, $fallback, $crate::template::FORBIDDEN)
            }
            Err(sequenceit_shared::Error::NotFound) => {
                $crate::try_response!(@render $template, $fallback, $crate::template::NOT_FOUND)
            }
            Err(err) => {
                $crate::try_response!(@render $template, $fallback, err.to_string().as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_keeps_first_message_per_field() {
        let err = sequenceit_shared::invalid("title", "required", "Title is required");
        let errors = field_errors(&err);

        assert_eq!(errors.get("title").map(String::as_str), Some("Title is required"));
        assert!(field_errors(&sequenceit_shared::Error::NotFound).is_empty());
    }

    #[test]
    fn date_filter_formats_unix_seconds() {
        #[derive(askama::Template)]
        #[template(source = "{{ value|date }}", ext = "txt")]
        struct DateTemplate {
            value: i64,
        }

        let html = Template.to_string(DateTemplate { value: 1_704_067_200 });
        assert_eq!(html, "Jan 1, 2024");
    }
}
