use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use sequenceit_shared::Error;
use serde::Deserialize;

use crate::{
    auth,
    routes::AppState,
    template::{SERVER_ERROR_MESSAGE, Template, field_errors},
    user::LoginInput,
};

#[derive(askama::Template, Default)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub error_message: Option<String>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(LoginTemplate::default())
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub email: String,
    pub password: String,
}

pub async fn action(
    template: Template,
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ActionInput>,
) -> Response {
    let user = match state
        .user_command
        .login(LoginInput {
            email: input.email.to_owned(),
            password: input.password,
        })
        .await
    {
        Ok(user) => user,
        Err(err @ Error::Validate(_)) => {
            let error_message = field_errors(&err).into_values().next();

            return template
                .render(LoginTemplate {
                    email: input.email,
                    error_message,
                })
                .into_response();
        }
        Err(err) => {
            tracing::error!("{err}");

            return template
                .render(LoginTemplate {
                    email: input.email,
                    error_message: Some(SERVER_ERROR_MESSAGE.to_owned()),
                })
                .into_response();
        }
    };

    let cookie = match auth::build_cookie(&state.config.jwt, user.id.to_owned()) {
        Ok(cookie) => cookie,
        Err(err) => {
            tracing::error!("{err}");

            return template
                .render(LoginTemplate {
                    email: input.email,
                    error_message: Some(SERVER_ERROR_MESSAGE.to_owned()),
                })
                .into_response();
        }
    };

    tracing::info!(user_id = %user.id, "signed in to admin");

    (jar.add(cookie), Redirect::to("/admin")).into_response()
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(auth::removal_cookie()), Redirect::to(auth::LOGIN_PATH))
}
