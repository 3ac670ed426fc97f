use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    config::JwtConfig,
    routes::AppState,
    template::{ForbiddenTemplate, Template},
    user::UserRow,
};

pub const AUTH_COOKIE_NAME: &str = "auth_token";
pub const LOGIN_PATH: &str = "/admin/login";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    sub: String,
}

pub fn generate_token(config: &JwtConfig, sub: String) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp: now + config.expiration_days * 24 * 60 * 60,
        iat: now,
        iss: config.issuer.to_owned(),
        sub,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

/// Returns the user id carried by a valid token.
pub fn verify_token(config: &JwtConfig, token: &str) -> anyhow::Result<String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[config.audience.to_owned()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims.sub)
}

pub fn build_cookie<'a>(config: &JwtConfig, sub: String) -> anyhow::Result<Cookie<'a>> {
    let token = generate_token(config, sub)?;

    Ok(Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build())
}

pub fn removal_cookie<'a>() -> Cookie<'a> {
    Cookie::build((AUTH_COOKIE_NAME, "")).path("/").build()
}

/// An authenticated account holding the Admin role.
pub struct AuthAdmin(pub UserRow);

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let Some(token) = jar.get(AUTH_COOKIE_NAME).map(|cookie| cookie.value().to_owned()) else {
            return Err(Redirect::to(LOGIN_PATH).into_response());
        };

        let Ok(sub) = verify_token(&state.config.jwt, &token) else {
            return Err(Redirect::to(LOGIN_PATH).into_response());
        };

        let user = match state.user_command.find_by_id(&sub).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(Redirect::to(LOGIN_PATH).into_response()),
            Err(err) => {
                tracing::error!("{err}");
                return Err(Redirect::to(LOGIN_PATH).into_response());
            }
        };

        if !user.is_admin() {
            tracing::warn!(user_id = %user.id, "non-admin tried to access the admin panel");

            return Err((
                StatusCode::FORBIDDEN,
                Template.render(ForbiddenTemplate),
            )
                .into_response());
        }

        Ok(AuthAdmin(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip_checks_issuer_and_audience() {
        let config = crate::config::test_config().jwt;
        let token = generate_token(&config, "01J000".to_owned()).unwrap();

        assert_eq!(verify_token(&config, &token).unwrap(), "01J000");

        let mut other = config.clone();
        other.audience = "someone-else".to_owned();
        assert!(verify_token(&other, &token).is_err());

        let mut other = config;
        other.secret = "another_secret_key_that_is_long_enough".to_owned();
        assert!(verify_token(&other, &token).is_err());
    }
}
