//! Request credential extraction
//!
//! Pulls bearer tokens and API keys out of the Authorization header and
//! provides the `AuthUser` extractor, the standard prologue for every
//! protected handler.
//!
//! The header contract is strict: exactly two whitespace-separated
//! fields, the first being the literal scheme word. Bearer is used for
//! user sessions, ApiKey for machine-to-machine webhook calls; keeping
//! the scheme words separate means the two can never be confused.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

/// Extract the value of a two-field Authorization header with the given
/// scheme word. Any other shape is a uniform auth failure.
fn scheme_token<'a>(headers: &'a HeaderMap, scheme: &str) -> Result<&'a str, ApiError> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(ApiError::auth_failure)?;

    let mut fields = authorization.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(word), Some(token), None) if word == scheme => Ok(token),
        _ => Err(ApiError::auth_failure()),
    }
}

/// Extract a bearer token from the request headers
///
/// The header value must be exactly `Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    scheme_token(headers, "Bearer")
}

/// Extract a service API key from the request headers
///
/// The header value must be exactly `ApiKey <key>`.
pub fn api_key(headers: &HeaderMap) -> Result<&str, ApiError> {
    scheme_token(headers, "ApiKey")
}

/// Authenticated user extracted from a validated access token
///
/// Composes bearer extraction with JWT verification using the
/// pre-computed keys in AppState. The user id it carries is the only
/// fact downstream code may trust about the caller.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(&parts.headers)?;

        let user_id = app_state
            .jwt()
            .verify(token)
            .map_err(|_| ApiError::auth_failure())?;

        Ok(AuthUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_happy_path() {
        let headers = headers_with_auth("Bearer 1234");
        assert_eq!(bearer_token(&headers).unwrap(), "1234");
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_err());
    }

    #[test]
    fn test_bearer_token_wrong_scheme_word() {
        let headers = headers_with_auth("Bear 1234");
        assert!(bearer_token(&headers).is_err());
    }

    #[test]
    fn test_bearer_token_field_count_must_be_two() {
        assert!(bearer_token(&headers_with_auth("Bearer")).is_err());
        assert!(bearer_token(&headers_with_auth("Bearer a b")).is_err());
    }

    #[test]
    fn test_api_key_happy_path() {
        let headers = headers_with_auth("ApiKey f271c81ff7084ee5b99a5091b42d486e");
        assert_eq!(api_key(&headers).unwrap(), "f271c81ff7084ee5b99a5091b42d486e");
    }

    #[test]
    fn test_api_key_rejects_bearer_scheme() {
        // User tokens and service keys must never be confusable
        let headers = headers_with_auth("Bearer f271c81ff7084ee5b99a5091b42d486e");
        assert!(api_key(&headers).is_err());
        let headers = headers_with_auth("ApiKey something");
        assert!(bearer_token(&headers).is_err());
    }
}
