use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};

use crate::auth::claims::{AuthUser, Claims};
use common::config::AppConfig;

/// Implements extraction of `AuthUser` from request headers.
///
/// Looks for a Bearer token in the `Authorization` header and verifies the
/// JWT against the configured signing secret. Expired tokens and malformed
/// ones are both rejected with 401, but the message tells them apart so a
/// client knows whether to re-authenticate.
///
/// # Errors
/// - `401 Unauthorized` if the header is missing or the token fails
///   verification.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    (
                        StatusCode::UNAUTHORIZED,
                        "Missing or invalid Authorization header",
                    )
                })?;

        let token_data = decode::<Claims>(
            bearer.token(),
            &DecodingKey::from_secret(AppConfig::get().jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => (StatusCode::UNAUTHORIZED, "Token has expired"),
            _ => (StatusCode::UNAUTHORIZED, "Invalid token"),
        })?;

        Ok(AuthUser(token_data.claims))
    }
}
