//! Bearer-session extraction.

use super::{error::ApiError, routes::AppState};
use crate::task::{
    domain::UserId,
    ports::{SessionToken, TaskRepository, UserRepository},
};
use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use mockable::Clock;

/// The authenticated caller, resolved from the `Authorization: Bearer`
/// header before any handler runs.
///
/// Extraction failing with 401 is the only authentication gate; handlers
/// and the gateway below them always see an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl<R, U, C> FromRequestParts<AppState<R, U, C>> for CurrentUser
where
    R: TaskRepository + 'static,
    U: UserRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R, U, C>,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;
        let raw_token = header_value
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;
        let user = state
            .sessions()
            .resolve(&SessionToken::new(raw_token))
            .await
            .ok_or(ApiError::Unauthorized)?;
        Ok(Self(user))
    }
}
