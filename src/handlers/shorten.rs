use crate::{error::AppError, AppState};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// POST /
///
/// The request body is the URL to shorten, as plain text.
///
/// 1. Reject an empty body, then a body that is not `http(s)://...` text.
/// 2. Generate a unique id and insert the mapping. One lock acquisition
///    covers both, and the body has already been read in full so no I/O
///    happens under the lock.
/// 3. Return 201 with the fully qualified short URL as the plain-text body.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    if body.is_empty() {
        return Err(AppError::InvalidBody);
    }

    let original_url = std::str::from_utf8(&body).map_err(|_| AppError::InvalidUrlFormat)?;
    if !original_url.starts_with("http://") && !original_url.starts_with("https://") {
        return Err(AppError::InvalidUrlFormat);
    }

    let id = state.store.create(original_url)?;
    tracing::debug!("shortened {} -> {}", original_url, id);

    let short_url = format!("{}/{}", state.config.base_url, id);
    Ok((StatusCode::CREATED, short_url).into_response())
}
