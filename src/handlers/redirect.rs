use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /:id
///
/// 1. Look the id up in the store (single lock acquisition, released before
///    the response is written).
/// 2. Unknown ids get the not-found error.
/// 3. Known ids get a 307 whose Location is the stored original URL. The
///    header is written twice with the same value; the second write replaces
///    the first, so the two can never disagree.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(original_url) = state.store.lookup(&id) else {
        return Err(AppError::NotFound);
    };

    // The URL was stored verbatim, so it may not survive the trip into a
    // header value (embedded control bytes, for instance).
    let target =
        HeaderValue::from_str(&original_url).map_err(|_| AppError::InvalidRedirectTarget)?;

    let mut response = StatusCode::TEMPORARY_REDIRECT.into_response();
    response.headers_mut().insert(header::LOCATION, target.clone());
    response.headers_mut().insert(header::LOCATION, target);

    Ok(response)
}
