pub mod redirect;
pub mod shorten;

use crate::error::AppError;
use axum::http::Method;

/// Shared fallback for unmatched methods and paths.
///
/// A GET that lands here names an id no route recognizes (`GET /` with an
/// empty id, or a multi-segment path) and is answered as an unknown id.
/// Anything else is a method the service does not serve.
pub async fn method_fallback(method: Method) -> AppError {
    if method == Method::GET {
        AppError::NotFound
    } else {
        AppError::InvalidMethod
    }
}
