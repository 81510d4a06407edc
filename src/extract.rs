use crate::error::ApiError;
use axum::extract::FromRequestParts;

/// Query extractor whose rejection renders as the service's JSON error body
/// instead of axum's plain-text default.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct Query<T>(pub T);
