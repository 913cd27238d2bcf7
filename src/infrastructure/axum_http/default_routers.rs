use axum::{http::StatusCode, response::IntoResponse};

/// Any path other than `POST /webhook` answers 404, including other methods
/// on the webhook path.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "NOT_FOUND").into_response()
}
