use super::*;

/// Rejections in the authority's structured error shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ApiError {
    NotFound,
    /// `{"<field>": ["<msg>"]}`
    Field(&'static str, String),
    /// `{"non_field_errors": ["<msg>"]}`
    NonField(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"detail": "Not found."})),
            )
                .into_response(),
            ApiError::Field(field, msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ field: [msg] })),
            )
                .into_response(),
            ApiError::NonField(msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"non_field_errors": [msg]})),
            )
                .into_response(),
        }
    }
}

pub(super) fn unauthorized(detail: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({"detail": detail, "code": "token_not_valid"})),
    )
        .into_response()
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"detail": err.to_string()})),
    )
        .into_response()
}
