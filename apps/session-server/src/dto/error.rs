use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::front_time;

/// Failure body of the session contract: a flat message plus the moment of
/// failure, served with status 400 for every failure kind.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    pub error: String,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2023-06-09T14:19:57.000Z")]
    pub timestamp: OffsetDateTime,
}

impl ErrorResponseRestDTO {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}
