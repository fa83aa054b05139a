use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use esign_core::service::error::ServiceError;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::ErrorResponseRestDTO;

pub(crate) enum OkOrErrorResponse<T> {
    Ok(T),
    Error(ErrorResponseRestDTO),
}

impl<T> OkOrErrorResponse<T> {
    pub fn ok(value: impl Into<T>) -> Self {
        Self::Ok(value.into())
    }

    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, ServiceError>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => {
                let location = std::panic::Location::caller();
                tracing::error!(%error, %location, "Error while {action_description}");

                Self::Error(ErrorResponseRestDTO::new(error.to_string()))
            }
        }
    }
}

impl<T: Serialize> IntoResponse for OkOrErrorResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}

impl<T: ToSchema> utoipa::IntoResponses for OkOrErrorResponse<T> {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
        #[derive(utoipa::IntoResponses)]
        #[response(status = 200, description = "OK")]
        struct SuccessResponse<T: ToSchema>(#[to_schema] T);

        #[derive(utoipa::IntoResponses)]
        #[response(status = 400, description = "Bad Request")]
        struct FailureResponse(#[to_schema] ErrorResponseRestDTO);

        let mut responses = SuccessResponse::<T>::responses();
        responses.append(&mut FailureResponse::responses());
        responses
    }
}
