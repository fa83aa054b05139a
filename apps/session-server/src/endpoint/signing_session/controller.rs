use axum::extract::State;
use axum::http::StatusCode;

use super::dto::CreateSigningSessionResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/signing-session/v1",
    responses(OkOrErrorResponse<CreateSigningSessionResponseRestDTO>),
    tag = "signing_session",
    summary = "Create signing session",
    description = indoc::indoc! {"
        Creates a provider document from the configured template, opens a
        signing request for the configured signer and returns the embed URL
        for the signing frame. No request body is required.
    "},
)]
pub(crate) async fn post_signing_session(
    state: State<AppState>,
) -> OkOrErrorResponse<CreateSigningSessionResponseRestDTO> {
    let result = state.core.signing_session_service.create_session().await;
    OkOrErrorResponse::from_result(result, "creating signing session")
}

/// Plain OPTIONS outside a CORS preflight; real preflights are answered by
/// the CORS layer before reaching this handler
pub(crate) async fn signing_session_options() -> StatusCode {
    StatusCode::OK
}
