use esign_core::service::signing_session::dto::CreateSigningSessionResponseDTO;
use one_dto_mapper::From;
use serde::Serialize;
use shared_types::{DocumentId, SignRequestId};
use utoipa::ToSchema;

/// Success body of the session contract
#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(CreateSigningSessionResponseDTO)]
pub(crate) struct CreateSigningSessionResponseRestDTO {
    #[schema(example = "https://signrequest.com/permanent-embed/abc/")]
    pub embed_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub document_id: Option<DocumentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub signrequest_id: Option<SignRequestId>,
}
