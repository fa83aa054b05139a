use shared_types::{DocumentId, SignRequestId};

#[derive(Clone, Debug)]
pub struct CreateSigningSessionResponseDTO {
    /// Embed URL the signer's browser loads to perform the signing action
    pub embed_url: String,
    pub document_id: Option<DocumentId>,
    pub signrequest_id: Option<SignRequestId>,
}
