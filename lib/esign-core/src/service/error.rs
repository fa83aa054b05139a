use thiserror::Error;

use crate::provider::signrequest::SignRequestApiError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("SignRequest document creation failed {0}")]
    DocumentCreation(SignRequestApiError),
    #[error("SignRequest signing request failed {0}")]
    SigningRequest(SignRequestApiError),
    /// 2xx from document creation without a usable document reference
    #[error("Document created but no URL was returned")]
    MissingDocumentUrl,
    /// Usually a template misconfiguration rather than a transport problem
    #[error(
        "No signing URL returned. Check your SignRequest template to ensure it has a signer placeholder."
    )]
    MissingEmbedUrl,
}
