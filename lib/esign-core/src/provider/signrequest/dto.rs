//! Wire shapes of the SignRequest REST API, limited to the fields the
//! relay reads and writes.

use serde::{Deserialize, Serialize};
use shared_types::{DocumentId, SignRequestId};

#[derive(Clone, Debug, Serialize)]
pub struct CreateDocumentRequest {
    /// Full URL of the provider-side template
    pub template: String,
    /// Display name of the document being created
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DocumentResponse {
    #[serde(default)]
    pub uuid: Option<DocumentId>,
    /// Document reference linking the signing request to this document.
    /// The provider can answer 2xx without it.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateSignRequestRequest {
    /// Document reference obtained from [`DocumentResponse::url`]
    pub document: String,
    pub signers: Vec<SignerRequest>,
    pub from_email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignerRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub embed_url_user_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SignRequestResponse {
    #[serde(default)]
    pub uuid: Option<SignRequestId>,
    #[serde(default)]
    pub signers: Vec<SignerResponse>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SignerResponse {
    #[serde(default)]
    pub email: Option<String>,
    /// Time-limited, single-use link the signer's browser loads; only
    /// present when the template has a signer placeholder configured
    #[serde(default)]
    pub embed_url: Option<String>,
}
