//! Typed client for the two SignRequest REST calls the relay performs:
//! creating a document from a template and opening a signing request.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::ConfigValidationError;
use crate::config::core_config::ProviderConfig;
use crate::provider::http_client::{self, HttpClient, StatusCode};

pub mod dto;


use dto::{CreateDocumentRequest, CreateSignRequestRequest, DocumentResponse, SignRequestResponse};

pub struct SignRequestClient {
    http_client: Arc<dyn HttpClient>,
    base_url: Url,
    api_key: SecretString,
    template_id: String,
}

#[derive(Debug, Error)]
pub enum SignRequestApiError {
    /// Non-2xx from the provider; the body is relayed verbatim
    #[error("({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] http_client::Error),
    #[error("unexpected response shape: {0}")]
    InvalidResponse(http_client::Error),
}

impl SignRequestClient {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        config: ProviderConfig,
    ) -> Result<Self, ConfigValidationError> {
        let api_key = config
            .api_key
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(ConfigValidationError::MissingApiKey)?;

        if config.template_id.is_empty() {
            return Err(ConfigValidationError::MissingTemplateId);
        }

        Ok(Self {
            http_client,
            base_url: config.base_url,
            api_key,
            template_id: config.template_id,
        })
    }

    pub async fn create_document(
        &self,
        name: &str,
    ) -> Result<DocumentResponse, SignRequestApiError> {
        let request = CreateDocumentRequest {
            template: self.template_url(),
            name: name.to_owned(),
        };

        self.post("documents", request).await
    }

    pub async fn create_signrequest(
        &self,
        request: CreateSignRequestRequest,
    ) -> Result<SignRequestResponse, SignRequestApiError> {
        self.post("signrequests", request).await
    }

    /// Reference to the configured template, as the document-creation
    /// endpoint expects it
    fn template_url(&self) -> String {
        format!("{}/templates/{}/", self.base(), self.template_id)
    }

    async fn post<Body, Reply>(
        &self,
        segment: &str,
        body: Body,
    ) -> Result<Reply, SignRequestApiError>
    where
        Body: Serialize,
        Reply: DeserializeOwned,
    {
        let url = format!("{}/{segment}/", self.base());

        let response = self
            .http_client
            .post(&url)
            .token_auth(self.api_key.expose_secret())
            .json(body)?
            .send()
            .await?;

        if !response.status.is_success() {
            return Err(SignRequestApiError::Status {
                status: response.status,
                body: response.text(),
            });
        }

        response.json().map_err(SignRequestApiError::InvalidResponse)
    }

    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}
