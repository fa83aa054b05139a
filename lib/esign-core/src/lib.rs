#![cfg_attr(feature = "strict", deny(warnings))]

//! Core of the e-signature session relay: configuration, the HTTP client
//! abstraction and the signing-session orchestration against the
//! SignRequest REST API.

use std::sync::Arc;

use crate::config::ConfigValidationError;
use crate::config::core_config::CoreConfig;
use crate::provider::http_client::HttpClient;
use crate::provider::signrequest::SignRequestClient;
use crate::service::signing_session::SigningSessionService;

pub mod config;
pub mod provider;
pub mod service;

/// Entry point wiring configuration and transport into the services.
pub struct EsignCore {
    pub signing_session_service: SigningSessionService,
}

impl EsignCore {
    /// Builds the core. Provider secrets are validated here so that a
    /// misconfigured deployment fails at startup instead of per request.
    pub fn new(
        config: CoreConfig,
        http_client: Arc<dyn HttpClient>,
    ) -> Result<Self, ConfigValidationError> {
        let signrequest_client = Arc::new(SignRequestClient::new(http_client, config.provider)?);

        Ok(Self {
            signing_session_service: SigningSessionService::new(
                signrequest_client,
                Arc::new(config.signer),
            ),
        })
    }
}
