use std::sync::Arc;

use crate::config::core_config::SignerConfig;
use crate::provider::signrequest::SignRequestClient;

pub mod dto;
pub mod service;


#[derive(Clone)]
pub struct SigningSessionService {
    signrequest_client: Arc<SignRequestClient>,
    signer: Arc<SignerConfig>,
}

impl SigningSessionService {
    pub(crate) fn new(signrequest_client: Arc<SignRequestClient>, signer: Arc<SignerConfig>) -> Self {
        Self {
            signrequest_client,
            signer,
        }
    }
}
