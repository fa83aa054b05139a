use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;
use url::Url;

/// Connection settings of the deployed session endpoint, read from
/// `ESIGN_CLIENT_`-prefixed environment variables.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the session relay
    pub base_url: Url,
    /// Public (anon) credential, relayed as a bearer token
    pub anon_key: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::prefixed("ESIGN_CLIENT_").lowercase(false))
            .extract()
    }
}
