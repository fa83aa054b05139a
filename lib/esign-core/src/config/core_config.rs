use std::path::Path;

#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_yaml")]
use figment::providers::{Format, Yaml};
use figment::Figment;
use secrecy::SecretString;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::ConfigParsingError;

/// Layered application configuration: the core sections at the document
/// root plus an application-specific `app` section.
#[derive(Debug, Clone)]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    pub app: Custom,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AppCustomConfigSerdeDTO<Custom> {
    app: Custom,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreConfig {
    pub provider: ProviderConfig,
    pub signer: SignerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    /// Base URL of the SignRequest REST API
    pub base_url: Url,
    /// Secret API token, sent with the `Token` scheme on every provider call
    pub api_key: Option<SecretString>,
    /// Identifier of the pre-existing provider-side document template
    pub template_id: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            template_id: String::new(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://signrequest.com/api/v1").expect("default provider URL is valid")
}

/// Identity of the single demo signer and the sender address placed on the
/// signing request. Defaults match the original demo identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignerConfig {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Application-side correlation id, relayed as `embed_url_user_id`
    pub correlation_id: String,
    pub from_email: String,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            email: "test.signer@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            correlation_id: "test-user-12345".to_string(),
            from_email: "test@example.com".to_string(),
        }
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: DeserializeOwned + Default,
{
    /// Reads and merges the given config files in order; later files and
    /// `ESIGN_`-prefixed environment variables override earlier values.
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                figment = figment.merge(Yaml::file(path));
                continue;
            }

            return Err(ConfigParsingError::UnsupportedFile(
                path.as_ref().display().to_string(),
            ));
        }

        Self::parse(figment)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for config in configs {
            figment = figment.merge(Yaml::string(config.as_ref()));
        }

        Self::parse(figment)
    }

    fn parse(figment: Figment) -> Result<Self, ConfigParsingError> {
        #[cfg(feature = "config_env")]
        let figment = figment.merge(Env::prefixed("ESIGN_").split("__").lowercase(false));

        let core = figment
            .extract::<CoreConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
