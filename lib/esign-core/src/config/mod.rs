use thiserror::Error;

pub mod core_config;

#[cfg(test)]
mod test;

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
    #[error("Unsupported file or missing file extension: `{0}`")]
    UnsupportedFile(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("SignRequest API key is not configured")]
    MissingApiKey,
    #[error("SignRequest template id is not configured")]
    MissingTemplateId,
}
