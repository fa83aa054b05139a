use super::SigningSessionService;
use super::dto::CreateSigningSessionResponseDTO;
use crate::provider::signrequest::dto::{CreateSignRequestRequest, SignerRequest};
use crate::service::error::ServiceError;

impl SigningSessionService {
    /// Runs the full session sequence: create a document from the
    /// configured template, open a signing request for the single signer,
    /// extract the signer's embed URL. Strictly sequential, aborts at the
    /// first failure.
    pub async fn create_session(
        &self,
    ) -> Result<CreateSigningSessionResponseDTO, ServiceError> {
        let name = format!("Test Document for {}", self.signer.email);

        tracing::debug!("Creating SignRequest document `{name}`");
        let document = self
            .signrequest_client
            .create_document(&name)
            .await
            .map_err(ServiceError::DocumentCreation)?;

        let document_url = document
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(ServiceError::MissingDocumentUrl)?;

        tracing::debug!(document_id = ?document.uuid, "Document created");

        let signrequest = self
            .signrequest_client
            .create_signrequest(CreateSignRequestRequest {
                document: document_url.to_owned(),
                signers: vec![SignerRequest {
                    email: self.signer.email.clone(),
                    first_name: self.signer.first_name.clone(),
                    last_name: self.signer.last_name.clone(),
                    embed_url_user_id: self.signer.correlation_id.clone(),
                }],
                from_email: self.signer.from_email.clone(),
            })
            .await
            .map_err(ServiceError::SigningRequest)?;

        let embed_url = signrequest
            .signers
            .first()
            .and_then(|signer| signer.embed_url.as_deref())
            .filter(|url| !url.is_empty())
            .ok_or(ServiceError::MissingEmbedUrl)?
            .to_owned();

        tracing::info!(
            document_id = ?document.uuid,
            signrequest_id = ?signrequest.uuid,
            "Created signing session"
        );

        Ok(CreateSigningSessionResponseDTO {
            embed_url,
            document_id: document.uuid,
            signrequest_id: signrequest.uuid,
        })
    }
}
