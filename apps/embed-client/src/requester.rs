use std::sync::Arc;

use esign_core::provider::http_client::{self, HttpClient};
use serde::Deserialize;
use shared_types::{DocumentId, SignRequestId};
use thiserror::Error;

use crate::config::ClientConfig;

/// Lifecycle of one session fetch
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Success(SigningSession),
    Error(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SigningSession {
    pub embed_url: String,
    pub document_id: Option<DocumentId>,
    pub signrequest_id: Option<SignRequestId>,
}

#[derive(Clone, Debug, Deserialize)]
struct SessionResponse {
    #[serde(default)]
    embed_url: Option<String>,
    #[serde(default)]
    document_id: Option<DocumentId>,
    #[serde(default)]
    signrequest_id: Option<SignRequestId>,
}

#[derive(Clone, Debug, Deserialize)]
struct SessionErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Error)]
enum RequestError {
    #[error("{0}")]
    Transport(#[from] http_client::Error),
    /// Relayed failure message, or `HTTP {status}` when the body carries none
    #[error("{message}")]
    Service { message: String },
    #[error("No embed URL returned from the function")]
    MissingEmbedUrl,
}

/// Fetches a signing session and tracks the four-state lifecycle the
/// surrounding UI renders from.
pub struct SessionRequester {
    http_client: Arc<dyn HttpClient>,
    config: ClientConfig,
    state: RequestState,
}

impl SessionRequester {
    pub fn new(http_client: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self {
            http_client,
            config,
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// One fetch attempt; always settles in `Success` or `Error`. Calling
    /// it again is the manual retry.
    pub async fn load(&mut self) -> &RequestState {
        self.state = RequestState::Loading;

        self.state = match self.request_session().await {
            Ok(session) => RequestState::Success(session),
            Err(error) => RequestState::Error(error.to_string()),
        };

        &self.state
    }

    async fn request_session(&self) -> Result<SigningSession, RequestError> {
        let url = format!(
            "{}/api/signing-session/v1",
            self.config.base_url.as_str().trim_end_matches('/')
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.anon_key)
            .json(serde_json::json!({}))?
            .send()
            .await?;

        if !response.status.is_success() {
            let status = response.status;
            let message = serde_json::from_slice::<SessionErrorResponse>(&response.body)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("HTTP {status}"));

            return Err(RequestError::Service { message });
        }

        let session: SessionResponse = response.json()?;

        let embed_url = session
            .embed_url
            .filter(|url| !url.is_empty())
            .ok_or(RequestError::MissingEmbedUrl)?;

        Ok(SigningSession {
            embed_url,
            document_id: session.document_id,
            signrequest_id: session.signrequest_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use esign_core::provider::http_client::reqwest_client::ReqwestClient;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn requester(mock_server: &MockServer) -> SessionRequester {
        SessionRequester::new(
            Arc::new(ReqwestClient::default()),
            ClientConfig {
                base_url: mock_server.uri().parse().unwrap(),
                anon_key: "anon-key".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn successful_load_settles_in_success() {
        // given
        let mock_server = MockServer::start().await;
        let mut requester = requester(&mock_server);
        assert_eq!(&RequestState::Idle, requester.state());

        Mock::given(method("POST"))
            .and(path("/api/signing-session/v1"))
            .and(header("Authorization", "Bearer anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "embed_url": "https://provider/sign/abc",
                "document_id": "d1",
                "signrequest_id": "s1",
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        // when
        requester.load().await;

        // then
        let RequestState::Success(session) = requester.state() else {
            panic!("expected success, got {:?}", requester.state());
        };
        assert_eq!("https://provider/sign/abc", session.embed_url);
        assert_eq!("d1", session.document_id.as_ref().unwrap().as_str());
        assert_eq!("s1", session.signrequest_id.as_ref().unwrap().as_str());
    }

    #[tokio::test]
    async fn relayed_error_message_is_displayed_verbatim() {
        // given
        let mock_server = MockServer::start().await;
        let mut requester = requester(&mock_server);

        Mock::given(method("POST"))
            .and(path("/api/signing-session/v1"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "boom",
                "timestamp": "2023-06-09T14:19:57.000Z",
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        // when
        requester.load().await;

        // then
        assert_eq!(&RequestState::Error("boom".to_string()), requester.state());
    }

    #[tokio::test]
    async fn non_json_failure_falls_back_to_the_status_code() {
        // given
        let mock_server = MockServer::start().await;
        let mut requester = requester(&mock_server);

        Mock::given(method("POST"))
            .and(path("/api/signing-session/v1"))
            .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
            .mount(&mock_server)
            .await;

        // when
        requester.load().await;

        // then
        assert_eq!(
            &RequestState::Error("HTTP 503".to_string()),
            requester.state()
        );
    }

    #[tokio::test]
    async fn success_without_embed_url_is_a_failure() {
        // given
        let mock_server = MockServer::start().await;
        let mut requester = requester(&mock_server);

        Mock::given(method("POST"))
            .and(path("/api/signing-session/v1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "document_id": "d1",
            })))
            .mount(&mock_server)
            .await;

        // when
        requester.load().await;

        // then
        assert_eq!(
            &RequestState::Error("No embed URL returned from the function".to_string()),
            requester.state()
        );
    }

    #[tokio::test]
    async fn manual_retry_after_a_failure_can_succeed() {
        // given
        let mock_server = MockServer::start().await;
        let mut requester = requester(&mock_server);

        Mock::given(method("POST"))
            .and(path("/api/signing-session/v1"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "temporarily broken",
                "timestamp": "2023-06-09T14:19:57.000Z",
            })))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/signing-session/v1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "embed_url": "https://provider/sign/abc",
            })))
            .mount(&mock_server)
            .await;

        // when
        requester.load().await;
        assert!(matches!(requester.state(), RequestState::Error(_)));
        requester.load().await;

        // then
        assert!(matches!(requester.state(), RequestState::Success(_)));
    }
}
