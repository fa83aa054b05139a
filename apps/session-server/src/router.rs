use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{self, HeaderName, Request, Response};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use esign_core::EsignCore;
use esign_core::config::core_config::AppConfig;
use esign_core::provider::http_client::reqwest_client::ReqwestClient;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ServerConfig;
use crate::dto::error::ErrorResponseRestDTO;
use crate::endpoint::{self, misc, signing_session};
use crate::middleware::get_http_request_context;

pub(crate) struct InternalAppState {
    pub core: EsignCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>) {
    listener.set_nonblocking(true).unwrap();

    let core = EsignCore::new(config.core, Arc::new(ReqwestClient::default()))
        .expect("Failed to initialize core");

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    // preflight contract of the session endpoint: any origin, the headers
    // the browser client sends, POST plus the preflight itself
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
        .allow_methods([http::Method::POST, http::Method::OPTIONS]);

    let api = Router::new()
        .route(
            "/api/signing-session/v1",
            post(signing_session::controller::post_signing_session)
                .options(signing_session::controller::signing_session_options),
        )
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "session-server",
                        RequestId = context.request_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        );

    let technical_endpoints = Router::new().route("/health", get(misc::health_check));

    let mut router = Router::new().merge(api);

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::signing_session::controller::post_signing_session,

            endpoint::misc::health_check,
        ),
        components(
            schemas(
                endpoint::signing_session::dto::CreateSigningSessionResponseRestDTO,

                crate::dto::error::ErrorResponseRestDTO,

                shared_types::DocumentId,
                shared_types::SignRequestId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "signing_session", description = "Signing session creation"),
        )
    )]
    struct ApiDoc;

    ApiDoc::openapi()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    // the session contract knows a single failure shape
    ErrorResponseRestDTO::new(message).into_response()
}
