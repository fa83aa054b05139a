use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use embed_client::config::ClientConfig;
use embed_client::render;
use embed_client::requester::{RequestState, SessionRequester};
use esign_core::provider::http_client::reqwest_client::ReqwestClient;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Where to write the signing page
    #[arg(short, long, value_name = "FILE", default_value = "signing-session.html")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    initialize_tracing();

    let config = ClientConfig::from_env().expect("Failed loading client configuration");

    let mut requester = SessionRequester::new(Arc::new(ReqwestClient::default()), config);

    tracing::info!("Creating signing session...");
    requester.load().await;

    match requester.state() {
        RequestState::Success(session) => {
            let page = render::embed_page(&session.embed_url);
            std::fs::write(&cli.output, page).expect("Failed writing signing page");

            tracing::info!(
                document_id = ?session.document_id,
                signrequest_id = ?session.signrequest_id,
                "Signing page written to {}",
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        RequestState::Error(message) => {
            tracing::error!("Failed to load signing session: {message}");
            ExitCode::FAILURE
        }
        // load() always settles
        state => {
            tracing::error!(?state, "Session load did not settle");
            ExitCode::FAILURE
        }
    }
}

fn initialize_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
