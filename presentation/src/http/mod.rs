//! HTTP boundary for the question bank
//!
//! Maps endpoints onto use cases and every [`ApplicationError`](trivia_application::ApplicationError)
//! kind onto a fixed status and JSON error body.

pub mod dto;
pub mod error;
mod handlers;
mod router;

pub use error::ApiError;
pub use router::build_router;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;
use trivia_application::QuestionRepository;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn QuestionRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> Arc<dyn QuestionRepository> {
        Arc::clone(&self.repository)
    }
}

/// Serve the API on `addr` until `shutdown` is cancelled
pub async fn serve(
    addr: SocketAddr,
    state: AppState,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Serving trivia API");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
}
