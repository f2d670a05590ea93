use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Plan store HTTP server.
pub struct PlanServer {
    config: ServerConfig,
    state: AppState,
}

impl PlanServer {
    /// Compile the configured schema and set up an empty in-memory store.
    ///
    /// Fails if the schema cannot be loaded; nothing is bound in that case.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let validator = config.load_validator()?;
        Ok(Self::with_state(config, AppState::in_memory(validator)))
    }

    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone(), &self.config.normalized_prefix())
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C.
    pub async fn serve_on(self, listener: TcpListener) -> ServerResult<()> {
        let app = self.router();
        let addr = listener.local_addr()?;
        tracing::info!(
            prefix = %self.config.normalized_prefix(),
            "plan server listening on http://{addr}"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
