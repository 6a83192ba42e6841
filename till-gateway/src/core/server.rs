use std::net::SocketAddr;

use crate::core::{Config, GatewayResult, GatewayState};
use crate::routes;

/// HTTP server wrapper owning startup and graceful shutdown.
pub struct Server {
    config: Config,
    state: Option<GatewayState>,
}

impl Server {
    /// Create a server that builds its own state on `run`.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Attach pre-built state, for callers that keep handles to it.
    pub fn with_state(config: Config, state: GatewayState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(self) -> GatewayResult<()> {
        let state = match self.state {
            Some(state) => state,
            None => GatewayState::initialize(self.config.clone()),
        };

        let app = routes::build_app(&state);
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));

        tracing::info!(
            port = self.config.http_port,
            commerce = %self.config.api_base_url,
            environment = %self.config.environment,
            "POS gateway listening"
        );

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("POS gateway stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
