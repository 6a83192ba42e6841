use std::sync::Arc;

use till_client::{ClientConfig, CommerceApi};

use crate::cart::CartOrchestrator;
use crate::core::Config;
use crate::session::SessionStore;

/// Shared gateway state - configuration, session store and orchestrator
///
/// Everything lives behind `Arc`, so cloning the state per request is
/// cheap. The commerce client is kept both inside the orchestrator and as
/// a direct handle for the upstream health probe.
#[derive(Clone)]
pub struct GatewayState {
    config: Arc<Config>,
    sessions: Arc<SessionStore>,
    orchestrator: Arc<CartOrchestrator>,
    commerce: Arc<dyn CommerceApi>,
}

impl GatewayState {
    /// Build state from configuration with the real HTTP commerce client.
    pub fn initialize(config: Config) -> Self {
        let mut client_config =
            ClientConfig::new(&config.api_base_url).with_timeout(config.api_timeout_secs);
        if let Some(token) = &config.api_token {
            client_config = client_config.with_token(token);
        }
        let commerce: Arc<dyn CommerceApi> = Arc::new(client_config.build_http_client());

        Self::with_commerce(config, commerce)
    }

    /// Build state around an arbitrary commerce implementation. Tests pass
    /// scripted mocks through here.
    pub fn with_commerce(config: Config, commerce: Arc<dyn CommerceApi>) -> Self {
        let sessions = Arc::new(SessionStore::new(&config));
        let orchestrator = Arc::new(CartOrchestrator::new(commerce.clone()));

        Self {
            config: Arc::new(config),
            sessions,
            orchestrator,
            commerce,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn orchestrator(&self) -> &CartOrchestrator {
        &self.orchestrator
    }

    pub fn commerce(&self) -> &Arc<dyn CommerceApi> {
        &self.commerce
    }
}
