//! Server state
//!
//! [`ServerState`] holds shared references to every service. Cloning is
//! shallow; handlers receive it through axum's `State` extractor.

use std::sync::Arc;

use shared::error::AppResult;
use uuid::Uuid;

use crate::catalog::CatalogService;
use crate::core::Config;
use crate::notify::{DisabledMailer, HttpMailer, Mailer};
use crate::payment::GatewayClient;
use crate::selection::DiscountPolicy;
use crate::sessions::{InMemoryProfileStore, ProfileStore, SessionManager};

/// Shared handle to all services
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub catalog: CatalogService,
    pub sessions: Arc<SessionManager>,
    pub profiles: Arc<dyn ProfileStore>,
    pub gateway: Arc<GatewayClient>,
    pub mailer: Arc<dyn Mailer>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("environment", &self.config.environment)
            .field("catalog_version", &self.catalog.version())
            .field("sessions", &self.sessions.count())
            .finish()
    }
}

impl ServerState {
    /// Build every service from the configuration
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let catalog = CatalogService::initialize(config.catalog_path.clone())?;

        let mailer: Arc<dyn Mailer> = match &config.resend_api_key {
            Some(key) => Arc::new(HttpMailer::new(
                config.email_api_base.clone(),
                key.clone(),
                config.email_from.clone(),
            )),
            None => {
                tracing::info!("No email API key configured, sends disabled");
                Arc::new(DisabledMailer)
            }
        };

        let gateway = Arc::new(GatewayClient::new(
            config.razorpay_api_base.clone(),
            config.razorpay_key_id.clone(),
            config.razorpay_key_secret.clone(),
        ));

        Ok(Self {
            config: Arc::new(config.clone()),
            catalog,
            sessions: Arc::new(SessionManager::new()),
            profiles: Arc::new(InMemoryProfileStore::new()),
            gateway,
            mailer,
        })
    }

    /// The wizard flow's discount gate
    pub fn discount_policy(&self) -> DiscountPolicy {
        DiscountPolicy::RedeemGated {
            max_percent: self.config.max_discount_percent,
            code: self.config.redeem_code.clone(),
        }
    }

    /// Open a session pinned to the current catalog snapshot
    pub fn create_session(&self) -> Uuid {
        self.sessions
            .create(self.catalog.current(), self.discount_policy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ServerState {
        ServerState::initialize(&Config::with_overrides("CODE@123", None)).unwrap()
    }

    #[test]
    fn test_initialize_serves_builtin_catalog() {
        let state = state();
        assert_eq!(state.catalog.version(), 1);
        assert_eq!(state.sessions.count(), 0);
    }

    #[test]
    fn test_session_pins_catalog_snapshot() {
        let state = state();
        let id = state.create_session();

        state.catalog.reload().unwrap();
        assert_eq!(state.catalog.version(), 2);

        // The open session still prices against version 1
        let pinned = state.sessions.read(id, |s| s.catalog_version()).unwrap();
        assert_eq!(pinned, 1);

        let fresh = state.create_session();
        let version = state.sessions.read(fresh, |s| s.catalog_version()).unwrap();
        assert_eq!(version, 2);
    }

    #[test]
    fn test_discount_policy_from_config() {
        let policy = state().discount_policy();
        assert!(policy.requires_redeem());
        assert_eq!(policy.max_percent(), 10.0);
    }
}
