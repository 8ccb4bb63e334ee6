use std::sync::Arc;

use reloomate_core::onboarding::OnboardingCatalog;
use reloomate_db::ProfileStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the deployment mode.
    pub config: Arc<ServerConfig>,
    /// Onboarding slides, loaded once at startup and never mutated.
    pub onboarding: Arc<OnboardingCatalog>,
    /// Profile collaborator behind the `/users/profile` routes.
    pub profiles: Arc<dyn ProfileStore>,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        onboarding: OnboardingCatalog,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            onboarding: Arc::new(onboarding),
            profiles,
        }
    }
}
