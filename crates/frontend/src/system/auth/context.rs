use contracts::shared::config::AppConfig;
use contracts::system::auth::{Authenticator, StaticCredentials};
use leptos::prelude::*;
use std::sync::Arc;

/// Credential checker available to every login form.
#[derive(Clone)]
pub struct AuthService {
    inner: Arc<dyn Authenticator>,
}

impl AuthService {
    pub fn new(inner: Arc<dyn Authenticator>) -> Self {
        Self { inner }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(StaticCredentials::from_config(config)))
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.inner.as_ref()
    }
}

/// Hook to access the auth collaborator
pub fn use_auth() -> AuthService {
    use_context::<AuthService>().expect("AuthService not found in component tree")
}
