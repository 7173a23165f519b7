//! Shared collaborators handed to every pipeline step.

use std::sync::{Arc, RwLock};

use pitwall_remote::RemoteClient;
use pitwall_store::{AppRegistry, ProfileStore};

/// Collaborators a pipeline run needs: the profile store, the app registry
/// (for registering new profiles), the optional remote client, and the name
/// of the profile loaded in a live session, if any (overwrite guard).
pub struct OpContext {
    pub store: ProfileStore,
    pub registry: Arc<RwLock<AppRegistry>>,
    pub remote: Option<RemoteClient>,
    pub loaded_profile: Option<String>,
}

impl OpContext {
    #[must_use]
    pub fn new(store: ProfileStore, registry: AppRegistry) -> Self {
        Self {
            store,
            registry: Arc::new(RwLock::new(registry)),
            remote: None,
            loaded_profile: None,
        }
    }

    #[must_use]
    pub fn with_remote(mut self, remote: Option<RemoteClient>) -> Self {
        self.remote = remote;
        self
    }

    #[must_use]
    pub fn with_loaded_profile(mut self, name: Option<String>) -> Self {
        self.loaded_profile = name;
        self
    }
}
