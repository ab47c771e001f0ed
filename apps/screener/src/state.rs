use std::sync::Arc;

use crate::config::Config;
use crate::screening::profile::ScreeningProfile;
use crate::uploads::UploadStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Default vocabulary and threshold. Requests may override either one.
    pub profile: Arc<ScreeningProfile>,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(config: Config, profile: ScreeningProfile) -> Self {
        let uploads = UploadStore::new(config.upload_dir.clone());
        Self {
            config,
            profile: Arc::new(profile),
            uploads,
        }
    }
}
