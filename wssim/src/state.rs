use std::path::PathBuf;

use crate::infra::fs::{FsFixtureStore, FsStatusOverride};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub responses_dir: PathBuf,
    pub web_dir: PathBuf,
}

impl AppState {
    pub fn fixture_store(&self) -> FsFixtureStore {
        FsFixtureStore {
            responses_dir: self.responses_dir.clone(),
        }
    }

    pub fn override_source(&self) -> FsStatusOverride {
        FsStatusOverride {
            responses_dir: self.responses_dir.clone(),
        }
    }
}
