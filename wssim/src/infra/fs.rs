use std::io::ErrorKind;
use std::path::PathBuf;

use bytes::Bytes;

use crate::domain::repository::{FixtureStore, StatusOverrideSource};
use crate::domain::types::FixtureKey;
use crate::error::SimulatorError;

/// Sentinel file (inside the responses directory) holding the forced
/// status code.
pub const STATUS_OVERRIDE_FILE: &str = "statuscode.txt";

// ── Fixture store ────────────────────────────────────────────────────────────

/// Fixtures laid out as `{responses_dir}/{METHOD}/{function}.json`.
#[derive(Clone)]
pub struct FsFixtureStore {
    pub responses_dir: PathBuf,
}

impl FixtureStore for FsFixtureStore {
    async fn load(&self, key: &FixtureKey) -> Result<Bytes, SimulatorError> {
        // Params arrive percent-decoded; a separator must not escape the tree.
        if key.method.contains(['/', '\\']) || key.function.contains(['/', '\\']) {
            return Err(SimulatorError::FixtureNotFound);
        }
        let path = self
            .responses_dir
            .join(&key.method)
            .join(format!("{}.json", key.function));
        match tokio::fs::read(&path).await {
            Ok(body) => Ok(Bytes::from(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SimulatorError::FixtureNotFound),
            Err(_) => Err(SimulatorError::FixtureUnreadable),
        }
    }
}

// ── Status override source ───────────────────────────────────────────────────

/// Reads `statuscode.txt` fresh on every call; the operator edits the file
/// while the simulator runs.
#[derive(Clone)]
pub struct FsStatusOverride {
    pub responses_dir: PathBuf,
}

impl StatusOverrideSource for FsStatusOverride {
    async fn read(&self) -> Option<i32> {
        let path = self.responses_dir.join(STATUS_OVERRIDE_FILE);
        let raw = tokio::fs::read_to_string(&path).await.ok()?;
        let code = raw.trim().parse::<i32>().ok()?;
        (code != 0).then_some(code)
    }
}
