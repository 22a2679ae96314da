#![allow(async_fn_in_trait)]

use bytes::Bytes;

use crate::domain::types::FixtureKey;
use crate::error::SimulatorError;

/// Read-only store of canned response bodies keyed by method and function.
pub trait FixtureStore: Send + Sync {
    /// Load the body for `key` verbatim.
    ///
    /// A missing fixture is [`SimulatorError::FixtureNotFound`]; one that
    /// exists but cannot be read is [`SimulatorError::FixtureUnreadable`].
    async fn load(&self, key: &FixtureKey) -> Result<Bytes, SimulatorError>;
}

/// Source of the operator-forced status code applied to API responses.
pub trait StatusOverrideSource: Send + Sync {
    /// Current override, re-read on every call, never cached.
    ///
    /// `None` means no override is configured; a stored value of 0 must be
    /// reported as `None`.
    async fn read(&self) -> Option<i32>;
}
