//! Error Types
//!
//! Remote-call failures as seen by the optimistic mutation layer.

use thiserror::Error;

/// Failure of a single backend round trip.
///
/// Reads leave local state untouched; writes trigger a rollback to the
/// pre-mutation snapshot plus a user-visible notice. Audit-log writes are
/// swallowed inside the activity sink and never reach this type's callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("remote read failed: {0}")]
    Read(String),
    #[error("remote write failed: {0}")]
    Write(String),
}
