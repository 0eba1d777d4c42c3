//! Error types for the scan session.

use thiserror::Error;

/// Scan session errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The requested action is not allowed in the current state.
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
}

/// Result type for scan session operations.
pub type ScanResult<T> = Result<T, ScanError>;
