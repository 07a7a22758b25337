//! Error types for configuration and ledger persistence

use thiserror::Error;

/// Problems with the tuning constants. Fatal to game start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Problems persisting the score ledger. Never surfaced to the game loop.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger storage failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger encoding failed: {0}")]
    Serde(#[from] serde_json::Error),
}
