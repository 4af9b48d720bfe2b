//! Common error infrastructure for the engine contract.
//!
//! Errors raised by engine queries are classified by severity so that client
//! layers can decide whether to absorb them or surface them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each concern has its own error enum with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Absorbable**: Nothing in the client treats an engine error as fatal

use crate::ids::PlayerId;
use crate::zone::ZoneId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Expected under normal play; the next refresh will reconcile.
    ///
    /// Examples: a gesture for a category that just ended, a stale selection
    Recoverable,

    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: a zone descriptor naming an unknown player
    Validation,
}

/// Common trait for all error types crossing the engine/client boundary.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failures reported by engine queries.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("engine does not track zone {0}")]
    UnknownZone(ZoneId),

    #[error("engine does not know player {0}")]
    UnknownPlayer(PlayerId),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownZone(_) | Self::UnknownPlayer(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownZone(_) => "UNKNOWN_ZONE",
            Self::UnknownPlayer(_) => "UNKNOWN_PLAYER",
        }
    }
}
