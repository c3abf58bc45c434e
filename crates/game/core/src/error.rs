//! Error types for the surfaces around damage resolution.
//!
//! Resolving a hit never fails. Errors only come from the server-facing
//! entry points: looking a target up by id and loading configuration.

use crate::state::ActorId;

/// Severity level of an error, used for logging priorities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Expected during normal play, e.g. a hit on an actor that just left.
    Recoverable,

    /// Invalid input that should be fixed at the source.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common classification for damage-core errors.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;
}

/// Failure to resolve a hit through an actor registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DamageError {
    #[error("target {target} is not connected")]
    TargetNotFound { target: ActorId },
}

impl CoreError for DamageError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TargetNotFound { .. } => ErrorSeverity::Recoverable,
        }
    }
}

/// Invalid damage configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {field} = {value}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}

impl CoreError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}
