//! Common error infrastructure for vyuha-core.
//!
//! Domain-specific errors (e.g., `AbilityError`, `CombatError`) are defined in
//! their respective modules alongside the operations they validate. This module
//! only provides the shared classification used by the runtime to decide how a
//! failure is reported.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error type with specific variants
//! - **Displayable**: Every message names the unmet condition and its threshold
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The request was well-formed, but game state forbids it right now
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating a misconfigured engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or with an alternative action.
    ///
    /// Examples: no bonus action left, not enough essence
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown ability, ally-only ability aimed at an enemy
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the engine cannot continue.
    ///
    /// Examples: missing required oracle
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all vyuha-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
