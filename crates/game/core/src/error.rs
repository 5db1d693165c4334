//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (`MoveError`, `BoardError`, `CommandParseError`,
//! `InitializationError`) live next to the code that produces them. This
//! module holds the shared classification used by all of them.
//!
//! Drowning is never reported through this machinery: it is an ordinary
//! status transition, visible on the knight.

/// Severity level of an error, used for categorization and logging priority.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that indicate a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown knight, malformed move token, knight already out of play
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: occupancy desync between board and registry, board indexing
    /// failure after the boundary check.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who is at fault: caller input or engine state
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
