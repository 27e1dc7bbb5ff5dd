//! Core error types for the weft framework.
//!
//! This module provides the [`WeftError`] enum covering user-script errors
//! (invalid element usage surfaced back to the running script), configuration
//! errors, serialization errors, and IO errors.

use thiserror::Error;

/// The primary error type for the weft framework.
///
/// User-script errors are validation failures in the script's use of the
/// element API. They are never retried or recovered internally; they
/// propagate to the script's top level, where the host renders them as
/// error output.
#[derive(Error, Debug)]
pub enum WeftError {
    // ── User script errors ───────────────────────────────────────────

    /// A form was created while another form's block was enclosing it.
    #[error("Forms cannot be nested in other forms.")]
    NestedForm,

    /// Two forms in the same run resolved to the same identity.
    ///
    /// The message is pre-built by the form module and names the offending
    /// `key` when one was supplied.
    #[error("{0}")]
    DuplicateForm(String),

    /// Any other misuse of the element API by a user script.
    #[error("{0}")]
    ApiUsage(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred while serializing an element payload.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WeftError {
    /// Returns `true` if this error was caused by the user's script rather
    /// than by the framework or its environment.
    ///
    /// Script errors are rendered inline in the app output; everything else
    /// is reported through the host's own channels.
    pub const fn is_script_error(&self) -> bool {
        match self {
            Self::NestedForm | Self::DuplicateForm(_) | Self::ApiUsage(_) => true,
            Self::Config(_) | Self::Serialization(_) | Self::Io(_) => false,
        }
    }
}

/// A convenience type alias for `Result<T, WeftError>`.
pub type WeftResult<T> = Result<T, WeftError>;
