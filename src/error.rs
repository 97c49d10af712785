//! Typed errors for scheme parsing and editing.

use thiserror::Error;

// ---------------------------------------------------------------------------
// ColorParseError
// ---------------------------------------------------------------------------

/// A hex color string failed to parse.
///
/// Only `#rrggbb` and `#rrggbbaa` are accepted; anything else is rejected
/// rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color string does not start with '#'")]
    MissingHash,
    /// Length of the whole string, including the `#`.
    #[error("expected 7 or 9 characters, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit {0:?}")]
    BadDigit(char),
}

// ---------------------------------------------------------------------------
// SchemeError — top-level
// ---------------------------------------------------------------------------

/// Errors surfaced when loading, saving, or editing a scheme.
///
/// Load failures are terminal for that load only; nothing is retried.
#[derive(Debug, Error)]
pub enum SchemeError {
    /// Reading or writing the plist failed; wraps the underlying i/o error
    /// when that is the cause.
    #[error("property list: {0}")]
    Plist(#[from] plist::Error),

    #[error("scheme root is not a dictionary")]
    NotADictionary,

    #[error("scheme has no settings array")]
    MissingSettingsArray,

    /// The settings array holds no dictionary whose only key is `settings`.
    #[error("settings array has no base entry")]
    MissingBaseEntry,

    #[error("rule index {index} out of bounds (len {len})")]
    RuleIndexOutOfBounds { index: usize, len: usize },

    #[error("document has no save path")]
    NoSavePath,
}
