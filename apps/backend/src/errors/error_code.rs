//! Error codes for the palette backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the palette backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Hex color code could not be parsed
    InvalidHex,
    /// Path id is not an integer
    InvalidId,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Request body over the size limit
    PayloadTooLarge,
    /// Request body is not JSON
    UnsupportedMediaType,

    // Authorization
    /// Palette entry is protected from removal
    PaletteEntryNotRemovable,
    /// Access denied
    Forbidden,

    // Resource Not Found
    /// Palette entry not found
    PaletteEntryNotFound,
    /// Selected color not found
    SelectedColorNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Hex color already present in the list
    DuplicateHex,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidHex => "INVALID_HEX",
            Self::InvalidId => "INVALID_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",

            Self::PaletteEntryNotRemovable => "PALETTE_ENTRY_NOT_REMOVABLE",
            Self::Forbidden => "FORBIDDEN",

            Self::PaletteEntryNotFound => "PALETTE_ENTRY_NOT_FOUND",
            Self::SelectedColorNotFound => "SELECTED_COLOR_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicateHex => "DUPLICATE_HEX",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
