//! Error type for conversion operations

use thiserror::Error;

/// Error type for unit conversion operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The category (unit type) string did not match any known category.
    #[error("invalid unit type: {0}")]
    UnknownCategory(String),

    /// The unit string did not resolve within the named category.
    #[error("invalid unit: {unit}, {category}")]
    UnknownUnit { unit: String, category: String },

    /// Two categories declare the same synonym. Raised while building the
    /// registry, never during a conversion call.
    #[error("duplicate name in units table: {0}")]
    DuplicateUnitName(String),
}
