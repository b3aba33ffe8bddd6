//! Error types for the value codec and the XDR decoder

use thiserror::Error;

use crate::models::ArgKind;

/// Why a typed argument could not be turned into an `ScVal`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("Invalid boolean '{raw}': expected exactly \"true\" or \"false\"")]
    InvalidBoolean { raw: String },

    #[error("'{raw}' is not an integer literal (expected {kind})")]
    NotANumber { kind: ArgKind, raw: String },

    #[error("'{raw}' is out of range for {kind}")]
    OutOfRange { kind: ArgKind, raw: String },

    #[error("Invalid symbol '{raw}': {reason}")]
    InvalidSymbol { raw: String, reason: String },

    #[error("Invalid address '{raw}': expected a G... account or C... contract strkey")]
    InvalidAddress { raw: String },

    #[error("Malformed {kind} value: {reason}")]
    MalformedComposite { kind: ArgKind, reason: String },
}

impl EncodeError {
    /// Stable machine-readable name of the error kind
    pub fn code(&self) -> &'static str {
        match self {
            EncodeError::InvalidBoolean { .. } => "invalid_boolean",
            EncodeError::NotANumber { .. } => "not_a_number",
            EncodeError::OutOfRange { .. } => "out_of_range",
            EncodeError::InvalidSymbol { .. } => "invalid_symbol",
            EncodeError::InvalidAddress { .. } => "invalid_address",
            EncodeError::MalformedComposite { .. } => "malformed_composite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Could not decode XDR. Invalid format or unsupported type.")]
    NoSchemaMatched,
}
