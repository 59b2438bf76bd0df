// src/error.rs

//! Error types shared by every part of the engine.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Modulus is zero, one, or even where an odd modulus is required.
    #[error("Invalid modulus {modulus}: {reason}")]
    InvalidModulus { modulus: u64, reason: &'static str },

    /// `a` is not a quadratic residue modulo `modulus`.
    #[error("{value} is not a quadratic residue mod {modulus}")]
    NonResidue { value: u64, modulus: u64 },

    #[error("Precision overflow: {0}")]
    PrecisionOverflow(String),

    #[error("{operation} gave up after {attempts} attempts")]
    ExhaustedRetries { operation: &'static str, attempts: usize },

    #[error("Digit count must be positive, got {0}")]
    InvalidDigitCount(u32),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for QrError {
    fn from(err: config::ConfigError) -> Self {
        QrError::Config(err.to_string())
    }
}

/// Result type alias using QrError
pub type Result<T> = std::result::Result<T, QrError>;
