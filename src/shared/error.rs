//! Strict error handling for the conversion engine
//!
//! All variants are serializable so an embedding shell can forward them
//! across an IPC boundary unchanged.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Requested unit does not belong to the current category's catalog
    #[error("Invalid unit for category: {0}")]
    InvalidUnitForCategory(String),

    /// The engine cannot convert between the requested unit pair
    #[error("Conversion unsupported: {0}")]
    ConversionUnsupported(String),

    /// Malformed caller input (non-finite value, unparseable text)
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidUnitForCategory("Unit 'kg' is not valid for Length".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid unit for category: Unit 'kg' is not valid for Length"
        );
    }

    #[test]
    fn test_error_serializes_tagged() {
        let err = AppError::Validation("Value must be finite".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"type":"Validation","message":"Value must be finite"}"#
        );
    }
}
