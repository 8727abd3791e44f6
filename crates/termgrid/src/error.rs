//! Error type for grid input decoding.
//!
//! The layout engine itself is defensive (malformed structure degrades to
//! safe defaults), so errors only arise while decoding caller-supplied
//! JSON into the typed input model.

use std::fmt;

/// Error produced while building [`GridData`](crate::GridData) from
/// untyped input.
#[derive(Debug)]
pub enum GridError {
    /// A column entry could not be decoded into a `Column`.
    InvalidColumn(String),
    /// The input document or option object could not be decoded.
    InvalidData(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidColumn(msg) => write!(f, "invalid column: {}", msg),
            GridError::InvalidData(msg) => write!(f, "invalid grid data: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::InvalidData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = GridError::InvalidColumn("bad maxWidth".to_string());
        assert!(err.to_string().contains("invalid column"));
        assert!(err.to_string().contains("bad maxWidth"));
    }

    #[test]
    fn from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let grid_err: GridError = err.into();
        assert!(matches!(grid_err, GridError::InvalidData(_)));
    }
}
