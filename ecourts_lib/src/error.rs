//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping transport errors and
/// adding input validation and content failures.
///
/// The plain [`crate::PortalClient`] operations never return these; they
/// log them and degrade. The `try_` operations surface them.
#[derive(Debug)]
pub enum EcourtsError {
    /// An error from the underlying transport client.
    Api(ecourts_api::Error),
    /// Caller-provided input failed validation before any request was sent.
    InvalidInput(String),
    /// The portal answered, but not with the kind of content requested.
    UnexpectedContent(String),
}

impl fmt::Display for EcourtsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::UnexpectedContent(msg) => write!(f, "Unexpected content: {}", msg),
        }
    }
}

impl std::error::Error for EcourtsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ecourts_api::Error> for EcourtsError {
    fn from(e: ecourts_api::Error) -> Self {
        Self::Api(e)
    }
}
