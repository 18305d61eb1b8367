//! Error types for graphpath-core.
//!
//! Every graph error is recoverable: the caller reports it and retries with
//! corrected input. [`Error::code`] gives a stable, machine-readable reason
//! code for each variant.

use thiserror::Error;

/// Graph engine error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The named node does not exist.
    #[error("Node '{0}' not found")]
    NodeNotFound(String),

    /// A node with this name already exists (rename collision).
    #[error("Node '{0}' already exists")]
    NodeExists(String),

    /// An arc origin -> destination is already present.
    #[error("Arc from '{origin}' to '{destination}' already exists")]
    DuplicateArc {
        /// Origin node name.
        origin: String,
        /// Destination node name.
        destination: String,
    },

    /// The opposite arc destination -> origin is already present.
    #[error("Cannot add reverse arc: arc from '{destination}' to '{origin}' already exists")]
    ReverseArcExists {
        /// Origin node name of the rejected arc.
        origin: String,
        /// Destination node name of the rejected arc.
        destination: String,
    },

    /// Arc from a node to itself.
    #[error("Arc from '{0}' to itself is not allowed")]
    SelfLoop(String),

    /// Weight is negative or not a number.
    #[error("Invalid weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),

    /// No arc origin -> destination to update.
    #[error("No arc from '{origin}' to '{destination}'")]
    ArcNotFound {
        /// Origin node name.
        origin: String,
        /// Destination node name.
        destination: String,
    },

    /// Destination is unreachable from origin.
    #[error("No path from '{origin}' to '{destination}'")]
    NoPath {
        /// Origin node name.
        origin: String,
        /// Destination node name.
        destination: String,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// Returns the stable reason code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NodeNotFound(_) => "NODE_NOT_FOUND",
            Self::NodeExists(_) => "NODE_EXISTS",
            Self::DuplicateArc { .. } => "DUPLICATE_ARC",
            Self::ReverseArcExists { .. } => "REVERSE_ARC_EXISTS",
            Self::SelfLoop(_) => "SELF_LOOP",
            Self::InvalidWeight(_) => "INVALID_WEIGHT",
            Self::ArcNotFound { .. } => "ARC_NOT_FOUND",
            Self::NoPath { .. } => "NO_PATH",
            Self::Config(_) => "CONFIG",
            Self::Json(_) => "JSON",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NodeNotFound("Z".to_string());
        assert_eq!(err.to_string(), "Node 'Z' not found");

        let err = Error::ReverseArcExists {
            origin: "B".to_string(),
            destination: "A".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot add reverse arc: arc from 'A' to 'B' already exists"
        );
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            Error::NodeNotFound(String::new()),
            Error::NodeExists(String::new()),
            Error::DuplicateArc {
                origin: String::new(),
                destination: String::new(),
            },
            Error::ReverseArcExists {
                origin: String::new(),
                destination: String::new(),
            },
            Error::SelfLoop(String::new()),
            Error::InvalidWeight(-1.0),
            Error::ArcNotFound {
                origin: String::new(),
                destination: String::new(),
            },
            Error::NoPath {
                origin: String::new(),
                destination: String::new(),
            },
            Error::Config(String::new()),
            Error::Json(String::new()),
        ];
        let mut codes: Vec<&str> = errors.iter().map(Error::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.code(), "JSON");
    }
}
