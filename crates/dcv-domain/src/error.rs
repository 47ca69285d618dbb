//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the verifier and its host ports
///
/// Two families of errors flow through the system with very different
/// recovery policies:
///
/// - [`Error::Resolution`] means an injection entry point could not
///   satisfy a dependency. It is caught at the attempt boundary,
///   counted, and reported; verification continues.
/// - Everything else indicates the verifier's own operating environment
///   is broken (discovery, construction, or materialization failed) and
///   aborts the run.
///
/// [`Error::MissingOptionSource`] sits in between: the non-contextual
/// verifier downgrades it to an empty option list for the affected
/// selector field.
#[derive(Error, Debug)]
pub enum Error {
    /// An injection entry point could not satisfy a dependency
    #[error("resolution error: {message}")]
    Resolution {
        /// Description of the unresolvable dependency
        message: String,
    },

    /// A selector's store kind has no queryable option source
    #[error("no option source for store kind '{store_kind}'")]
    MissingOptionSource {
        /// The store kind that could not be looked up
        store_kind: String,
    },

    /// A component type could not be constructed
    #[error("construction error for '{component}': {message}")]
    Construction {
        /// The component type that failed to construct
        component: String,
        /// Description of the construction failure
        message: String,
    },

    /// A sub-hierarchy reference could not be materialized into the graph
    #[error("materialization error for '{reference}': {message}")]
    Materialization {
        /// The sub-hierarchy reference that failed to materialize
        reference: String,
        /// Description of the materialization failure
        message: String,
    },

    /// Live graph manipulation failed
    #[error("graph error: {message}")]
    Graph {
        /// Description of the graph failure
        message: String,
    },

    /// Injectable type discovery failed
    #[error("type discovery error: {message}")]
    Discovery {
        /// Description of the discovery failure
        message: String,
    },

    /// Configuration-related error (scenario files, option catalogs)
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a resolution error from a message
    pub fn resolution(message: impl Into<String>) -> Self {
        Self::Resolution {
            message: message.into(),
        }
    }

    /// Create a configuration error from a message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a discovery error from a message
    pub fn discovery(message: impl Into<String>) -> Self {
        Self::Discovery {
            message: message.into(),
        }
    }

    /// Create a graph error from a message
    pub fn graph(message: impl Into<String>) -> Self {
        Self::Graph {
            message: message.into(),
        }
    }
}
