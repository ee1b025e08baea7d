//! Error handling types
//!
//! Two families of failures exist and they are kept apart on purpose:
//!
//! - [`SchemaError`] - the shape of the option-group types is wrong. Nothing
//!   can fix this at runtime; [`walk`](crate::walk) aborts the process with
//!   the defect's message.
//! - [`Error`] - ordinary recoverable failures (bad flag values, missing
//!   parameters, configuration and client construction problems).

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Structural defect in an option-group schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A shared type is held by value, so it cannot alias other instances
    #[error("field \"{field}\" in struct \"{owner}\" must be a pointer")]
    NotShared {
        /// Name of the offending field
        field: &'static str,
        /// Type that declares the field
        owner: &'static str,
    },

    /// A shared type is embedded into its owner
    #[error("field \"{field}\" in struct \"{owner}\" must not be anonymous")]
    Embedded {
        /// Name of the offending field
        field: &'static str,
        /// Type that declares the field
        owner: &'static str,
    },
}

impl SchemaError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotShared { field, .. } | Self::Embedded { field, .. } => field,
        }
    }

    /// Type that declares the offending field
    pub fn owner(&self) -> &'static str {
        match self {
            Self::NotShared { owner, .. } | Self::Embedded { owner, .. } => owner,
        }
    }
}

/// Main error type for flagwalk
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A flag value could not be parsed
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// A required parameter was never set
    #[error("{message}")]
    MissingParameter {
        /// What the user has to provide
        message: String,
    },

    /// Client construction failed
    #[error("Client error: {message}")]
    Client {
        /// Description of the client error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error (logging, file system, runtime setup)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_parameter<S: Into<String>>(message: S) -> Self {
        Self::MissingParameter {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

// Client error creation methods
impl Error {
    /// Create a client error with source
    pub fn client_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Client {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
