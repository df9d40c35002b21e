//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for definition resolution
#[derive(Error, Debug)]
pub enum Error {
    /// No container entry, environment variable or service exists under a name
    #[error("Not found: {name}")]
    NotFound {
        /// The name that could not be found
        name: String,
    },

    /// A dot-notation path could not be followed to its leaf
    #[error("Not found: segment '{segment}' of path '{path}'")]
    MissingPathSegment {
        /// The full path being resolved
        path: String,
        /// The first segment that could not be found
        segment: String,
    },

    /// Configuration error: unknown kind, missing previous definition, unguessable parameter
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A constructor, factory or decorator callable failed
    #[error("Error while resolving {kind} definition '{name}': {message}")]
    Construction {
        /// Name of the definition being resolved
        name: String,
        /// Kind of the definition being resolved
        kind: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A value had the wrong shape for the requested operation
    #[error("Type error: {message}")]
    Type {
        /// Description of the type error
        message: String,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Generic error from external sources
    #[error("Generic error: {0}")]
    Generic(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into().into())
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a missing path segment error
    pub fn missing_segment<P: Into<String>, S: Into<String>>(path: P, segment: S) -> Self {
        Self::MissingPathSegment {
            path: path.into(),
            segment: segment.into(),
        }
    }

    /// Create a type error
    pub fn type_error<S: Into<String>>(message: S) -> Self {
        Self::Type {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
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

// Construction error creation methods
impl Error {
    /// Create a construction error
    pub fn construction<N: Into<String>, K: ToString, S: Into<String>>(
        name: N,
        kind: K,
        message: S,
    ) -> Self {
        Self::Construction {
            name: name.into(),
            kind: kind.to_string(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a construction error wrapping the failure that caused it
    pub fn construction_with_source<
        N: Into<String>,
        K: ToString,
        E: std::error::Error + Send + Sync + 'static,
    >(
        name: N,
        kind: K,
        source: E,
    ) -> Self {
        Self::Construction {
            name: name.into(),
            kind: kind.to_string(),
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification
impl Error {
    /// Missing entry, variable or path segment
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::MissingPathSegment { .. })
    }

    /// Fatal configuration problem, never worth retrying
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// A callable or constructor failed
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction { .. })
    }

    /// A value could not be used the way it was requested
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::Type { .. })
    }

    /// The innermost error of this crate's type, following construction wrappers
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Self::Construction {
            source: Some(source),
            ..
        } = current
        {
            match source.downcast_ref::<Error>() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        current
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::generic(s)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::generic(s)
    }
}
