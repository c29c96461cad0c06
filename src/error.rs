//! Error types and handling for `ipweather`

use thiserror::Error;

/// Main error type for the `ipweather` report pipeline
#[derive(Error, Debug)]
pub enum ReportError {
    /// The request could not be sent or the response was not received
    #[error("Network error during {operation}: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body is not the expected JSON shape
    #[error("Decode error during {operation}: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    /// A timestamp or date label does not match the fixed layout
    #[error("Time parse error: {input}: {source}")]
    TimeParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ReportError {
    /// Create a new network error
    pub fn network(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Network { operation, source }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(operation: &'static str, message: S) -> Self {
        Self::Decode {
            operation,
            message: message.into(),
        }
    }

    /// Create a new time parse error for the offending input
    pub fn time_parse<S: Into<String>>(input: S, source: chrono::ParseError) -> Self {
        Self::TimeParse {
            input: input.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ReportError::Network { operation, .. } => format!(
                "Unable to reach the {operation} service. Please check your internet connection."
            ),
            ReportError::Decode { operation, .. } => {
                format!("The {operation} service returned an unexpected response.")
            }
            ReportError::TimeParse { input, .. } => {
                format!("The forecast contained an unreadable timestamp: {input}")
            }
            ReportError::Config { message } => format!("Configuration error: {message}"),
        }
    }
}
