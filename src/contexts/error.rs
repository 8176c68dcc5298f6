use std::fmt;

/// Message shown when either input is blank after trimming.
pub const VALIDATION_MESSAGE: &str = "Debe ingresar al menos un nombre y un apellido";
/// Message shown for any non-2xx response.
pub const CONNECTION_MESSAGE: &str = "Error en la conexión con el servidor";
/// Message shown when the request was aborted before it settled.
pub const ABORTED_MESSAGE: &str = "La solicitud fue abortada";

/// Why an in-flight request stopped before settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The request timer fired.
    Timeout,
    /// A newer search was started and this one's result is no longer wanted.
    Superseded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Timeout => write!(f, "timeout"),
            CancelReason::Superseded => write!(f, "superseded"),
        }
    }
}

/// Everything that can end a search without records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Given names or surnames missing after trimming
    Validation,
    /// Backend answered with a non-success status
    Status(u16),
    /// Network level failure
    Transport(String),
    /// Request aborted before it settled
    Cancelled(CancelReason),
    /// Body was not a JSON list of taxpayer records
    Decode(String),
}

impl SearchError {
    /// Cancellation reason, when the request was aborted.
    pub fn cancel_reason(&self) -> Option<CancelReason> {
        match self {
            SearchError::Cancelled(reason) => Some(*reason),
            _ => None,
        }
    }
}

// Display is the user-facing text. Timeout and other aborts share one message;
// use `cancel_reason` to tell them apart.
impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Validation => write!(f, "{}", VALIDATION_MESSAGE),
            SearchError::Status(_) => write!(f, "{}", CONNECTION_MESSAGE),
            SearchError::Transport(msg) => write!(f, "{}", msg),
            SearchError::Cancelled(_) => write!(f, "{}", ABORTED_MESSAGE),
            SearchError::Decode(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Cancelled(CancelReason::Timeout)
        } else if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}

/// Errors raised while resolving the startup settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No API base URL in the environment nor in the settings file
    MissingBaseUrl,
    /// Base URL present but not an absolute http(s) URL
    InvalidBaseUrl(String),
    /// Settings file exists but could not be parsed
    Parse(String),
    /// Error when building the HTTP client fails
    ClientCreation(String),
    /// IO related errors
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingBaseUrl => write!(f, "API base URL is not configured"),
            ConfigError::InvalidBaseUrl(url) => write!(f, "Invalid API base URL: {}", url),
            ConfigError::Parse(msg) => write!(f, "Invalid settings file: {}", msg),
            ConfigError::ClientCreation(msg) => write!(f, "HTTP client creation failed: {}", msg),
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(SearchError::Validation.to_string(), "Debe ingresar al menos un nombre y un apellido");
        assert_eq!(SearchError::Status(502).to_string(), "Error en la conexión con el servidor");
        assert_eq!(SearchError::Transport("connection refused".into()).to_string(), "connection refused");
    }

    #[test]
    fn test_cancel_reason_is_kept_behind_merged_message() {
        let err = SearchError::Cancelled(CancelReason::Timeout);
        assert_eq!(err.to_string(), ABORTED_MESSAGE);
        assert_eq!(err.cancel_reason(), Some(CancelReason::Timeout));
        assert_eq!(SearchError::Status(500).cancel_reason(), None);
    }

    #[test]
    fn test_decode_error_from_json() {
        let err: SearchError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, SearchError::Decode(_)));
    }
}
