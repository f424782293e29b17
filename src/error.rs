use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("The endpoint \"{0}\" is not supported")]
    UnsupportedEndpoint(String),

    #[error("Fetching endpoint {endpoint} has failed ({reason})")]
    Transport {
        endpoint: String,
        reason: String,
        status: Option<u16>,
        #[source]
        source: Option<BoxError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CatalogError {
    /// A non-success HTTP status returned by `endpoint`.
    pub fn status(endpoint: &str, status: u16) -> Self {
        CatalogError::Transport {
            endpoint: endpoint.to_string(),
            reason: format!("HTTP status {status}"),
            status: Some(status),
            source: None,
        }
    }

    /// A network or decoding failure while reading `endpoint`.
    pub fn transport<E>(endpoint: &str, cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        let source = cause.into();
        CatalogError::Transport {
            endpoint: endpoint.to_string(),
            reason: source.to_string(),
            status: None,
            source: Some(source),
        }
    }

    /// HTTP status carried by a transport error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            CatalogError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Transport failures are transient; re-issuing the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CatalogError::Transport { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
