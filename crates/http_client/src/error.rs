//! Error taxonomy for the HTTP transport wrapper.

use thiserror::Error;

/// Fallback message for business failures whose envelope carries no message.
pub const DEFAULT_BUSINESS_MESSAGE: &str = "request failed";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Classified failure surfaced to callers of the transport wrapper.
///
/// Every variant is re-raised to the caller after its diagnostic is logged;
/// nothing is swallowed at this layer.
pub enum HttpError {
    /// The server answered 2xx with an envelope whose `code` is not a success code.
    #[error("{message}")]
    Business {
        /// Envelope `message`, or [`DEFAULT_BUSINESS_MESSAGE`] when absent/empty.
        message: String,
    },
    /// HTTP 401. Both token stores are cleared before this is returned.
    #[error("unauthorized")]
    Unauthorized,
    /// HTTP 403.
    #[error("forbidden")]
    Forbidden,
    /// HTTP 404.
    #[error("resource not found")]
    NotFound,
    /// HTTP 500.
    #[error("server error")]
    ServerError,
    /// Any other non-2xx HTTP status.
    #[error("{message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Server-provided envelope message, or `request failed: <status>`.
        message: String,
    },
    /// The request was sent but no response arrived.
    #[error("network error: {message}")]
    Network {
        /// Connectivity diagnostic detail.
        message: String,
    },
    /// The request could not be constructed or sent at all.
    #[error("request configuration error: {message}")]
    Request {
        /// Configuration diagnostic detail.
        message: String,
    },
    /// The response body could not be decoded into the expected shape.
    #[error("decode error: {message}")]
    Decode {
        /// Decode diagnostic detail.
        message: String,
    },
}

impl HttpError {
    /// Returns a stable category label for diagnostics.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Business { .. } => "business",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not-found",
            Self::ServerError => "server-error",
            Self::Status { .. } => "status",
            Self::Network { .. } => "network",
            Self::Request { .. } => "request",
            Self::Decode { .. } => "decode",
        }
    }
}
