//! Error taxonomy for the ticket lookup pipeline.
//!
//! DESIGN
//! ======
//! Validation failures (`EmptyInput`, `TooShort`) abort before any network
//! call. Transport, status, and parse failures are distinct variants for
//! logging, but all three surface to the user as the same generic
//! retry-prompting message; the distinction is nothing the user can act on.

/// Errors produced by the ticket lookup pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    /// The identifier was blank after trimming.
    #[error("empty identifier")]
    EmptyInput,

    /// The identifier was shorter than the minimum length.
    #[error("identifier below minimum length")]
    TooShort,

    /// The required backend URL environment variable is not set.
    #[error("missing backend URL: env var {var} not set")]
    MissingBackendUrl { var: String },

    /// The HTTP request to the backend failed in transport.
    #[error("lookup request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("lookup response error: status {status}")]
    BadStatus { status: u16, body: String },

    /// The backend response body could not be parsed.
    #[error("lookup response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl TrackError {
    /// Grepable error code for structured logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "E_EMPTY_INPUT",
            Self::TooShort => "E_TOO_SHORT",
            Self::MissingBackendUrl { .. } => "E_MISSING_BACKEND_URL",
            Self::Request(_) => "E_REQUEST",
            Self::BadStatus { .. } => "E_BAD_STATUS",
            Self::Parse(_) => "E_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// User-facing warning text. Validation failures keep their own
    /// prompts; everything network-shaped collapses into one generic
    /// retry message.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "⚠️ Por favor ingresa tu número de cédula",
            Self::TooShort => "⚠️ Ingresa un número de cédula válido",
            Self::MissingBackendUrl { .. }
            | Self::Request(_)
            | Self::BadStatus { .. }
            | Self::Parse(_)
            | Self::HttpClientBuild(_) => "Ocurrió un error al consultar el estado. Intenta nuevamente.",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
