use reqwest::StatusCode;
use thiserror::Error;

/// Failures reported by the provider, or responses the provider sent that could not be used.
///
/// Transport failures are not part of this enum; they are carried unchanged by the
/// top-level [`Error`](super::Error).
#[derive(Error, Debug)]
pub enum AuthError {
    /// The token endpoint answered with a standard OAuth2 error payload.
    ///
    /// `code` holds the provider's error code verbatim (`invalid_grant`,
    /// `invalid_client`, `invalid_request`, ...).
    #[error("Provider rejected token request: {code}{}", describe(.description))]
    ProviderRejected {
        /// HTTP status of the error response
        status: Option<StatusCode>,
        /// OAuth2 `error` field
        code: String,
        /// OAuth2 `error_description` field
        description: Option<String>,
        /// OAuth2 `error_uri` field
        uri: Option<String>,
    },

    /// A provider API endpoint answered with a non-success status.
    ///
    /// Commonly 401 for an expired or revoked access token and 429 when rate limited.
    #[error("Provider responded with {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status returned by the provider
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// The token endpoint body could not be parsed as a token or error response.
    #[error("Failed to parse token endpoint response: {reason}")]
    MalformedTokenResponse {
        /// HTTP status of the response
        status: Option<StatusCode>,
        /// Parser error, including the JSON path that failed
        reason: String,
        /// Raw response body
        body: String,
    },

    /// The token response parsed but lacks a field this crate needs.
    #[error("Token response is missing `{0}`")]
    MissingTokenField(&'static str),

    /// `expires_in` does not fit into a timestamp.
    #[error("Token response has an out of range expires_in: {0} seconds")]
    InvalidExpiry(u64),

    /// The token request failed for a reason the OAuth2 client reports only as text,
    /// such as an empty error body or an unexpected content type.
    #[error("Token request failed: {reason}")]
    TokenRequestFailed {
        /// HTTP status of the response
        status: Option<StatusCode>,
        /// Failure reported by the OAuth2 client
        reason: String,
    },
}

fn describe(description: &Option<String>) -> String {
    description
        .as_deref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

impl AuthError {
    /// Returns the OAuth2 error code reported by the provider, if any.
    pub fn provider_error_code(&self) -> Option<&str> {
        match self {
            Self::ProviderRejected { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns the HTTP status the provider answered with, if known.
    ///
    /// Covers API calls and token endpoint failures alike.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::ProviderRejected { status, .. }
            | Self::MalformedTokenResponse { status, .. }
            | Self::TokenRequestFailed { status, .. } => *status,
            Self::MissingTokenField(_) | Self::InvalidExpiry(_) => None,
        }
    }

    /// Whether the access token was refused; callers usually refresh and retry.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }
}
