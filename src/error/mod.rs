//! Error types for provider configuration and OAuth2 requests.
//!
//! `Error` is the top-level type returned by every client operation. It wraps the
//! configuration and provider-reported failures defined in the submodules and carries
//! transport errors from `reqwest` unchanged so callers can tell a network failure apart
//! from a provider rejecting the request.

pub mod auth;
pub mod config;

use oauth2::{basic::BasicErrorResponse, HttpClientError, RequestTokenError};
use reqwest::StatusCode;
use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError};

/// Top-level crate error type.
///
/// Nothing in this crate retries or recovers; every variant is reported to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed construction parameters or environment.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The provider rejected the request or answered with something unusable.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Transport failure while calling the token endpoint.
    ///
    /// Raised by the OAuth2 client's HTTP layer before any provider response was read.
    #[error(transparent)]
    TokenTransportErr(#[from] HttpClientError<reqwest::Error>),

    /// Transport or body decoding failure while calling a provider API endpoint.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),
}

impl Error {
    /// Returns the provider-reported error, if this failure came from the provider.
    pub fn as_auth_error(&self) -> Option<&AuthError> {
        match self {
            Self::AuthErr(err) => Some(err),
            _ => None,
        }
    }

    /// Maps the OAuth2 client's token request failure onto the crate taxonomy.
    ///
    /// Standard error payloads keep the provider's error code, unparseable bodies are kept
    /// verbatim, and transport errors pass through untouched.
    ///
    /// # Arguments
    /// - `err` - Failure reported by the OAuth2 client
    /// - `status` - HTTP status of the token endpoint response, if one was received
    pub(crate) fn from_token_request(
        err: RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>,
        status: Option<StatusCode>,
    ) -> Self {
        match err {
            RequestTokenError::ServerResponse(response) => {
                let code = response.error().to_string();
                tracing::warn!("Token endpoint rejected request with {}", code);

                AuthError::ProviderRejected {
                    status,
                    code,
                    description: response.error_description().cloned(),
                    uri: response.error_uri().cloned(),
                }
                .into()
            }
            RequestTokenError::Request(err) => Error::TokenTransportErr(err),
            RequestTokenError::Parse(err, body) => AuthError::MalformedTokenResponse {
                status,
                reason: err.to_string(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }
            .into(),
            RequestTokenError::Other(reason) => {
                AuthError::TokenRequestFailed { status, reason }.into()
            }
        }
    }
}

