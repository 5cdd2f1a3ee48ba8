//! Static provider configuration.
//!
//! Every supported provider is a variant of [`ProviderKind`], which carries the provider's
//! published endpoints, forced scopes, and the way it expects client credentials on the token
//! endpoint. The [`Provider`] trait ties a zero-sized marker type to one of those variants and
//! to the profile type its user endpoint returns, so a single generic
//! [`OAuthClient`](crate::client::OAuthClient) serves every provider.

pub mod discord;
pub mod spotify;

use std::fmt;

use serde::de::DeserializeOwned;

pub use discord::Discord;
pub use spotify::Spotify;

/// Supported OAuth2 providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ProviderKind {
    Discord,
    Spotify,
}

impl ProviderKind {
    /// Human readable provider name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Discord => "Discord",
            Self::Spotify => "Spotify",
        }
    }

    /// Published OAuth2 and user endpoints of the provider.
    pub fn default_endpoints(self) -> Endpoints {
        match self {
            Self::Discord => discord::endpoints(),
            Self::Spotify => spotify::endpoints(),
        }
    }

    /// Scopes that are always requested in addition to the caller's scopes.
    pub fn forced_scopes(self) -> &'static [&'static str] {
        match self {
            Self::Discord => discord::FORCED_SCOPES,
            Self::Spotify => &[],
        }
    }

    /// How client credentials are presented to the token endpoint.
    pub fn auth_mode(self) -> AuthMode {
        match self {
            Self::Discord => AuthMode::RequestBody,
            Self::Spotify => AuthMode::BasicAuth,
        }
    }

    /// Prefix of the environment variables holding this provider's credentials.
    pub fn env_prefix(self) -> &'static str {
        match self {
            Self::Discord => "DISCORD",
            Self::Spotify => "SPOTIFY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Placement of the client id and secret on token endpoint requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `client_id` and `client_secret` as form fields of the request body.
    RequestBody,
    /// HTTP Basic `Authorization` header.
    BasicAuth,
}

impl From<AuthMode> for oauth2::AuthType {
    fn from(mode: AuthMode) -> Self {
        match mode {
            AuthMode::RequestBody => oauth2::AuthType::RequestBody,
            AuthMode::BasicAuth => oauth2::AuthType::BasicAuth,
        }
    }
}

/// Endpoint URLs used by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Authorization endpoint the user is redirected to.
    pub authorize_url: String,
    /// Token endpoint used for code exchange and refresh.
    pub token_url: String,
    /// "Current user" API endpoint.
    pub user_url: String,
}

/// Binds a marker type to a provider configuration and profile shape.
pub trait Provider: Send + Sync + 'static {
    /// Provider configuration used by clients of this type.
    const KIND: ProviderKind;

    /// Profile returned by the provider's current user endpoint.
    type User: DeserializeOwned + Send;
}
