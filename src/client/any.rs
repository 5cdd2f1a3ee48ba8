use url::Url;

use crate::{
    client::OAuthClient,
    config::ProviderConfig,
    error::Error,
    model::{profile::UserProfile, token::TokenSet},
    provider::{Discord, ProviderKind, Spotify},
};

/// Client for a provider chosen at runtime.
///
/// Dispatches to the typed client for the configured [`ProviderKind`]; the only difference
/// from using [`OAuthClient`] directly is that profiles come back as [`UserProfile`].
#[derive(Debug, Clone)]
pub enum ProviderClient {
    Discord(OAuthClient<Discord>),
    Spotify(OAuthClient<Spotify>),
}

impl ProviderClient {
    /// Creates the client matching `config.kind()` with the default HTTP client.
    pub fn from_config(config: ProviderConfig) -> Result<Self, Error> {
        let client = match config.kind() {
            ProviderKind::Discord => Self::Discord(OAuthClient::from_config(config)?),
            ProviderKind::Spotify => Self::Spotify(OAuthClient::from_config(config)?),
        };

        Ok(client)
    }

    /// Creates the client matching `config.kind()` with a caller supplied HTTP client.
    pub fn with_http_client(
        config: ProviderConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, Error> {
        let client = match config.kind() {
            ProviderKind::Discord => {
                Self::Discord(OAuthClient::with_http_client(config, http_client)?)
            }
            ProviderKind::Spotify => {
                Self::Spotify(OAuthClient::with_http_client(config, http_client)?)
            }
        };

        Ok(client)
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Discord(client) => client.kind(),
            Self::Spotify(client) => client.kind(),
        }
    }

    pub fn create_authorization_url(&self, state: &str) -> Url {
        match self {
            Self::Discord(client) => client.create_authorization_url(state),
            Self::Spotify(client) => client.create_authorization_url(state),
        }
    }

    pub async fn validate_authorization_code(&self, code: &str) -> Result<TokenSet, Error> {
        match self {
            Self::Discord(client) => client.validate_authorization_code(code).await,
            Self::Spotify(client) => client.validate_authorization_code(code).await,
        }
    }

    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenSet, Error> {
        match self {
            Self::Discord(client) => client.refresh_access_token(refresh_token).await,
            Self::Spotify(client) => client.refresh_access_token(refresh_token).await,
        }
    }

    pub async fn get_user(&self, access_token: &str) -> Result<UserProfile, Error> {
        let profile = match self {
            Self::Discord(client) => UserProfile::Discord(client.get_user(access_token).await?),
            Self::Spotify(client) => UserProfile::Spotify(client.get_user(access_token).await?),
        };

        Ok(profile)
    }
}
