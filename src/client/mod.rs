//! OAuth2 authorization-code clients.
//!
//! [`OAuthClient`] is a single client type parameterized by a [`Provider`] marker. It wraps
//! the `oauth2` crate's client, which builds the authorization URL and performs the token
//! endpoint requests, and adds the provider's forced scopes, token normalization into
//! [`TokenSet`](crate::model::token::TokenSet), and the current user request.
//!
//! Each operation lives in its own submodule:
//!
//! - `authorize` - Authorization URL construction
//! - `exchange` - Authorization code exchange
//! - `refresh` - Access token refresh
//! - `user` - Current user profile fetch
//!
//! [`ProviderClient`] selects between provider clients at runtime.

use std::{future::Future, marker::PhantomData, pin::Pin, sync::OnceLock};

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    AsyncHttpClient, AuthUrl, Client, ClientId, ClientSecret, EmptyExtraTokenFields,
    EndpointNotSet, EndpointSet, HttpClientError, HttpRequest, HttpResponse, RedirectUrl,
    RevocationErrorResponseType, StandardErrorResponse, StandardRevocableToken,
    StandardTokenIntrospectionResponse, TokenUrl,
};
use reqwest::StatusCode;

use crate::{
    config::{Credentials, ProviderConfig},
    error::{config::ConfigError, Error},
    model::token::ProviderTokenResponse,
    provider::{Provider, ProviderKind},
};

pub mod any;
pub mod authorize;
pub mod exchange;
pub mod refresh;
pub mod user;

#[cfg(test)]
mod test;

pub use any::ProviderClient;

/// Type alias for the OAuth2 client with authorization and token endpoints configured.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    ProviderTokenResponse,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// OAuth2 client for one provider.
///
/// Configuration is fixed at construction. Every operation takes `&self` and issues one
/// independent request, so a client can be shared across tasks.
#[derive(Debug, Clone)]
pub struct OAuthClient<P: Provider> {
    /// Provider configuration the client was built from.
    config: ProviderConfig,

    /// OAuth2 client performing authorization URL construction and token requests.
    oauth_client: OAuth2Client,

    /// HTTP client for token and API requests.
    ///
    /// Connection pooling and timeouts are configured here by the caller.
    http_client: reqwest::Client,

    _provider: PhantomData<P>,
}

impl<P: Provider> OAuthClient<P> {
    /// Creates a client with the provider's published endpoints and no extra scopes.
    ///
    /// # Arguments
    /// - `credentials` - Client id, client secret and redirect URL
    ///
    /// # Returns
    /// - `Ok(OAuthClient)` - Ready to use client
    /// - `Err(Error::ConfigErr)` - Credentials are empty or the redirect URL is malformed
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::from_config(ProviderConfig::new(P::KIND, credentials))
    }

    /// Creates a client from a full configuration using the default HTTP client.
    pub fn from_config(config: ProviderConfig) -> Result<Self, Error> {
        let http_client = setup_reqwest_client()?;

        Self::with_http_client(config, http_client)
    }

    /// Creates a client from a full configuration and a caller supplied HTTP client.
    ///
    /// The HTTP client should not follow redirects; see [`setup_reqwest_client`].
    ///
    /// # Arguments
    /// - `config` - Configuration whose kind matches `P`
    /// - `http_client` - Client used for token and API requests
    ///
    /// # Returns
    /// - `Ok(OAuthClient)` - Ready to use client
    /// - `Err(Error::ConfigErr)` - Mismatched provider, empty credentials or malformed URL
    pub fn with_http_client(
        config: ProviderConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, Error> {
        if config.kind() != P::KIND {
            return Err(ConfigError::ProviderMismatch {
                expected: P::KIND,
                actual: config.kind(),
            }
            .into());
        }
        config.validate()?;

        let oauth_client = setup_oauth_client(&config)?;

        Ok(Self {
            config,
            oauth_client,
            http_client,
            _provider: PhantomData,
        })
    }

    pub fn kind(&self) -> ProviderKind {
        P::KIND
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Effective scopes requested by [`create_authorization_url`](Self::create_authorization_url).
    pub fn scopes(&self) -> Vec<String> {
        self.config.effective_scopes()
    }
}

/// Builds the OAuth2 client for a configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token and redirect URLs set
/// - `Err(ConfigError::InvalidUrl)` - One of the URLs failed to parse
fn setup_oauth_client(config: &ProviderConfig) -> Result<OAuth2Client, ConfigError> {
    let endpoints = config.endpoints();
    let credentials = config.credentials();

    let auth_url =
        AuthUrl::new(endpoints.authorize_url.clone()).map_err(|source| ConfigError::InvalidUrl {
            field: "authorize_url",
            value: endpoints.authorize_url.clone(),
            source,
        })?;
    let token_url =
        TokenUrl::new(endpoints.token_url.clone()).map_err(|source| ConfigError::InvalidUrl {
            field: "token_url",
            value: endpoints.token_url.clone(),
            source,
        })?;
    let redirect_url = RedirectUrl::new(credentials.redirect_url.clone()).map_err(|source| {
        ConfigError::InvalidUrl {
            field: "redirect_url",
            value: credentials.redirect_url.clone(),
            source,
        }
    })?;
    url::Url::parse(&endpoints.user_url).map_err(|source| ConfigError::InvalidUrl {
        field: "user_url",
        value: endpoints.user_url.clone(),
        source,
    })?;

    let client: OAuth2Client = Client::new(ClientId::new(credentials.client_id.clone()))
        .set_client_secret(ClientSecret::new(credentials.client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url)
        .set_auth_type(config.auth_mode().into());

    Ok(client)
}

/// Future returned by the token request transport.
type TokenHttpFuture<'a> = Pin<
    Box<dyn Future<Output = Result<HttpResponse, HttpClientError<reqwest::Error>>> + Send + Sync + 'a>,
>;

/// Wraps `http_client` for a token request, storing the response status in `status`.
///
/// The OAuth2 client reports token endpoint failures without their HTTP status; the
/// recorded one is attached to the resulting error by [`Error::from_token_request`].
pub(crate) fn recording_http_client<'a>(
    http_client: &'a reqwest::Client,
    status: &'a OnceLock<StatusCode>,
) -> impl Fn(HttpRequest) -> TokenHttpFuture<'a> + 'a {
    move |request: HttpRequest| -> TokenHttpFuture<'a> {
        Box::pin(async move {
            let response = AsyncHttpClient::call(http_client, request).await?;
            let _ = status.set(response.status());

            Ok::<_, HttpClientError<reqwest::Error>>(response)
        })
    }
}

/// Builds the default HTTP client.
///
/// Redirects are disabled: token and user endpoints answer directly, and following a
/// redirect would forward credentials to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client without redirect following
/// - `Err(Error::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, Error> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}
