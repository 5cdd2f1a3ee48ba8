//! OAuth2 authorization-code clients for Discord and Spotify.
//!
//! Each provider is served by the same generic [`OAuthClient`], configured with the
//! provider's endpoints, forced scopes and credential placement. A client exposes four
//! operations:
//!
//! - [`create_authorization_url`](OAuthClient::create_authorization_url) - URL to redirect the user to
//! - [`validate_authorization_code`](OAuthClient::validate_authorization_code) - Code for tokens
//! - [`refresh_access_token`](OAuthClient::refresh_access_token) - New access token
//! - [`get_user`](OAuthClient::get_user) - Profile of the token's user
//!
//! The OAuth2 protocol requests themselves are performed by the `oauth2` crate over
//! `reqwest`. Nothing is persisted, retried or cached; tokens belong to the caller.
//!
//! ```rust,no_run
//! use oauth_providers::{config::Credentials, provider::Discord, OAuthClient};
//!
//! # async fn run() -> Result<(), oauth_providers::error::Error> {
//! let discord = OAuthClient::<Discord>::new(Credentials::new(
//!     "client-id",
//!     "client-secret",
//!     "https://example.com/callback",
//! ))?;
//!
//! let url = discord.create_authorization_url("state");
//! // Redirect the user to `url`, then with the returned code:
//! let tokens = discord.validate_authorization_code("code").await?;
//! let user = discord.get_user(&tokens.access_token).await?;
//! # let _ = (url, user);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use client::{OAuthClient, ProviderClient};
