use std::sync::OnceLock;

use chrono::Utc;
use oauth2::RefreshToken;

use crate::{
    client::{recording_http_client, OAuthClient},
    error::Error,
    model::token::TokenSet,
    provider::Provider,
};

impl<P: Provider> OAuthClient<P> {
    /// Requests a new access token with a refresh token.
    ///
    /// Sends `grant_type=refresh_token` to the token endpoint with the same credential
    /// placement as the code exchange. Providers may omit a new refresh token from the
    /// response, in which case the supplied refresh token stays valid and is returned in
    /// the resulting [`TokenSet`].
    ///
    /// # Arguments
    /// - `refresh_token` - Refresh token from a previous exchange or refresh
    ///
    /// # Returns
    /// - `Ok(TokenSet)` - New access token, current refresh token and absolute expiry
    /// - `Err(Error::AuthErr)` - Provider rejected the refresh token or returned an unusable response
    /// - `Err(Error::TokenTransportErr)` - Request to the token endpoint failed
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenSet, Error> {
        tracing::debug!("Refreshing access token with {}", P::KIND);

        let refresh_token = RefreshToken::new(refresh_token.to_string());
        let status = OnceLock::new();
        let response = self
            .oauth_client
            .exchange_refresh_token(&refresh_token)
            .request_async(&recording_http_client(&self.http_client, &status))
            .await
            .map_err(|err| Error::from_token_request(err, status.get().copied()))?;

        let tokens =
            TokenSet::from_response(&response, Utc::now(), Some(refresh_token.secret().as_str()))?;

        Ok(tokens)
    }
}
