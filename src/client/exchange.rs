use std::sync::OnceLock;

use chrono::Utc;
use oauth2::AuthorizationCode;

use crate::{
    client::{recording_http_client, OAuthClient},
    error::Error,
    model::token::TokenSet,
    provider::Provider,
};

impl<P: Provider> OAuthClient<P> {
    /// Exchanges an authorization code for tokens.
    ///
    /// Sends `grant_type=authorization_code` with the code and redirect URL to the token
    /// endpoint, presenting client credentials the way the provider expects, and converts
    /// the response into a [`TokenSet`] whose expiry is counted from the moment the
    /// response arrived.
    ///
    /// # Arguments
    /// - `code` - Authorization code from the provider's redirect
    ///
    /// # Returns
    /// - `Ok(TokenSet)` - Access token, refresh token and absolute expiry
    /// - `Err(Error::AuthErr)` - Provider rejected the code (`invalid_grant`, `invalid_client`, ...)
    ///   or returned an unusable response
    /// - `Err(Error::TokenTransportErr)` - Request to the token endpoint failed
    pub async fn validate_authorization_code(&self, code: &str) -> Result<TokenSet, Error> {
        tracing::debug!("Exchanging authorization code with {}", P::KIND);

        let status = OnceLock::new();
        let response = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&recording_http_client(&self.http_client, &status))
            .await
            .map_err(|err| Error::from_token_request(err, status.get().copied()))?;

        let tokens = TokenSet::from_response(&response, Utc::now(), None)?;

        Ok(tokens)
    }
}
