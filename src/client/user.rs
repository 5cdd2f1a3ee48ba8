use reqwest::header::AUTHORIZATION;

use crate::{
    client::OAuthClient,
    error::{auth::AuthError, Error},
    provider::Provider,
};

impl<P: Provider> OAuthClient<P> {
    /// Retrieves the profile of the user the access token was issued for.
    ///
    /// Calls the provider's current user endpoint with a bearer token and deserializes the
    /// body into the provider's profile type. Nothing is retried; on a 401 the caller is
    /// expected to refresh the token and call again.
    ///
    /// # Arguments
    /// - `access_token` - Access token from a [`TokenSet`](crate::model::token::TokenSet)
    ///
    /// # Returns
    /// - `Ok(P::User)` - Profile as returned by the provider
    /// - `Err(Error::AuthErr)` - Non-success status, with status and body
    /// - `Err(Error::ReqwestErr)` - Request failed or the body did not match the profile type
    pub async fn get_user(&self, access_token: &str) -> Result<P::User, Error> {
        tracing::debug!("Fetching current user from {}", P::KIND);

        let response = self
            .http_client
            .get(&self.config.endpoints().user_url)
            .header(AUTHORIZATION, format!("Bearer {}", access_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::debug!("{} user endpoint responded with {}", P::KIND, status);

            return Err(AuthError::UnexpectedStatus { status, body }.into());
        }

        let user = response.json::<P::User>().await?;

        Ok(user)
    }
}
