use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::{client::OAuthClient, provider::Provider};

impl<P: Provider> OAuthClient<P> {
    /// Generates the provider's authorization URL.
    ///
    /// Builds a URL to the provider's consent screen with `response_type=code`, the client
    /// id, the caller supplied `state`, the redirect URL and the effective scopes joined by
    /// spaces. The `scope` parameter is omitted when no scope is requested. No request is
    /// made and the result depends only on the configuration and `state`.
    ///
    /// Generating and checking `state` for CSRF protection is up to the caller.
    ///
    /// # Arguments
    /// - `state` - Opaque value the provider echoes back on the redirect
    ///
    /// # Returns
    /// - `Url` - Authorization URL to redirect the user to
    pub fn create_authorization_url(&self, state: &str) -> Url {
        let (authorize_url, _state) = self
            .oauth_client
            .authorize_url(|| CsrfToken::new(state.to_string()))
            .add_scopes(self.scopes().into_iter().map(Scope::new))
            .url();

        authorize_url
    }
}
