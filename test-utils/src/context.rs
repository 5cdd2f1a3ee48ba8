use wiremock::{MockServer, Request};

use crate::{AUTHORIZE_PATH, TOKEN_PATH, USER_PATH};

/// Test context holding a running mock OAuth2 provider.
///
/// Created by `TestBuilder::build()`. The server keeps running for the lifetime of the
/// context.
pub struct TestContext {
    /// Mock server standing in for the provider.
    ///
    /// Exposed so tests can mount additional mocks after the context was built.
    pub server: MockServer,
}

impl TestContext {
    pub(crate) fn new(server: MockServer) -> Self {
        Self { server }
    }

    /// Authorization endpoint URL on the mock provider.
    pub fn authorize_url(&self) -> String {
        format!("{}{}", self.server.uri(), AUTHORIZE_PATH)
    }

    /// Token endpoint URL on the mock provider.
    pub fn token_url(&self) -> String {
        format!("{}{}", self.server.uri(), TOKEN_PATH)
    }

    /// Current user endpoint URL on the mock provider.
    pub fn user_url(&self) -> String {
        format!("{}{}", self.server.uri(), USER_PATH)
    }

    /// Requests received by the mock provider so far, in arrival order.
    ///
    /// # Returns
    /// - `Vec<Request>` - Recorded requests, empty if recording is unavailable
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
