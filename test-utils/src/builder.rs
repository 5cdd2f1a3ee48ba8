use serde_json::Value;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{context::TestContext, TOKEN_PATH, USER_PATH};

/// Builder for creating test contexts backed by a mock OAuth2 provider.
///
/// Collects the responses the mock provider should give, then `build()` starts the server
/// and mounts them. Mocks are matched in the order they were added.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// let test = TestBuilder::new()
///     .with_token_response(factory::token::create_token_response())
///     .with_user("access-token", factory::discord_user::create_discord_user())
///     .build()
///     .await;
/// ```
pub struct TestBuilder {
    /// Mocks mounted on the server during `build()`.
    mocks: Vec<Mock>,
}

impl TestBuilder {
    /// Creates a new test builder with no responses configured.
    ///
    /// Requests that match no mock are answered with 404 by the mock server.
    pub fn new() -> Self {
        Self { mocks: Vec::new() }
    }

    /// Answers every token endpoint POST with 200 and the given JSON body.
    ///
    /// # Arguments
    /// - `body` - Token response, usually from `factory::token`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_token_response(self, body: Value) -> Self {
        self.with_token_status(200, body)
    }

    /// Answers every token endpoint POST with the given status and JSON body.
    ///
    /// Use with `factory::token::create_oauth_error` to simulate rejected grants.
    ///
    /// # Arguments
    /// - `status` - HTTP status code of the response
    /// - `body` - JSON response body
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_token_status(self, status: u16, body: Value) -> Self {
        self.with_mock(
            Mock::given(method("POST"))
                .and(path(TOKEN_PATH))
                .respond_with(ResponseTemplate::new(status).set_body_json(body)),
        )
    }

    /// Answers current user requests carrying `Bearer <access_token>` with 200 and `body`.
    ///
    /// Requests with any other token fall through to the server's 404.
    ///
    /// # Arguments
    /// - `access_token` - Token the request must present
    /// - `body` - Profile JSON, usually from `factory::discord_user` or `factory::spotify_user`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_user(self, access_token: &str, body: Value) -> Self {
        self.with_mock(
            Mock::given(method("GET"))
                .and(path(USER_PATH))
                .and(header(
                    "authorization",
                    format!("Bearer {}", access_token).as_str(),
                ))
                .respond_with(ResponseTemplate::new(200).set_body_json(body)),
        )
    }

    /// Answers every current user request with the given status and raw body.
    ///
    /// # Arguments
    /// - `status` - HTTP status code of the response
    /// - `body` - Raw response body
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_user_status(self, status: u16, body: &str) -> Self {
        self.with_mock(
            Mock::given(method("GET"))
                .and(path(USER_PATH))
                .respond_with(ResponseTemplate::new(status).set_body_string(body)),
        )
    }

    /// Adds a fully custom mock, e.g. one with request matchers and `expect()` counts.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_mock(mut self, mock: Mock) -> Self {
        self.mocks.push(mock);
        self
    }

    /// Starts the mock provider and mounts all configured responses.
    ///
    /// The server listens on a random local port and shuts down when the returned
    /// context is dropped, verifying any `expect()` counts at that point.
    ///
    /// # Returns
    /// - `TestContext` - Running mock provider
    pub async fn build(self) -> TestContext {
        let server = MockServer::start().await;

        for mock in self.mocks {
            server.register(mock).await;
        }

        TestContext::new(server)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
