use chrono::{Duration, Utc};
use reqwest::StatusCode;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, ResponseTemplate,
};

use crate::{
    client::{OAuthClient, ProviderClient},
    config::{Credentials, ProviderConfig},
    error::{auth::AuthError, config::ConfigError, Error},
    model::profile::UserProfile,
    provider::{Discord, Endpoints, Provider, ProviderKind, Spotify},
};

mod exchange;

/// `base64("abc:xyz")`
const BASIC_AUTH: &str = "Basic YWJjOnh5eg==";

fn credentials() -> Credentials {
    Credentials::new("abc", "xyz", "https://app/cb")
}

/// Configuration for `kind` with every endpoint pointing at the mock provider.
fn mock_config(kind: ProviderKind, test: &TestContext) -> ProviderConfig {
    ProviderConfig::new(kind, credentials()).with_endpoints(Endpoints {
        authorize_url: test.authorize_url(),
        token_url: test.token_url(),
        user_url: test.user_url(),
    })
}

fn mock_client<P: Provider>(test: &TestContext) -> OAuthClient<P> {
    OAuthClient::from_config(mock_config(P::KIND, test)).unwrap()
}

/// Body of the first request the mock provider received.
async fn first_request_body(test: &TestContext) -> String {
    let requests = test.received_requests().await;
    String::from_utf8_lossy(&requests[0].body).into_owned()
}
