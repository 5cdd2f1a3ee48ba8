use super::*;

/// Tests exchanging a code with Discord.
///
/// Verifies that the code, grant type, redirect URL and both client credentials are sent
/// in the form body, and that the response is normalized into a `TokenSet`.
///
/// Expected: Ok with expiry equal to response time + expires_in
#[tokio::test]
async fn discord_exchange_sends_credentials_in_body() {
    let test = TestBuilder::new()
        .with_mock(
            Mock::given(method("POST"))
                .and(path(test_utils::TOKEN_PATH))
                .and(body_string_contains("grant_type=authorization_code"))
                .and(body_string_contains("code=the-code"))
                .and(body_string_contains("redirect_uri=https%3A%2F%2Fapp%2Fcb"))
                .and(body_string_contains("client_id=abc"))
                .and(body_string_contains("client_secret=xyz"))
                .respond_with(ResponseTemplate::new(200).set_body_json(
                    factory::token::create_token_response_with("access", "refresh", 604800),
                ))
                .expect(1),
        )
        .build()
        .await;
    let client = mock_client::<Discord>(&test);

    let before = Utc::now();
    let tokens = client.validate_authorization_code("the-code").await.unwrap();
    let after = Utc::now();

    assert_eq!(tokens.access_token, "access");
    assert_eq!(tokens.refresh_token, "refresh");
    assert!(tokens.access_token_expires_at >= before + Duration::seconds(604800));
    assert!(tokens.access_token_expires_at <= after + Duration::seconds(604800));
}

/// Tests exchanging a code with Spotify.
///
/// Verifies that client credentials are sent as HTTP Basic auth and not in the body.
///
/// Expected: Ok with tokens from the response
#[tokio::test]
async fn spotify_exchange_uses_basic_auth() {
    let test = TestBuilder::new()
        .with_mock(
            Mock::given(method("POST"))
                .and(path(test_utils::TOKEN_PATH))
                .and(header("authorization", BASIC_AUTH))
                .and(body_string_contains("grant_type=authorization_code"))
                .and(body_string_contains("code=spotify-code"))
                .respond_with(ResponseTemplate::new(200).set_body_json(
                    factory::token::create_token_response_with("s-access", "s-refresh", 3600),
                ))
                .expect(1),
        )
        .build()
        .await;
    let client = mock_client::<Spotify>(&test);

    let tokens = client
        .validate_authorization_code("spotify-code")
        .await
        .unwrap();

    assert_eq!(tokens.access_token, "s-access");
    assert_eq!(tokens.refresh_token, "s-refresh");
    assert!(!first_request_body(&test).await.contains("client_secret"));
}

/// Tests a code the provider rejects.
///
/// Expected: Err(AuthErr(ProviderRejected)) carrying the provider's error code and description
#[tokio::test]
async fn surfaces_invalid_grant() {
    let test = TestBuilder::new()
        .with_token_status(
            400,
            factory::token::create_oauth_error(
                "invalid_grant",
                Some("Invalid \"code\" in request."),
            ),
        )
        .build()
        .await;
    let client = mock_client::<Discord>(&test);

    let err = client
        .validate_authorization_code("expired-code")
        .await
        .unwrap_err();

    let auth_err = err.as_auth_error().unwrap();
    assert_eq!(auth_err.provider_error_code(), Some("invalid_grant"));
    assert_eq!(auth_err.status(), Some(StatusCode::BAD_REQUEST));
    match auth_err {
        AuthError::ProviderRejected { description, .. } => {
            assert_eq!(description.as_deref(), Some("Invalid \"code\" in request."));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("invalid_grant"));
}

/// Tests wrong client credentials.
///
/// Expected: Err(AuthErr(ProviderRejected)) with code invalid_client
#[tokio::test]
async fn surfaces_invalid_client() {
    let test = TestBuilder::new()
        .with_token_status(401, factory::token::create_oauth_error("invalid_client", None))
        .build()
        .await;
    let client = mock_client::<Spotify>(&test);

    let err = client.validate_authorization_code("code").await.unwrap_err();

    assert_eq!(
        err.as_auth_error().and_then(AuthError::provider_error_code),
        Some("invalid_client")
    );
}

/// Tests an error body that is not an OAuth2 error payload, such as a rate limit notice.
///
/// Expected: Err(AuthErr(MalformedTokenResponse)) keeping the raw body and the 429 status
#[tokio::test]
async fn keeps_non_oauth_error_body() {
    let test = TestBuilder::new()
        .with_token_status(
            429,
            serde_json::json!({ "message": "You are being rate limited.", "retry_after": 1.5 }),
        )
        .build()
        .await;
    let client = mock_client::<Discord>(&test);

    let err = client.validate_authorization_code("code").await.unwrap_err();

    assert!(err.as_auth_error().unwrap().is_rate_limited());
    match err {
        Error::AuthErr(AuthError::MalformedTokenResponse { body, .. }) => {
            assert!(body.contains("You are being rate limited."));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// Tests a rate limited token request answered with an empty body.
///
/// Expected: Err(AuthErr(TokenRequestFailed)) reporting status 429
#[tokio::test]
async fn reports_status_of_empty_error_response() {
    let test = TestBuilder::new()
        .with_mock(
            Mock::given(method("POST"))
                .and(path(test_utils::TOKEN_PATH))
                .respond_with(ResponseTemplate::new(429))
                .expect(1),
        )
        .build()
        .await;
    let client = mock_client::<Spotify>(&test);

    let err = client.validate_authorization_code("code").await.unwrap_err();

    let auth_err = err.as_auth_error().unwrap();
    assert!(matches!(auth_err, AuthError::TokenRequestFailed { .. }));
    assert_eq!(auth_err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
    assert!(auth_err.is_rate_limited());
}

/// Tests a token response carrying only access_token, refresh_token and expires_in.
///
/// Expected: Ok, a missing token_type is accepted
#[tokio::test]
async fn accepts_response_without_token_type() {
    let test = TestBuilder::new()
        .with_token_response(serde_json::json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_in": 3600,
        }))
        .build()
        .await;
    let client = mock_client::<Discord>(&test);

    let before = Utc::now();
    let tokens = client.validate_authorization_code("code").await.unwrap();

    assert_eq!(tokens.access_token, "a");
    assert_eq!(tokens.refresh_token, "r");
    assert!(tokens.access_token_expires_at >= before + Duration::seconds(3600));
}

/// Tests a successful response without a refresh token.
///
/// Expected: Err(AuthErr(MissingTokenField("refresh_token")))
#[tokio::test]
async fn requires_refresh_token_on_exchange() {
    let test = TestBuilder::new()
        .with_token_response(
            factory::token::TokenResponseFactory::new()
                .without_refresh_token()
                .build(),
        )
        .build()
        .await;
    let client = mock_client::<Discord>(&test);

    let err = client.validate_authorization_code("code").await.unwrap_err();

    assert!(matches!(
        err,
        Error::AuthErr(AuthError::MissingTokenField("refresh_token"))
    ));
}

/// Tests a token endpoint that cannot be reached.
///
/// Expected: Err(TokenTransportErr)
#[tokio::test]
async fn propagates_transport_errors() {
    // Reserve a local port and release it so connections to it are refused
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let mut endpoints = ProviderKind::Discord.default_endpoints();
    endpoints.token_url = format!("http://127.0.0.1:{}/api/oauth2/token", port);
    let config = ProviderConfig::new(ProviderKind::Discord, credentials()).with_endpoints(endpoints);
    let client = OAuthClient::<Discord>::from_config(config).unwrap();

    let err = client.validate_authorization_code("code").await.unwrap_err();

    assert!(matches!(err, Error::TokenTransportErr(_)));
}
