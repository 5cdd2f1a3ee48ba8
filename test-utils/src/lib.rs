//! OAuth Providers Test Utils
//!
//! Provides shared testing utilities for the provider clients. This crate offers a builder
//! pattern for standing up a mock OAuth2 provider on a local port, plus JSON factories for
//! token responses, OAuth2 error payloads and provider profiles.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring the mock provider's responses
//! - **TestContext**: Running mock provider and the endpoint URLs pointing at it
//! - **factory**: JSON bodies shaped like the real providers' responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn exchanges_code() {
//!     let test = TestBuilder::new()
//!         .with_token_response(factory::token::create_token_response())
//!         .build()
//!         .await;
//!
//!     let token_url = test.token_url();
//!     // Point the client under test at `token_url`...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod factory;

/// Path of the mock authorization endpoint.
pub const AUTHORIZE_PATH: &str = "/oauth2/authorize";
/// Path of the mock token endpoint.
pub const TOKEN_PATH: &str = "/api/oauth2/token";
/// Path of the mock current user endpoint.
pub const USER_PATH: &str = "/api/users/@me";
