//! Factory methods for creating provider response bodies.
//!
//! Each factory returns a `serde_json::Value` shaped like the real provider's response,
//! with sensible defaults and a builder for overriding individual fields.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let body = factory::token::create_token_response();
//! let user = factory::discord_user::create_discord_user();
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::token::TokenResponseFactory;
//!
//! let body = TokenResponseFactory::new()
//!     .access_token("access")
//!     .without_refresh_token()
//!     .expires_in(60)
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `token` - Token endpoint success and OAuth2 error payloads
//! - `discord_user` - Discord `/users/@me` bodies
//! - `spotify_user` - Spotify `/v1/me` bodies
//! - `helpers` - Unique id generation

pub mod discord_user;
pub mod helpers;
pub mod spotify_user;
pub mod token;
