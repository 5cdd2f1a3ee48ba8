//! Token endpoint response factory.

use serde_json::{json, Map, Value};

use crate::factory::helpers::next_id;

/// Factory for token endpoint success bodies.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::token::TokenResponseFactory;
///
/// let body = TokenResponseFactory::new()
///     .refresh_token("rotated")
///     .expires_in(3600)
///     .build();
/// ```
pub struct TokenResponseFactory {
    access_token: String,
    token_type: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<u64>,
    scope: Option<String>,
}

impl TokenResponseFactory {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - access_token: `"access_{id}"` where id is auto-incremented
    /// - token_type: `"Bearer"`
    /// - refresh_token: `"refresh_{id}"`
    /// - expires_in: `604800`
    /// - scope: `"identify"`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            access_token: format!("access_{}", id),
            token_type: Some("Bearer".to_string()),
            refresh_token: Some(format!("refresh_{}", id)),
            expires_in: Some(604800),
            scope: Some("identify".to_string()),
        }
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    /// Omits `token_type`, leaving only the fields the clients consume.
    pub fn without_token_type(mut self) -> Self {
        self.token_type = None;
        self
    }

    pub fn refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Omits `refresh_token`, as providers may do on refresh.
    pub fn without_refresh_token(mut self) -> Self {
        self.refresh_token = None;
        self
    }

    pub fn expires_in(mut self, expires_in: u64) -> Self {
        self.expires_in = Some(expires_in);
        self
    }

    pub fn without_expires_in(mut self) -> Self {
        self.expires_in = None;
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Builds the JSON body.
    ///
    /// # Returns
    /// - `Value` - Object with the configured fields
    pub fn build(self) -> Value {
        let mut body = Map::new();
        body.insert("access_token".to_string(), json!(self.access_token));
        if let Some(token_type) = self.token_type {
            body.insert("token_type".to_string(), json!(token_type));
        }
        if let Some(refresh_token) = self.refresh_token {
            body.insert("refresh_token".to_string(), json!(refresh_token));
        }
        if let Some(expires_in) = self.expires_in {
            body.insert("expires_in".to_string(), json!(expires_in));
        }
        if let Some(scope) = self.scope {
            body.insert("scope".to_string(), json!(scope));
        }
        Value::Object(body)
    }
}

impl Default for TokenResponseFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a token response with default values.
pub fn create_token_response() -> Value {
    TokenResponseFactory::new().build()
}

/// Creates a token response with the given tokens and lifetime.
pub fn create_token_response_with(access_token: &str, refresh_token: &str, expires_in: u64) -> Value {
    TokenResponseFactory::new()
        .access_token(access_token)
        .refresh_token(refresh_token)
        .expires_in(expires_in)
        .build()
}

/// Creates a standard OAuth2 error payload (RFC 6749 section 5.2).
///
/// # Arguments
/// - `code` - OAuth2 error code, e.g. `"invalid_grant"`
/// - `description` - Optional `error_description`
pub fn create_oauth_error(code: &str, description: Option<&str>) -> Value {
    match description {
        Some(description) => json!({ "error": code, "error_description": description }),
        None => json!({ "error": code }),
    }
}
