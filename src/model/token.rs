use std::fmt;

use chrono::{DateTime, Duration, Utc};
use oauth2::{basic::BasicTokenType, AccessToken, RefreshToken, Scope, TokenResponse};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::auth::AuthError;

/// Token endpoint response body as the providers send it.
///
/// Only `access_token`, `refresh_token` and `expires_in` are consumed. `token_type` may be
/// absent and then counts as `Bearer`; other fields such as `scope` are ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderTokenResponse {
    access_token: AccessToken,
    #[serde(
        default = "bearer_token_type",
        deserialize_with = "deserialize_token_type"
    )]
    token_type: BasicTokenType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<RefreshToken>,
}

fn bearer_token_type() -> BasicTokenType {
    BasicTokenType::Bearer
}

/// Token types are matched case-insensitively; a `null` type counts as `Bearer`.
fn deserialize_token_type<'de, D>(deserializer: D) -> Result<BasicTokenType, D::Error>
where
    D: Deserializer<'de>,
{
    let token_type = Option::<String>::deserialize(deserializer)?;

    Ok(match token_type {
        None => BasicTokenType::Bearer,
        Some(t) if t.eq_ignore_ascii_case("bearer") => BasicTokenType::Bearer,
        Some(t) if t.eq_ignore_ascii_case("mac") => BasicTokenType::Mac,
        Some(t) => BasicTokenType::Extension(t),
    })
}

impl TokenResponse for ProviderTokenResponse {
    type TokenType = BasicTokenType;

    fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    fn token_type(&self) -> &BasicTokenType {
        &self.token_type
    }

    fn expires_in(&self) -> Option<std::time::Duration> {
        self.expires_in.map(std::time::Duration::from_secs)
    }

    fn refresh_token(&self) -> Option<&RefreshToken> {
        self.refresh_token.as_ref()
    }

    // Granted scopes are not read.
    fn scopes(&self) -> Option<&Vec<Scope>> {
        None
    }
}

/// Tokens minted by a provider's token endpoint.
///
/// The expiry is computed once from the response's relative `expires_in` at the moment the
/// response was received. Ownership belongs to the caller; nothing in this crate stores or
/// mutates a `TokenSet` after returning it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_at: DateTime<Utc>,
}

impl TokenSet {
    /// Builds a token set from a token endpoint response.
    ///
    /// # Arguments
    /// - `response` - Parsed token endpoint response
    /// - `issued_at` - Time the response was received
    /// - `previous_refresh_token` - Refresh token to keep when the response carries none;
    ///   `None` makes a missing refresh token an error
    ///
    /// # Returns
    /// - `Ok(TokenSet)` - Normalized tokens
    /// - `Err(AuthError::MissingTokenField)` - `expires_in` or a required `refresh_token` is absent
    /// - `Err(AuthError::InvalidExpiry)` - `expires_in` overflows a timestamp
    pub(crate) fn from_response(
        response: &ProviderTokenResponse,
        issued_at: DateTime<Utc>,
        previous_refresh_token: Option<&str>,
    ) -> Result<Self, AuthError> {
        let refresh_token = match (response.refresh_token(), previous_refresh_token) {
            (Some(token), _) => token.secret().clone(),
            (None, Some(previous)) => {
                tracing::debug!("Token response carried no refresh token, keeping the current one");
                previous.to_string()
            }
            (None, None) => return Err(AuthError::MissingTokenField("refresh_token")),
        };

        let expires_in = response
            .expires_in()
            .ok_or(AuthError::MissingTokenField("expires_in"))?;
        let access_token_expires_at = Duration::from_std(expires_in)
            .ok()
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or(AuthError::InvalidExpiry(expires_in.as_secs()))?;

        Ok(Self {
            access_token: response.access_token().secret().clone(),
            refresh_token,
            access_token_expires_at,
        })
    }

    /// Whether the access token is expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.access_token_expires_at
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("access_token", &"[redacted]")
            .field("refresh_token", &"[redacted]")
            .field("access_token_expires_at", &self.access_token_expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(refresh_token: Option<&str>, expires_in: Option<u64>) -> ProviderTokenResponse {
        let mut body = json!({ "access_token": "access", "token_type": "Bearer" });
        if let Some(refresh_token) = refresh_token {
            body["refresh_token"] = json!(refresh_token);
        }
        if let Some(expires_in) = expires_in {
            body["expires_in"] = json!(expires_in);
        }

        serde_json::from_value(body).unwrap()
    }

    /// Expected: a body without token_type parses as a Bearer token
    #[test]
    fn token_type_defaults_to_bearer() {
        let response: ProviderTokenResponse = serde_json::from_value(json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_in": 3600,
        }))
        .unwrap();

        assert_eq!(response.token_type(), &BasicTokenType::Bearer);
        assert_eq!(response.access_token().secret(), "a");
        assert_eq!(response.refresh_token().unwrap().secret(), "r");
        assert_eq!(
            response.expires_in(),
            Some(std::time::Duration::from_secs(3600))
        );
    }

    /// Expected: token_type is matched case-insensitively and unknown types are kept
    #[test]
    fn parses_token_type_case_insensitively() {
        let lower: ProviderTokenResponse =
            serde_json::from_value(json!({ "access_token": "a", "token_type": "bearer" })).unwrap();
        let other: ProviderTokenResponse =
            serde_json::from_value(json!({ "access_token": "a", "token_type": "DPoP" })).unwrap();

        assert_eq!(lower.token_type(), &BasicTokenType::Bearer);
        assert_eq!(
            other.token_type(),
            &BasicTokenType::Extension("DPoP".to_string())
        );
    }

    /// Expected: expiry is exactly issued_at + expires_in
    #[test]
    fn computes_expiry_from_issue_time() {
        let issued_at = Utc::now();
        let tokens = TokenSet::from_response(&response(Some("refresh"), Some(604800)), issued_at, None)
            .unwrap();

        assert_eq!(tokens.access_token, "access");
        assert_eq!(tokens.refresh_token, "refresh");
        assert_eq!(
            tokens.access_token_expires_at,
            issued_at + Duration::seconds(604800)
        );
        assert!(!tokens.is_expired_at(issued_at));
        assert!(tokens.is_expired_at(issued_at + Duration::seconds(604800)));
    }

    /// Expected: Err(MissingTokenField) when a code exchange returns no refresh token
    #[test]
    fn requires_refresh_token_without_fallback() {
        let result = TokenSet::from_response(&response(None, Some(3600)), Utc::now(), None);

        assert!(matches!(
            result,
            Err(AuthError::MissingTokenField("refresh_token"))
        ));
    }

    /// Expected: the previous refresh token is kept when none is returned
    #[test]
    fn keeps_previous_refresh_token() {
        let tokens =
            TokenSet::from_response(&response(None, Some(3600)), Utc::now(), Some("old")).unwrap();

        assert_eq!(tokens.refresh_token, "old");
    }

    /// Expected: a newly returned refresh token wins over the previous one
    #[test]
    fn prefers_rotated_refresh_token() {
        let tokens =
            TokenSet::from_response(&response(Some("new"), Some(3600)), Utc::now(), Some("old"))
                .unwrap();

        assert_eq!(tokens.refresh_token, "new");
    }

    /// Expected: Err(MissingTokenField) when expires_in is absent
    #[test]
    fn requires_expires_in() {
        let result = TokenSet::from_response(&response(Some("refresh"), None), Utc::now(), None);

        assert!(matches!(
            result,
            Err(AuthError::MissingTokenField("expires_in"))
        ));
    }

    #[test]
    fn debug_redacts_tokens() {
        let tokens =
            TokenSet::from_response(&response(Some("refresh"), Some(60)), Utc::now(), None).unwrap();
        let debug = format!("{:?}", tokens);

        assert!(!debug.contains("access\""));
        assert!(!debug.contains("refresh\""));
        assert!(debug.contains("[redacted]"));
    }
}
