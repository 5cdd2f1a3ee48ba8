use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::nullable;

/// Discord user object returned by `GET /users/@me`.
///
/// Optional fields depend on the granted scopes; `email` and `verified` require the
/// `email` scope. An optional field is `None` when absent and `Some(None)` when sent as
/// `null`. Fields not modeled here are kept in `extra` so the provider's body is returned
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordUser {
    /// Snowflake user id
    pub id: String,
    pub username: String,
    /// `"0"` for users migrated to unique usernames
    pub discriminator: String,
    pub global_name: Option<String>,
    /// Avatar hash
    pub avatar: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub bot: Option<Option<bool>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub system: Option<Option<bool>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub mfa_enabled: Option<Option<bool>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub verified: Option<Option<bool>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub flags: Option<Option<u64>>,
    /// Banner hash
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub banner: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub accent_color: Option<Option<u32>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub premium_type: Option<Option<u8>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub public_flags: Option<Option<u64>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub locale: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_decoration: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
