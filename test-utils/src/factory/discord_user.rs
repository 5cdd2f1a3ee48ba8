//! Discord `/users/@me` body factory.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for Discord user objects.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::discord_user::DiscordUserFactory;
///
/// let user = DiscordUserFactory::new()
///     .username("nelly")
///     .email("nelly@example.com")
///     .build();
/// ```
pub struct DiscordUserFactory {
    id: String,
    username: String,
    global_name: Option<String>,
    avatar: Option<String>,
    email: Option<String>,
}

impl DiscordUserFactory {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - id: snowflake-like string ending in an auto-incremented id
    /// - username: `"user_{id}"`
    /// - global_name: `"User {id}"`
    /// - avatar: fixed avatar hash
    /// - email: none
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id: format!("80351110224678{:04}", id % 10000),
            username: format!("user_{}", id),
            global_name: Some(format!("User {}", id)),
            avatar: Some("8342729096ea3675442027381ff50dfe".to_string()),
            email: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn global_name(mut self, global_name: Option<&str>) -> Self {
        self.global_name = global_name.map(str::to_string);
        self
    }

    pub fn avatar(mut self, avatar: Option<&str>) -> Self {
        self.avatar = avatar.map(str::to_string);
        self
    }

    /// Adds `email` and `verified`, as granted by the `email` scope.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds the JSON body.
    ///
    /// Includes `avatar_decoration_data` and `clan`, which are not modeled by the typed
    /// profile and exercise pass-through of unknown fields.
    pub fn build(self) -> Value {
        let mut user = json!({
            "id": self.id,
            "username": self.username,
            "discriminator": "0",
            "global_name": self.global_name,
            "avatar": self.avatar,
            "mfa_enabled": true,
            "locale": "en-US",
            "flags": 0,
            "premium_type": 0,
            "public_flags": 0,
            "accent_color": 5793266,
            "avatar_decoration_data": { "asset": "a_d3f1", "sku_id": "1144058522808614923" },
            "clan": null
        });
        if let Some(email) = self.email {
            user["email"] = json!(email);
            user["verified"] = json!(true);
        }
        user
    }
}

impl Default for DiscordUserFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a Discord user object with default values.
pub fn create_discord_user() -> Value {
    DiscordUserFactory::new().build()
}
