//! Spotify `/v1/me` body factory.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for Spotify current user profiles.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::spotify_user::SpotifyUserFactory;
///
/// let user = SpotifyUserFactory::new().display_name("Nelly").private().build();
/// ```
pub struct SpotifyUserFactory {
    id: String,
    display_name: Option<String>,
    private: bool,
}

impl SpotifyUserFactory {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - id: `"user{id}"` where id is auto-incremented
    /// - display_name: `"User {id}"`
    /// - private fields (`country`, `email`, `product`, `explicit_content`): omitted
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id: format!("user{}", id),
            display_name: Some(format!("User {}", id)),
            private: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Includes the fields granted by `user-read-private` and `user-read-email`.
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Builds the JSON body.
    pub fn build(self) -> Value {
        let mut user = json!({
            "id": self.id,
            "display_name": self.display_name,
            "external_urls": { "spotify": format!("https://open.spotify.com/user/{}", self.id) },
            "followers": { "href": null, "total": 12 },
            "href": format!("https://api.spotify.com/v1/users/{}", self.id),
            "images": [
                { "url": "https://i.scdn.co/image/ab67757000003b82", "height": 64, "width": 64 },
                { "url": "https://i.scdn.co/image/ab6775700000ee85", "height": null, "width": null }
            ],
            "type": "user",
            "uri": format!("spotify:user:{}", self.id)
        });
        if self.private {
            user["country"] = json!("SE");
            user["email"] = json!(format!("{}@example.com", self.id));
            user["product"] = json!("premium");
            user["explicit_content"] = json!({ "filter_enabled": false, "filter_locked": false });
        }
        user
    }
}

impl Default for SpotifyUserFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a Spotify user profile with default values.
pub fn create_spotify_user() -> Value {
    SpotifyUserFactory::new().build()
}
