use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::nullable;

/// Spotify user object returned by `GET /v1/me`.
///
/// `country`, `product` and `explicit_content` require the `user-read-private` scope and
/// `email` requires `user-read-email`. Optional fields keep an explicit `null` as
/// `Some(None)`. Fields not modeled here are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotifyUser {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<Option<String>>,
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
    pub explicit_content: Option<Option<ExplicitContent>>,
    pub external_urls: ExternalUrls,
    pub followers: Followers,
    pub href: String,
    pub images: Vec<Image>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub product: Option<Option<String>>,
    /// Always `"user"`
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplicitContent {
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_enabled: Option<Option<bool>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_locked: Option<Option<bool>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Followers {
    pub href: Option<String>,
    pub total: u64,
}

/// Profile image. Spotify reports `null` dimensions when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}
