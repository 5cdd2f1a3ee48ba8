use serde::Serialize;

use crate::{
    model::{discord::DiscordUser, spotify::SpotifyUser},
    provider::ProviderKind,
};

/// Profile returned by a runtime-selected provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserProfile {
    Discord(DiscordUser),
    Spotify(SpotifyUser),
}

impl UserProfile {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Discord(_) => ProviderKind::Discord,
            Self::Spotify(_) => ProviderKind::Spotify,
        }
    }

    /// Provider-assigned user id.
    pub fn id(&self) -> &str {
        match self {
            Self::Discord(user) => &user.id,
            Self::Spotify(user) => &user.id,
        }
    }
}
