use crate::{
    model::spotify::SpotifyUser,
    provider::{Endpoints, Provider, ProviderKind},
};

const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SPOTIFY_USER_URL: &str = "https://api.spotify.com/v1/me";

pub(crate) fn endpoints() -> Endpoints {
    Endpoints {
        authorize_url: SPOTIFY_AUTH_URL.to_string(),
        token_url: SPOTIFY_TOKEN_URL.to_string(),
        user_url: SPOTIFY_USER_URL.to_string(),
    }
}

/// Spotify OAuth2 provider.
#[derive(Debug, Clone, Copy)]
pub struct Spotify;

impl Provider for Spotify {
    const KIND: ProviderKind = ProviderKind::Spotify;
    type User = SpotifyUser;
}
