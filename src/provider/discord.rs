use crate::{
    model::discord::DiscordUser,
    provider::{Endpoints, Provider, ProviderKind},
};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

/// `identify` is required for `/users/@me` to answer.
pub(crate) const FORCED_SCOPES: &[&str] = &["identify"];

pub(crate) fn endpoints() -> Endpoints {
    Endpoints {
        authorize_url: DISCORD_AUTH_URL.to_string(),
        token_url: DISCORD_TOKEN_URL.to_string(),
        user_url: DISCORD_USER_URL.to_string(),
    }
}

/// Discord OAuth2 provider.
#[derive(Debug, Clone, Copy)]
pub struct Discord;

impl Provider for Discord {
    const KIND: ProviderKind = ProviderKind::Discord;
    type User = DiscordUser;
}
