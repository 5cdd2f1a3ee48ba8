//! Client credentials and per-client provider configuration.

use crate::{
    error::config::ConfigError,
    provider::{AuthMode, Endpoints, ProviderKind},
};

/// Credentials issued by the provider when the application was registered.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_url: redirect_url.into(),
        }
    }

    /// Loads the credentials of `kind` from the environment.
    ///
    /// Reads `<PREFIX>_CLIENT_ID`, `<PREFIX>_CLIENT_SECRET` and `<PREFIX>_REDIRECT_URL`
    /// where the prefix is `DISCORD` or `SPOTIFY`.
    ///
    /// # Returns
    /// - `Ok(Credentials)` - All three variables were set
    /// - `Err(ConfigError::MissingEnvVar)` - Names the first variable that is missing
    pub fn from_env(kind: ProviderKind) -> Result<Self, ConfigError> {
        Self::from_lookup(kind, |name| std::env::var(name).ok())
    }

    /// Loads the credentials of `kind` through `lookup`, which maps a variable name to its
    /// value. [`from_env`](Self::from_env) uses the process environment.
    ///
    /// # Returns
    /// - `Ok(Credentials)` - All three variables were found
    /// - `Err(ConfigError::MissingEnvVar)` - Names the first variable that is missing
    pub fn from_lookup<F>(kind: ProviderKind, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| {
            let name = format!("{}_{}", kind.env_prefix(), suffix);
            lookup(&name).ok_or(ConfigError::MissingEnvVar(name))
        };

        Ok(Self {
            client_id: var("CLIENT_ID")?,
            client_secret: var("CLIENT_SECRET")?,
            redirect_url: var("REDIRECT_URL")?,
        })
    }
}

/// Everything a client needs to talk to one provider.
///
/// Built from the provider's static defaults and the caller's credentials. The caller's
/// scope list is stored as given; forced provider scopes are only added when the effective
/// list is computed.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    kind: ProviderKind,
    credentials: Credentials,
    endpoints: Endpoints,
    scopes: Vec<String>,
    auth_mode: AuthMode,
}

impl ProviderConfig {
    /// Creates a configuration with the provider's published endpoints and no caller scopes.
    pub fn new(kind: ProviderKind, credentials: Credentials) -> Self {
        Self {
            kind,
            credentials,
            endpoints: kind.default_endpoints(),
            scopes: Vec::new(),
            auth_mode: kind.auth_mode(),
        }
    }

    /// Sets the scopes requested in addition to the provider's forced scopes.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the provider endpoints, e.g. to route through a proxy or a mock server.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    /// Scopes as supplied by the caller.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Caller scopes in order, followed by forced provider scopes not already requested.
    pub fn effective_scopes(&self) -> Vec<String> {
        let mut scopes = self.scopes.clone();
        for forced in self.kind.forced_scopes() {
            if !scopes.iter().any(|scope| scope == forced) {
                scopes.push((*forced).to_string());
            }
        }
        scopes
    }

    /// Checks values the OAuth2 client cannot validate itself.
    ///
    /// # Returns
    /// - `Ok(())` - Client id and secret are present
    /// - `Err(ConfigError::EmptyValue)` - Names the empty field
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials.client_id.trim().is_empty() {
            return Err(ConfigError::EmptyValue("client_id"));
        }
        if self.credentials.client_secret.is_empty() {
            return Err(ConfigError::EmptyValue("client_secret"));
        }
        Ok(())
    }
}
