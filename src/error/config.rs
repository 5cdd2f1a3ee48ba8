use thiserror::Error;

use crate::provider::ProviderKind;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// `Credentials::from_env` requires the client id, client secret and redirect URL of
    /// the selected provider. Check the `.env.example` file for the expected names.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A required construction parameter was provided but empty.
    #[error("Configuration value `{0}` must not be empty")]
    EmptyValue(&'static str),

    /// One of the configured endpoint or redirect URLs could not be parsed.
    #[error("Invalid {field} '{value}': {source}")]
    InvalidUrl {
        /// Which configuration field held the URL
        field: &'static str,
        /// The value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// A configuration built for one provider was handed to another provider's client.
    #[error("Configuration is for {actual} but the client was built for {expected}")]
    ProviderMismatch {
        expected: ProviderKind,
        actual: ProviderKind,
    },
}
