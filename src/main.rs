use clap::{Parser, Subcommand};
use oauth2::CsrfToken;
use oauth_providers::{
    config::{Credentials, ProviderConfig},
    error::Error,
    provider::ProviderKind,
    ProviderClient,
};
use serde::Serialize;
use thiserror::Error as ThisError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "oauth-providers",
    about = "Run the OAuth2 authorization-code flow against Discord or Spotify"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Provider to talk to. Credentials are read from <PROVIDER>_CLIENT_ID,
    /// <PROVIDER>_CLIENT_SECRET and <PROVIDER>_REDIRECT_URL.
    #[arg(short, long, value_enum, global = true, default_value = "discord")]
    provider: ProviderKind,

    /// Log level (trace, debug, info, warn, error), used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the authorization URL to send the user to.
    Authorize {
        /// Scope to request, repeatable.
        #[arg(long = "scope")]
        scopes: Vec<String>,
        /// State value echoed back on the redirect; random when omitted.
        #[arg(long)]
        state: Option<String>,
    },
    /// Exchange an authorization code for tokens.
    Exchange { code: String },
    /// Refresh an access token.
    Refresh { refresh_token: String },
    /// Fetch the profile of the user an access token belongs to.
    User { access_token: String },
}

/// Failures that end the CLI with a non-zero exit code.
#[derive(ThisError, Debug)]
enum CliError {
    #[error(transparent)]
    ClientErr(#[from] Error),

    /// The command's result could not be written as JSON.
    #[error("Failed to serialize output: {0}")]
    OutputErr(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let credentials = Credentials::from_env(cli.provider)?;
    let mut config = ProviderConfig::new(cli.provider, credentials);

    if let Commands::Authorize { scopes, .. } = &cli.command {
        config = config.with_scopes(scopes.iter().cloned());
    }
    let client = ProviderClient::from_config(config)?;

    match cli.command {
        Commands::Authorize { state, .. } => {
            let state = state.unwrap_or_else(|| CsrfToken::new_random().secret().clone());
            tracing::info!("Using state {}", state);

            println!("{}", client.create_authorization_url(&state));
        }
        Commands::Exchange { code } => {
            print_json(&client.validate_authorization_code(&code).await?)?;
        }
        Commands::Refresh { refresh_token } => {
            print_json(&client.refresh_access_token(&refresh_token).await?)?;
        }
        Commands::User { access_token } => {
            print_json(&client.get_user(&access_token).await?)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    /// Expected: Err(OutputErr) for a value JSON cannot represent
    #[test]
    fn print_json_reports_serialization_failure() {
        let mut value = BTreeMap::new();
        value.insert((1, 2), "map keys must be strings");

        let result = print_json(&value);

        assert!(matches!(result, Err(CliError::OutputErr(_))));
    }

    /// Expected: Ok for a serializable value
    #[test]
    fn print_json_writes_serializable_values() {
        assert!(print_json(&serde_json::json!({ "ok": true })).is_ok());
    }
}
