use github_app_token::{create_app_jwt, Config, GithubAppError, GithubClient};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries only the token.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run().await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), GithubAppError> {
    let config = Config::from_env()?;
    let jwt = create_app_jwt(&config.app_id, &config.private_key)?;

    let client = GithubClient::new();
    let response = client
        .create_installation_token(&config.installation_id, &jwt)
        .await?;

    // No trailing newline: the token is the entire output.
    print!("{}", response.token);
    let _ = io::stdout().flush();

    Ok(())
}
