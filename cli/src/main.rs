mod store;
mod transport;

#[cfg(test)]
mod test_server;

use std::path::PathBuf;
use std::time::Duration;

use auth::{KeyValueStore, LoginClient, LoginConfig, LoginForm, StorageError, SubmitOutcome, TOKEN_KEY};
use clap::{Parser, Subcommand};

use crate::store::FileStore;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Login(&'static str),
    #[error("no session token stored in {0}")]
    MissingToken(String),
    #[error("storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Parser, Debug)]
#[command(name = "login-cli", about = "Log in against a /do-login API and keep the session token")]
struct Cli {
    #[arg(long, env = "LOGIN_API_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "LOGIN_STORE", default_value = ".login-store.json")]
    store: PathBuf,

    #[arg(long, help = "Per-request timeout in seconds")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    store: PathBuf,
    timeout: Option<Duration>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a session token and print the redirect target.
    Login {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, env = "LOGIN_PASSWORD", hide_env_values = true, default_value = "")]
        password: String,
    },
    /// Print the stored session token.
    Token,
    /// Print the sign-up route.
    Signup,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        store: cli.store,
        timeout: cli.timeout_secs.map(Duration::from_secs),
    };

    match cli.command {
        Command::Login { username, password } => run_login(&ctx, username, password).await.map(|_| ()),
        Command::Token => run_token(&ctx),
        Command::Signup => run_signup(&ctx),
    }
}

/// Client whose navigation prints the target route on stdout.
fn printing_client(
    ctx: &CliContext,
) -> Result<LoginClient<ReqwestTransport, FileStore, impl Fn(&str)>, CliError> {
    Ok(LoginClient::new(
        LoginConfig::new(&ctx.base_url),
        ReqwestTransport::new(ctx.timeout)?,
        FileStore::new(&ctx.store),
        |path: &str| println!("{path}"),
    ))
}

async fn run_login(ctx: &CliContext, username: String, password: String) -> Result<String, CliError> {
    let client = printing_client(ctx)?;
    let mut form = LoginForm { username, password, ..LoginForm::default() };

    match form.submit(&client).await {
        SubmitOutcome::Redirected(target) => Ok(target),
        SubmitOutcome::Failed(error) => {
            tracing::debug!(%error, "login failed");
            Err(CliError::Login(error.user_message()))
        }
        SubmitOutcome::Ignored => Err(CliError::Login(auth::GENERIC_ERROR_MESSAGE)),
    }
}

fn run_token(ctx: &CliContext) -> Result<(), CliError> {
    let store = FileStore::new(&ctx.store);
    let token = store
        .get(TOKEN_KEY)?
        .ok_or_else(|| CliError::MissingToken(ctx.store.display().to_string()))?;
    println!("{token}");
    Ok(())
}

fn run_signup(ctx: &CliContext) -> Result<(), CliError> {
    printing_client(ctx)?.navigate_to_signup();
    Ok(())
}
