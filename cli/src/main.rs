use clap::{Args, Parser, Subcommand};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use wire::{Credentials, ErrorBody};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing access token; pass --token or set AUTH_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned HTTP {status}: {detail}")]
    Api { status: u16, detail: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "Credentials portal auth API CLI")]
struct Cli {
    #[arg(long, env = "AUTH_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    #[arg(long, env = "AUTH_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server answers `/healthz`.
    Ping,
    /// Create an account.
    Signup(CredentialArgs),
    /// Log in with JSON credentials and print the response.
    Login(CredentialArgs),
    /// Run the form-encoded password grant and print the token.
    Token(CredentialArgs),
    /// Show the user behind `--token`.
    Me,
}

#[derive(Args, Debug)]
struct CredentialArgs {
    username: String,

    #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
    password: String,
}

impl CredentialArgs {
    fn into_credentials(self) -> Credentials {
        Credentials::new(self.username, self.password)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        token: cli.token,
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Signup(args) => run_json_post(&ctx, "/signup", args.into_credentials()).await,
        Command::Login(args) => run_json_post(&ctx, "/login", args.into_credentials()).await,
        Command::Token(args) => run_token(&ctx, args.into_credentials()).await,
        Command::Me => run_me(&ctx).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(endpoint_url(&cli.base_url, "/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Api {
            status: status.as_u16(),
            detail: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_json_post(cli: &CliContext, path: &str, creds: Credentials) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.post(endpoint_url(&cli.base_url, path)).json(&creds).send().await?;
    let json = read_response(response).await?;
    print_json(&json)
}

async fn run_token(cli: &CliContext, creds: Credentials) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.post(endpoint_url(&cli.base_url, "/token")).form(&creds).send().await?;
    let json = read_response(response).await?;
    print_json(&json)
}

async fn run_me(cli: &CliContext) -> Result<(), CliError> {
    let token = cli.token.as_deref().ok_or(CliError::MissingToken)?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, bearer_header(token)?);

    let client = reqwest::Client::builder().default_headers(headers).build()?;
    let response = client.get(endpoint_url(&cli.base_url, "/users/me")).send().await?;
    let json = read_response(response).await?;
    print_json(&json)
}

async fn read_response(response: reqwest::Response) -> Result<Value, CliError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::Api {
            status: status.as_u16(),
            detail: error_detail(status.as_u16(), &body),
        });
    }
    Ok(serde_json::from_str(&body)?)
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn bearer_header(token: &str) -> Result<HeaderValue, CliError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// `detail` from an error body, falling back to the raw text.
fn error_detail(status: u16, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<ErrorBody>(body) {
        return err.detail;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.to_owned()
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
