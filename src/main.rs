use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use github_users::{Config, GitHubClient, User, UserListOptions};

/// Query and edit GitHub user profiles.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Base API URL (must end with '/'). Overrides GITHUB_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Personal access token. Overrides GITHUB_TOKEN.
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch a user, or the authenticated user when LOGIN is omitted
    Get { login: Option<String> },

    /// Edit the authenticated user's profile
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        blog: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        hireable: Option<bool>,
    },

    /// List users, starting after the given id
    List {
        #[arg(long)]
        since: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env variables
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(api_url) = cli.api_url {
        config.base_url = api_url;
    }
    if let Some(token) = cli.token.filter(|t| !t.is_empty()) {
        config.token = Some(token);
    }

    let client = GitHubClient::from_config(&config).context("Failed to build GitHub client")?;
    let users = client.users();

    match cli.command {
        Command::Get { login } => {
            let login = login.unwrap_or_default();
            let user = users
                .get(&login)
                .await
                .with_context(|| format!("Failed to fetch user '{login}'"))?;
            print_json(&user)
        }
        Command::Edit {
            name,
            company,
            blog,
            location,
            email,
            hireable,
        } => {
            let patch = User {
                name,
                company,
                blog,
                location,
                email,
                hireable,
                ..User::default()
            };
            let user = users
                .edit(&patch)
                .await
                .context("Failed to edit authenticated user")?;
            print_json(&user)
        }
        Command::List { since } => {
            let opts = since.map(|since| UserListOptions { since });
            let list = users
                .list(opts.as_ref())
                .await
                .context("Failed to list users")?;
            print_json(&list)
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{out}");
    Ok(())
}
