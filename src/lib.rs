//! Typed client for the user endpoints of the GitHub REST API.
//!
//! ```no_run
//! # async fn run() -> github_users::Result<()> {
//! use github_users::{GitHubClient, UserListOptions};
//!
//! let client = GitHubClient::new()?;
//! let octocat = client.users().get("octocat").await?;
//! let page = client.users().list(Some(&UserListOptions { since: 135 })).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;
pub mod users;

pub use client::GitHubClient;
pub use config::Config;
pub use error::{Error, FieldError, Result};
pub use models::{User, UserListOptions};
pub use transport::{ApiRequest, Transport};
pub use users::UsersService;
