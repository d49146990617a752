use reqwest::Method;

use crate::error::{Error, Result};
use crate::models::{User, UserListOptions};
use crate::transport::Transport;

/// Handles the user related methods of the GitHub API.
///
/// GitHub API docs: <https://docs.github.com/en/rest/users/users>
#[derive(Debug)]
pub struct UsersService<'c, T> {
    client: &'c T,
}

impl<'c, T: Transport> UsersService<'c, T> {
    pub fn new(client: &'c T) -> Self {
        Self { client }
    }

    /// Fetches a user. Passing the empty string fetches the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn get(&self, user: &str) -> Result<User> {
        let path = if user.is_empty() {
            "user".to_owned()
        } else {
            format!("users/{user}")
        };

        let req = self.client.new_request::<()>(Method::GET, &path, None)?;
        let body = self.client.execute(req).await?;
        serde_json::from_value(body).map_err(Error::Decode)
    }

    /// Edits the authenticated user. Only the fields set on `user` are sent.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn edit(&self, user: &User) -> Result<User> {
        let req = self.client.new_request(Method::PATCH, "user", Some(user))?;
        let body = self.client.execute(req).await?;
        serde_json::from_value(body).map_err(Error::Decode)
    }

    /// Lists all users, in the order GitHub returns them (ascending id).
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn list(&self, opts: Option<&UserListOptions>) -> Result<Vec<User>> {
        let path = match opts {
            Some(opts) => format!("users?since={}", opts.since),
            None => "users".to_owned(),
        };

        let req = self.client.new_request::<()>(Method::GET, &path, None)?;
        let body = self.client.execute(req).await?;
        serde_json::from_value(body).map_err(Error::Decode)
    }
}
