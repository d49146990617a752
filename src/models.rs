use serde::{Deserialize, Serialize};

/// Represents a GitHub user profile from the `/user` and `/users` APIs.
///
/// Every field is optional on the wire. Fields left as `None` are omitted
/// when the profile is encoded, so a partially filled `User` doubles as the
/// payload for [`UsersService::edit`](crate::UsersService::edit).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Server-assigned account id. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravatar_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hireable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<u32>,
}

impl User {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    #[must_use]
    pub fn with_blog(mut self, blog: impl Into<String>) -> Self {
        self.blog = Some(blog.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_hireable(mut self, hireable: bool) -> Self {
        self.hireable = Some(hireable);
        self
    }
}

/// Optional parameters for [`UsersService::list`](crate::UsersService::list).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserListOptions {
    /// ID of the last user seen.
    pub since: u64,
}
