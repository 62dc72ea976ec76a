use crate::client::{Body, Client, PaginationOptions, Params, RawResponse, Result};
use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The publicly visible email address of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hireable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// `UsersClient` handles communication with the user related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/users
pub struct UsersClient<'a> {
    inner: &'a Client,
}

impl<'a> UsersClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Get the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/users#get-the-authenticated-user
    pub async fn get_authenticated(&self) -> Result<RawResponse> {
        self.inner.get("/user", &Params::new()).await
    }

    /// Update the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/users#update-the-authenticated-user
    pub async fn update_authenticated(&self, user: &UpdateUserRequest) -> Result<RawResponse> {
        let body = Body::json(user)?;
        self.inner.patch("/user", &Params::new(), Some(body)).await
    }

    /// Get a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/users#get-a-user
    pub async fn get_by_username(&self, username: &str) -> Result<RawResponse> {
        let params = Params::new().with("username", username);
        self.inner.get("/users/{username}", &params).await
    }

    /// List all users in the order that they signed up. `since` is a user ID; only users with an
    /// ID greater than it are returned.
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/users#list-users
    pub async fn list(&self, since: Option<u64>, per_page: Option<u32>) -> Result<RawResponse> {
        let params = Params::new()
            .with("since", since)
            .with("per_page", per_page);
        self.inner.get("/users", &params).await
    }

    /// List followers of a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#list-followers-of-a-user
    pub async fn list_followers(
        &self,
        username: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new()
            .with("username", username)
            .extend_from(&options);
        self.inner.get("/users/{username}/followers", &params).await
    }

    /// Check if a person is followed by the authenticated user. GitHub answers 204 if so and 404
    /// if not.
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#check-if-a-person-is-followed-by-the-authenticated-user
    pub async fn check_following(&self, username: &str) -> Result<RawResponse> {
        let params = Params::new().with("username", username);
        self.inner.get("/user/following/{username}", &params).await
    }

    /// Follow a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#follow-a-user
    pub async fn follow(&self, username: &str) -> Result<RawResponse> {
        let params = Params::new().with("username", username);
        self.inner
            .put("/user/following/{username}", &params, None)
            .await
    }

    /// Unfollow a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/users/followers#unfollow-a-user
    pub async fn unfollow(&self, username: &str) -> Result<RawResponse> {
        let params = Params::new().with("username", username);
        self.inner
            .delete("/user/following/{username}", &params, None)
            .await
    }
}
