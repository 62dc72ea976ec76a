use crate::client::{Client, Params, RawResponse, Result};

/// `RateLimitClient` reads the current rate limit status.
///
/// GitHub API docs: https://docs.github.com/rest/rate-limit
pub struct RateLimitClient<'a> {
    inner: &'a Client,
}

impl<'a> RateLimitClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Get rate limit status for the authenticated user. Calling this does not count against the
    /// rate limit.
    ///
    /// GitHub API docs: https://docs.github.com/rest/rate-limit/rate-limit#get-rate-limit-status-for-the-authenticated-user
    pub async fn get(&self) -> Result<RawResponse> {
        self.inner.get("/rate_limit", &Params::new()).await
    }
}
