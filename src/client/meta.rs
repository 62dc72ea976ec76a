use crate::client::{Client, Params, RawResponse, Result};

/// `MetaClient` covers the endpoints that describe the API itself.
///
/// GitHub API docs: https://docs.github.com/rest/meta
pub struct MetaClient<'a> {
    inner: &'a Client,
}

impl<'a> MetaClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Hypermedia links to the top-level resources
    ///
    /// GitHub API docs: https://docs.github.com/rest/meta/meta#github-api-root
    pub async fn root(&self) -> Result<RawResponse> {
        self.inner.get("/", &Params::new()).await
    }

    /// Get GitHub meta information, such as the IP ranges used by hooks and actions
    ///
    /// GitHub API docs: https://docs.github.com/rest/meta/meta#get-github-meta-information
    pub async fn get(&self) -> Result<RawResponse> {
        self.inner.get("/meta", &Params::new()).await
    }

    /// Get the octocat as ASCII art, optionally with a speech bubble saying `s`
    ///
    /// GitHub API docs: https://docs.github.com/rest/meta/meta#get-octocat
    pub async fn octocat(&self, s: Option<&str>) -> Result<RawResponse> {
        let params = Params::new().with("s", s);
        self.inner.get("/octocat", &params).await
    }

    /// GitHub API docs: https://docs.github.com/rest/meta/meta#get-the-zen-of-github
    pub async fn zen(&self) -> Result<RawResponse> {
        self.inner.get("/zen", &Params::new()).await
    }
}
