use crate::client::{repo_params, Client, PaginationOptions, Params, RawResponse, Result};

/// `LicensesClient` handles communication with the license related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/licenses
pub struct LicensesClient<'a> {
    inner: &'a Client,
}

impl<'a> LicensesClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// List popular open source licenses. `featured` narrows the list to the licenses GitHub
    /// highlights when creating a repository.
    ///
    /// GitHub API docs: https://docs.github.com/rest/licenses/licenses#get-all-commonly-used-licenses
    pub async fn list_commonly_used(
        &self,
        featured: Option<bool>,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new()
            .with("featured", featured)
            .extend_from(&options);
        self.inner.get("/licenses", &params).await
    }

    /// Get metadata for an individual license
    ///
    /// GitHub API docs: https://docs.github.com/rest/licenses/licenses#get-a-license
    pub async fn get(&self, license: &str) -> Result<RawResponse> {
        let params = Params::new().with("license", license);
        self.inner.get("/licenses/{license}", &params).await
    }

    /// Get the contents of a repository's license
    ///
    /// GitHub API docs: https://docs.github.com/rest/licenses/licenses#get-the-license-for-a-repository
    pub async fn get_for_repo(&self, owner: &str, repo: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        self.inner.get("/repos/{owner}/{repo}/license", &params).await
    }
}
