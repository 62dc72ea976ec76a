use super::RepositoryClient;
use crate::client::{repo_params, Body, PaginationOptions, RawResponse, Result};
use serde::Serialize;

/// Body for creating or updating a release. `tag_name` is required on creation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReleaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,

    /// Branch or commit SHA the tag is created from when it doesn't exist yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_release_notes: Option<bool>,
}

// Implementation for the release endpoints
// https://docs.github.com/rest/releases/releases
impl RepositoryClient<'_> {
    /// List releases. Draft releases are only listed for users with push access.
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/releases#list-releases
    pub async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/releases", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/releases/releases#get-a-release
    pub async fn get_release(&self, owner: &str, repo: &str, release_id: u64) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("release_id", release_id);
        self.inner
            .get("/repos/{owner}/{repo}/releases/{release_id}", &params)
            .await
    }

    /// The most recent non-prerelease, non-draft release
    ///
    /// GitHub API docs: https://docs.github.com/rest/releases/releases#get-the-latest-release
    pub async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        self.inner
            .get("/repos/{owner}/{repo}/releases/latest", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/releases/releases#get-a-release-by-tag-name
    pub async fn get_release_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("tag", tag);
        self.inner
            .get("/repos/{owner}/{repo}/releases/tags/{tag}", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/releases/releases#create-a-release
    pub async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        release: &ReleaseRequest,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        let body = Body::json(release)?;
        self.inner
            .post("/repos/{owner}/{repo}/releases", &params, Some(body))
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/releases/releases#update-a-release
    pub async fn update_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        release: &ReleaseRequest,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("release_id", release_id);
        let body = Body::json(release)?;
        self.inner
            .patch(
                "/repos/{owner}/{repo}/releases/{release_id}",
                &params,
                Some(body),
            )
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/releases/releases#delete-a-release
    pub async fn delete_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("release_id", release_id);
        self.inner
            .delete("/repos/{owner}/{repo}/releases/{release_id}", &params, None)
            .await
    }
}
