use crate::{
    client::{
        repo_params, Body, Client, ExtendParams, PaginationOptions, Params, RawResponse, Result,
        SortDirection, Verb, MEDIA_TYPE_RAW,
    },
    DateTime,
};
use serde::Serialize;

mod collaborators;
mod releases;
mod statuses;

pub use collaborators::ListCollaboratorsOptions;
pub use releases::ReleaseRequest;
pub use statuses::{CreateStatusRequest, StatusState};

#[derive(Clone, Debug, Default)]
pub struct ListReposOptions {
    /// `all`, `public` or `private`. Only for the authenticated user.
    pub visibility: Option<String>,

    /// Comma separated subset of `owner`, `collaborator` and `organization_member`. Only for the
    /// authenticated user.
    pub affiliation: Option<String>,

    /// Sent as `type`. Accepted values depend on whose repositories are listed, e.g. `forks` or
    /// `sources` for an organization and `owner` or `member` for a user.
    pub kind: Option<String>,

    /// `created`, `updated`, `pushed` or `full_name`
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,

    /// Only repositories updated after this time. Only for the authenticated user.
    pub since: Option<DateTime>,

    /// Only repositories updated before this time. Only for the authenticated user.
    pub before: Option<DateTime>,

    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListReposOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("visibility", &self.visibility)
            .set("affiliation", &self.affiliation)
            .set("type", &self.kind)
            .set("sort", &self.sort)
            .set("direction", self.direction)
            .set("since", self.since)
            .set("before", self.before);
        self.pagination_options.extend_params(params);
    }
}

#[derive(Clone, Debug, Default)]
pub struct ListCommitsOptions {
    /// SHA or branch to start listing commits from. Defaults to the default branch.
    pub sha: Option<String>,

    /// Only commits containing this file path
    pub path: Option<String>,

    /// GitHub login or email address of the commit author
    pub author: Option<String>,

    pub committer: Option<String>,
    pub since: Option<DateTime>,
    pub until: Option<DateTime>,
    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListCommitsOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("sha", &self.sha)
            .set("path", &self.path)
            .set("author", &self.author)
            .set("committer", &self.committer)
            .set("since", self.since)
            .set("until", self.until);
        self.pagination_options.extend_params(params);
    }
}

/// Body for creating or updating a repository. `name` is required on creation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RepositoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    /// `public`, `private` or `internal`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,

    /// Create an initial commit with an empty README. Creation only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_init: Option<bool>,

    /// Creation only, e.g. `Rust`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,

    /// Creation only, e.g. `mit` or `apache-2.0`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,

    /// Update only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// Update only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// `RepositoryClient` handles communication with the Repository related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/repos
pub struct RepositoryClient<'a> {
    inner: &'a Client,
}

impl<'a> RepositoryClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Get a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#get-a-repository
    pub async fn get(&self, owner: &str, repo: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        self.inner.get("/repos/{owner}/{repo}", &params).await
    }

    /// Update a repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#update-a-repository
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        repository: &RepositoryRequest,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        let body = Body::json(repository)?;
        self.inner
            .patch("/repos/{owner}/{repo}", &params, Some(body))
            .await
    }

    /// Delete a repository. Requires admin access.
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#delete-a-repository
    pub async fn delete(&self, owner: &str, repo: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        self.inner.delete("/repos/{owner}/{repo}", &params, None).await
    }

    /// List organization repositories
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-organization-repositories
    pub async fn list_for_org(
        &self,
        org: &str,
        options: Option<ListReposOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new().with("org", org).extend_from(&options);
        self.inner.get("/orgs/{org}/repos", &params).await
    }

    /// List public repositories for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-repositories-for-a-user
    pub async fn list_for_user(
        &self,
        username: &str,
        options: Option<ListReposOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new()
            .with("username", username)
            .extend_from(&options);
        self.inner.get("/users/{username}/repos", &params).await
    }

    /// List repositories the authenticated user has explicit permission to access
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-repositories-for-the-authenticated-user
    pub async fn list_for_authenticated_user(
        &self,
        options: Option<ListReposOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new().extend_from(&options);
        self.inner.get("/user/repos", &params).await
    }

    /// GitHub API docs: https://docs.github.com/rest/repos/repos#create-a-repository-for-the-authenticated-user
    pub async fn create_for_authenticated_user(
        &self,
        repository: &RepositoryRequest,
    ) -> Result<RawResponse> {
        let body = Body::json(repository)?;
        self.inner.post("/user/repos", &Params::new(), Some(body)).await
    }

    /// GitHub API docs: https://docs.github.com/rest/repos/repos#create-an-organization-repository
    pub async fn create_in_org(
        &self,
        org: &str,
        repository: &RepositoryRequest,
    ) -> Result<RawResponse> {
        let params = Params::new().with("org", org);
        let body = Body::json(repository)?;
        self.inner
            .post("/orgs/{org}/repos", &params, Some(body))
            .await
    }

    // Branches

    /// List branches, optionally only the protected (`Some(true)`) or unprotected ones
    ///
    /// GitHub API docs: https://docs.github.com/rest/branches/branches#list-branches
    pub async fn list_branches(
        &self,
        owner: &str,
        repo: &str,
        protected: Option<bool>,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("protected", protected)
            .extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/branches", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/branches/branches#get-a-branch
    pub async fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("branch", branch);
        self.inner
            .get("/repos/{owner}/{repo}/branches/{+branch}", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-repository-tags
    pub async fn list_tags(
        &self,
        owner: &str,
        repo: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner.get("/repos/{owner}/{repo}/tags", &params).await
    }

    // Topics

    /// GitHub API docs: https://docs.github.com/rest/repos/repos#get-all-repository-topics
    pub async fn get_all_topics(&self, owner: &str, repo: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        self.inner.get("/repos/{owner}/{repo}/topics", &params).await
    }

    /// Replace all repository topics. An empty slice clears them.
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/repos#replace-all-repository-topics
    pub async fn replace_all_topics(
        &self,
        owner: &str,
        repo: &str,
        names: &[&str],
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct TopicsRequest<'a> {
            names: &'a [&'a str],
        }

        let params = repo_params(owner, repo);
        let body = Body::json(&TopicsRequest { names })?;
        self.inner
            .put("/repos/{owner}/{repo}/topics", &params, Some(body))
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/repos/repos#list-repository-languages
    pub async fn list_languages(&self, owner: &str, repo: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        self.inner
            .get("/repos/{owner}/{repo}/languages", &params)
            .await
    }

    // Commits

    /// GitHub API docs: https://docs.github.com/rest/commits/commits#list-commits
    pub async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        options: Option<ListCommitsOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/commits", &params)
            .await
    }

    /// Get a commit by SHA, branch name or tag name
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/commits#get-a-commit
    pub async fn get_commit(&self, owner: &str, repo: &str, git_ref: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("ref", git_ref);
        self.inner
            .get("/repos/{owner}/{repo}/commits/{+ref}", &params)
            .await
    }

    /// Compare two commits. `basehead` is written `BASE...HEAD`, where either side may be
    /// `user:branch` for a cross-repository comparison.
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/commits#compare-two-commits
    pub async fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        basehead: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("basehead", basehead)
            .extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/compare/{+basehead}", &params)
            .await
    }

    // Contents

    /// Get the contents of a file or directory. `path` keeps its slashes.
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/contents#get-repository-content
    pub async fn get_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("path", path)
            .with("ref", git_ref);
        self.inner
            .get("/repos/{owner}/{repo}/contents/{+path}", &params)
            .await
    }

    /// Get the raw bytes of a file instead of the base64 encoded JSON representation
    ///
    /// GitHub API docs: https://docs.github.com/rest/repos/contents#get-repository-content
    pub async fn get_content_raw(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("path", path)
            .with("ref", git_ref);
        let response = self
            .inner
            .request(Verb::Get, "/repos/{owner}/{repo}/contents/{+path}", &params)?
            .header(reqwest::header::ACCEPT, MEDIA_TYPE_RAW)
            .send()
            .await?;

        Ok(response)
    }
}

#[cfg(test)]
mod test {
    use super::{ListReposOptions, RepositoryRequest};
    use crate::client::{ParamValue, Params, SortDirection};
    use serde_json::json;

    #[test]
    fn kind_is_sent_as_type() {
        let params = Params::new().extend_from(&ListReposOptions {
            kind: Some("forks".to_owned()),
            direction: Some(SortDirection::Descending),
            ..Default::default()
        });

        assert_eq!(
            params.get("type"),
            Some(&ParamValue::Scalar("forks".to_owned()))
        );
        assert_eq!(
            params.get("direction"),
            Some(&ParamValue::Scalar("desc".to_owned()))
        );
        assert_eq!(params.get("kind"), None);
    }

    #[test]
    fn repository_request_only_sends_set_fields() {
        let request = RepositoryRequest {
            name: Some("widgets".to_owned()),
            private: Some(false),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "name": "widgets", "private": false })
        );
    }
}
