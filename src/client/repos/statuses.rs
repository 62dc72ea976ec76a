use super::RepositoryClient;
use crate::client::{repo_params, Body, PaginationOptions, RawResponse, Result};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusState {
    Error,
    Failure,
    Pending,
    Success,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateStatusRequest<'a> {
    pub state: StatusState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,

    /// Label to differentiate this status from the status of other systems. Defaults to
    /// `default` on GitHub's side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<&'a str>,
}

// Implementation for the status endpoints
// https://docs.github.com/rest/commits/statuses
impl RepositoryClient<'_> {
    /// List Statuses
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/statuses#list-commit-statuses-for-a-reference
    pub async fn list_statuses(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("ref", git_ref)
            .extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/commits/{+ref}/statuses", &params)
            .await
    }

    /// Get combined status for the specified reference.
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/statuses#get-the-combined-status-for-a-specific-reference
    pub async fn get_combined_status(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("ref", git_ref)
            .extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/commits/{+ref}/status", &params)
            .await
    }

    /// Create a commit status for the commit `sha`
    ///
    /// GitHub API docs: https://docs.github.com/rest/commits/statuses#create-a-commit-status
    pub async fn create_status(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        status: &CreateStatusRequest<'_>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("sha", sha);
        let body = Body::json(status)?;
        self.inner
            .post("/repos/{owner}/{repo}/statuses/{sha}", &params, Some(body))
            .await
    }
}

#[cfg(test)]
mod test {
    use super::{CreateStatusRequest, StatusState};
    use serde_json::json;

    #[test]
    fn status_request() {
        let request = CreateStatusRequest {
            state: StatusState::Pending,
            target_url: None,
            description: Some("Waiting on CI"),
            context: Some("ci/build"),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "state": "pending", "description": "Waiting on CI", "context": "ci/build" })
        );
    }
}
