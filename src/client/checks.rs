use crate::{
    client::{
        display_to_param, repo_params, Body, Client, ExtendParams, PaginationOptions, Params,
        RawResponse, Result,
    },
    DateTime,
};
use serde::Serialize;
use strum::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CheckRunStatus {
    Queued,
    InProgress,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRunConclusion {
    ActionRequired,
    Cancelled,
    Failure,
    Neutral,
    Success,
    Skipped,
    Stale,
    TimedOut,
}

display_to_param!(CheckRunStatus);

#[derive(Clone, Debug, Default, Serialize)]
pub struct CheckRunOutput {
    pub title: String,

    /// Supports Markdown
    pub summary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Body for creating or updating a check run. `name` and `head_sha` are required on creation;
/// GitHub ignores `head_sha` on update.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CheckRunRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_sha: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,

    /// A reference for the run on the integrator's system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CheckRunStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime>,

    /// Required when `status` is `completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<CheckRunConclusion>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<CheckRunOutput>,
}

#[derive(Clone, Debug, Default)]
pub struct ListCheckRunsOptions {
    pub check_name: Option<String>,
    pub status: Option<CheckRunStatus>,

    /// `latest` (the default) or `all`
    pub filter: Option<&'static str>,

    pub app_id: Option<u64>,
    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListCheckRunsOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("check_name", &self.check_name)
            .set("status", self.status)
            .set("filter", self.filter)
            .set("app_id", self.app_id);
        self.pagination_options.extend_params(params);
    }
}

#[derive(Clone, Debug, Default)]
pub struct ListCheckSuitesOptions {
    pub app_id: Option<u64>,
    pub check_name: Option<String>,
    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListCheckSuitesOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("app_id", self.app_id)
            .set("check_name", &self.check_name);
        self.pagination_options.extend_params(params);
    }
}

/// `ChecksClient` handles communication with the checks related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/checks
pub struct ChecksClient<'a> {
    inner: &'a Client,
}

impl<'a> ChecksClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Create a check run
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#create-a-check-run
    pub async fn create_run(
        &self,
        owner: &str,
        repo: &str,
        check_run: &CheckRunRequest,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        let body = Body::json(check_run)?;
        self.inner
            .post("/repos/{owner}/{repo}/check-runs", &params, Some(body))
            .await
    }

    /// Get a check run
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#get-a-check-run
    pub async fn get_run(&self, owner: &str, repo: &str, check_run_id: u64) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("check_run_id", check_run_id);
        self.inner
            .get("/repos/{owner}/{repo}/check-runs/{check_run_id}", &params)
            .await
    }

    /// Update a check run
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#update-a-check-run
    pub async fn update_run(
        &self,
        owner: &str,
        repo: &str,
        check_run_id: u64,
        check_run: &CheckRunRequest,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("check_run_id", check_run_id);
        let body = Body::json(check_run)?;
        self.inner
            .patch(
                "/repos/{owner}/{repo}/check-runs/{check_run_id}",
                &params,
                Some(body),
            )
            .await
    }

    /// List check runs for a Git reference (a SHA, branch name or tag name)
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/runs#list-check-runs-for-a-git-reference
    pub async fn list_runs_for_ref(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        options: Option<ListCheckRunsOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("ref", git_ref)
            .extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/commits/{+ref}/check-runs", &params)
            .await
    }

    /// List check suites for a Git reference
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/suites#list-check-suites-for-a-git-reference
    pub async fn list_suites_for_ref(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        options: Option<ListCheckSuitesOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("ref", git_ref)
            .extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/commits/{+ref}/check-suites", &params)
            .await
    }

    /// Trigger a `check_suite` webhook `rerequested` action without pushing new code
    ///
    /// GitHub API docs: https://docs.github.com/rest/checks/suites#rerequest-a-check-suite
    pub async fn rerequest_suite(
        &self,
        owner: &str,
        repo: &str,
        check_suite_id: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("check_suite_id", check_suite_id);
        self.inner
            .post(
                "/repos/{owner}/{repo}/check-suites/{check_suite_id}/rerequest",
                &params,
                None,
            )
            .await
    }
}

#[cfg(test)]
mod test {
    use super::{CheckRunConclusion, CheckRunRequest, CheckRunStatus, ListCheckRunsOptions};
    use crate::{
        client::{ParamValue, Params},
        DateTime,
    };
    use serde_json::json;

    #[test]
    fn completed_check_run() {
        let request = CheckRunRequest {
            status: Some(CheckRunStatus::Completed),
            conclusion: Some(CheckRunConclusion::TimedOut),
            completed_at: DateTime::from_timestamp(1372700873),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "status": "completed",
                "conclusion": "timed_out",
                "completed_at": "2013-07-01T17:47:53Z",
            })
        );
    }

    #[test]
    fn list_runs_filters() {
        let params = Params::new().extend_from(&ListCheckRunsOptions {
            status: Some(CheckRunStatus::InProgress),
            filter: Some("all"),
            ..Default::default()
        });

        assert_eq!(
            params.get("status"),
            Some(&ParamValue::Scalar("in_progress".to_owned()))
        );
        assert_eq!(params.get("check_name"), Some(&ParamValue::Absent));
    }
}
