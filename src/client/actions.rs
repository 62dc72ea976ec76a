use crate::client::{
    display_to_param, repo_params, Body, Client, ExtendParams, PaginationOptions, Params,
    RawResponse, Result,
};
use serde::Serialize;
use serde_json::Value;
use strum::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum WorkflowRunStatus {
    Completed,
    ActionRequired,
    Cancelled,
    Failure,
    Neutral,
    Skipped,
    Stale,
    Success,
    TimedOut,
    InProgress,
    Queued,
    Requested,
    Waiting,
    Pending,
}

display_to_param!(WorkflowRunStatus);

#[derive(Clone, Debug, Default)]
pub struct ListWorkflowRunsOptions {
    /// Login of the user that triggered the run
    pub actor: Option<String>,
    pub branch: Option<String>,

    /// Name of the triggering event, e.g. `push` or `pull_request`
    pub event: Option<String>,
    pub status: Option<WorkflowRunStatus>,

    /// A date range such as `>=2023-01-01` or `2023-01-01..2023-02-01`
    pub created: Option<String>,
    pub head_sha: Option<String>,
    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListWorkflowRunsOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("actor", &self.actor)
            .set("branch", &self.branch)
            .set("event", &self.event)
            .set("status", self.status)
            .set("created", &self.created)
            .set("head_sha", &self.head_sha);
        self.pagination_options.extend_params(params);
    }
}

#[derive(Debug, Serialize)]
struct OrgSecretRequest<'a> {
    encrypted_value: &'a str,
    key_id: &'a str,
    visibility: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_repository_ids: Option<&'a [u64]>,
}

/// `ActionsClient` handles communication with the GitHub Actions related methods of the GitHub
/// API.
///
/// GitHub API docs: https://docs.github.com/rest/actions
pub struct ActionsClient<'a> {
    inner: &'a Client,
}

impl<'a> ActionsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    // Secrets

    /// List all secrets available in an organization without revealing their encrypted values
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#list-organization-secrets
    pub async fn list_org_secrets(
        &self,
        org: &str,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<RawResponse> {
        let params = Params::new()
            .with("org", org)
            .with("per_page", per_page)
            .with("page", page);
        self.inner.get("/orgs/{org}/actions/secrets", &params).await
    }

    /// Get the public key needed to encrypt secrets before creating or updating them
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#get-an-organization-public-key
    pub async fn get_org_public_key(&self, org: &str) -> Result<RawResponse> {
        let params = Params::new().with("org", org);
        self.inner
            .get("/orgs/{org}/actions/secrets/public-key", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#get-an-organization-secret
    pub async fn get_org_secret(&self, org: &str, secret_name: &str) -> Result<RawResponse> {
        let params = Params::new()
            .with("org", org)
            .with("secret_name", secret_name);
        self.inner
            .get("/orgs/{org}/actions/secrets/{secret_name}", &params)
            .await
    }

    /// Create or update an organization secret. `encrypted_value` must already be sealed with
    /// the key from `get_org_public_key`; `visibility` is `all`, `private` or `selected`.
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#create-or-update-an-organization-secret
    pub async fn create_or_update_org_secret(
        &self,
        org: &str,
        secret_name: &str,
        encrypted_value: &str,
        key_id: &str,
        visibility: &str,
        selected_repository_ids: Option<&[u64]>,
    ) -> Result<RawResponse> {
        let params = Params::new()
            .with("org", org)
            .with("secret_name", secret_name);
        let body = Body::json(&OrgSecretRequest {
            encrypted_value,
            key_id,
            visibility,
            selected_repository_ids,
        })?;
        self.inner
            .put("/orgs/{org}/actions/secrets/{secret_name}", &params, Some(body))
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#delete-an-organization-secret
    pub async fn delete_org_secret(&self, org: &str, secret_name: &str) -> Result<RawResponse> {
        let params = Params::new()
            .with("org", org)
            .with("secret_name", secret_name);
        self.inner
            .delete("/orgs/{org}/actions/secrets/{secret_name}", &params, None)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/actions/secrets#list-repository-secrets
    pub async fn list_repo_secrets(
        &self,
        owner: &str,
        repo: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/actions/secrets", &params)
            .await
    }

    // Workflows

    /// GitHub API docs: https://docs.github.com/rest/actions/workflows#list-repository-workflows
    pub async fn list_repo_workflows(
        &self,
        owner: &str,
        repo: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/actions/workflows", &params)
            .await
    }

    /// Manually trigger a workflow that is configured with `workflow_dispatch`. `workflow_id` is
    /// the numeric id or the workflow file name, e.g. `main.yaml`.
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflows#create-a-workflow-dispatch-event
    pub async fn create_workflow_dispatch(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: &str,
        git_ref: &str,
        inputs: Option<Value>,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct WorkflowDispatchRequest<'a> {
            #[serde(rename = "ref")]
            git_ref: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            inputs: Option<Value>,
        }

        let params = repo_params(owner, repo).with("workflow_id", workflow_id);
        let body = Body::json(&WorkflowDispatchRequest { git_ref, inputs })?;
        self.inner
            .post(
                "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/dispatches",
                &params,
                Some(body),
            )
            .await
    }

    // Workflow runs

    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#list-workflow-runs-for-a-repository
    pub async fn list_workflow_runs_for_repo(
        &self,
        owner: &str,
        repo: &str,
        options: Option<ListWorkflowRunsOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/actions/runs", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#get-a-workflow-run
    pub async fn get_workflow_run(&self, owner: &str, repo: &str, run_id: u64) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("run_id", run_id);
        self.inner
            .get("/repos/{owner}/{repo}/actions/runs/{run_id}", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#cancel-a-workflow-run
    pub async fn cancel_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("run_id", run_id);
        self.inner
            .post("/repos/{owner}/{repo}/actions/runs/{run_id}/cancel", &params, None)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#re-run-a-workflow
    pub async fn rerun_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("run_id", run_id);
        self.inner
            .post("/repos/{owner}/{repo}/actions/runs/{run_id}/rerun", &params, None)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#delete-a-workflow-run
    pub async fn delete_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("run_id", run_id);
        self.inner
            .delete("/repos/{owner}/{repo}/actions/runs/{run_id}", &params, None)
            .await
    }

    /// List jobs for a workflow run. `filter` is `latest` (the default) or `all`.
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-jobs#list-jobs-for-a-workflow-run
    pub async fn list_jobs_for_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
        filter: Option<&str>,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("run_id", run_id)
            .with("filter", filter)
            .extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/actions/runs/{run_id}/jobs", &params)
            .await
    }

    /// Download workflow run logs. GitHub answers with a 302 redirect to a short lived archive
    /// URL; reqwest follows it by default.
    ///
    /// GitHub API docs: https://docs.github.com/rest/actions/workflow-runs#download-workflow-run-logs
    pub async fn download_workflow_run_logs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("run_id", run_id);
        self.inner
            .get("/repos/{owner}/{repo}/actions/runs/{run_id}/logs", &params)
            .await
    }
}

#[cfg(test)]
mod test {
    use super::{ListWorkflowRunsOptions, OrgSecretRequest, WorkflowRunStatus};
    use crate::client::{ParamValue, Params};
    use serde_json::json;

    #[test]
    fn workflow_run_filters() {
        let params = Params::new().extend_from(&ListWorkflowRunsOptions {
            branch: Some("main".to_owned()),
            status: Some(WorkflowRunStatus::TimedOut),
            ..Default::default()
        });

        assert_eq!(
            params.get("status"),
            Some(&ParamValue::Scalar("timed_out".to_owned()))
        );
        assert_eq!(params.get("actor"), Some(&ParamValue::Absent));
    }

    #[test]
    fn org_secret_without_selected_repositories() {
        let request = OrgSecretRequest {
            encrypted_value: "c2VjcmV0",
            key_id: "012345678912345678",
            visibility: "private",
            selected_repository_ids: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "encrypted_value": "c2VjcmV0",
                "key_id": "012345678912345678",
                "visibility": "private",
            })
        );
    }
}
