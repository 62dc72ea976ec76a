use crate::{
    client::{
        display_to_param, repo_params, Body, Client, ExtendParams, PaginationOptions, ParamValue,
        Params, RawResponse, Result, SortDirection, SortPages, StateFilter, ToParam,
    },
    DateTime,
};
use serde::Serialize;
use strum::Display;

#[derive(Clone, Debug, Default)]
pub struct ListIssuesOptions {
    /// Indicates which sorts of issues to return. Can be one of:
    /// * assigned: Issues assigned to you
    /// * created: Issues created by you
    /// * mentioned: Issues mentioning you
    /// * subscribed: Issues you're subscribed to updates for
    /// * all: All issues the authenticated user can see, regardless of participation or creation
    pub filter: Option<ListIssuesFilter>,

    /// Indicates the state of the issues to return
    pub state: Option<StateFilter>,

    /// Label names, sent comma separated. Example: bug,ui,@high
    pub labels: Vec<String>,

    /// What to sort results by
    pub sort: Option<SortPages>,

    /// The direction of the sort
    pub direction: Option<SortDirection>,

    /// Only issues updated at or after this time are returned
    pub since: Option<DateTime>,

    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListIssuesOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("filter", self.filter)
            .set("state", self.state)
            .set("labels", &self.labels)
            .set("sort", self.sort)
            .set("direction", self.direction)
            .set("since", self.since);
        self.pagination_options.extend_params(params);
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ListIssuesFilter {
    Assigned,
    Created,
    Mentioned,
    Subscribed,
    Repos,
    All,
}

#[derive(Clone, Debug, Default)]
pub struct ListIssuesForRepoOptions {
    pub milestone: Option<MilestoneFilter>,

    /// Indicates the state of the issues to return
    pub state: Option<StateFilter>,

    /// Can be the name of a user. Pass in none for issues with no assigned user, and * for issues
    /// assigned to any user.
    pub assignee: Option<String>,

    /// The user that created the issue.
    pub creator: Option<String>,

    /// A user that's mentioned in the issue.
    pub mentioned: Option<String>,

    /// Label names, sent comma separated
    pub labels: Vec<String>,

    pub sort: Option<SortPages>,

    pub direction: Option<SortDirection>,

    pub since: Option<DateTime>,

    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListIssuesForRepoOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("milestone", self.milestone)
            .set("state", self.state)
            .set("assignee", &self.assignee)
            .set("creator", &self.creator)
            .set("mentioned", &self.mentioned)
            .set("labels", &self.labels)
            .set("sort", self.sort)
            .set("direction", self.direction)
            .set("since", self.since);
        self.pagination_options.extend_params(params);
    }
}

// If an integer is passed, it should refer to a milestone by its number field. If the string * is
// passed, issues with any milestone are accepted. If the string none is passed, issues without
// milestones are returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneFilter {
    Number(u64),
    Any,
    None,
}

impl ToParam for MilestoneFilter {
    fn to_param(&self) -> ParamValue {
        match self {
            MilestoneFilter::Number(number) => number.to_param(),
            MilestoneFilter::Any => "*".to_param(),
            MilestoneFilter::None => "none".to_param(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ListIssueCommentsOptions {
    pub sort: Option<SortPages>,
    pub direction: Option<SortDirection>,

    /// Only comments updated at or after this time are returned
    pub since: Option<DateTime>,

    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListIssueCommentsOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("sort", self.sort)
            .set("direction", self.direction)
            .set("since", self.since);
        self.pagination_options.extend_params(params);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ListMilestonesOptions {
    pub state: Option<StateFilter>,
    /// `due_on` or `completeness`
    pub sort: Option<&'static str>,
    pub direction: Option<SortDirection>,
    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListMilestonesOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("state", self.state)
            .set("sort", self.sort)
            .set("direction", self.direction);
        self.pagination_options.extend_params(params);
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct IssueRequest {
    /// The title of the issue. Required when creating an issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The contents of the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// State of the issue, only used when updating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Labels to associate with this issue. Send an empty array ([]) to clear all Labels from the
    /// Issue. NOTE: Only users with push access can set labels for new issues. Labels are silently
    /// dropped otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// The number of the milestone to associate this issue with. NOTE: Only users with push
    /// access can set the milestone for new issues. The milestone is silently dropped otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    /// Logins for Users to assign to this issue. Send an empty array ([]) to clear all assignees
    /// from the Issue. NOTE: Only users with push access can set assignees for new issues.
    /// Assignees are silently dropped otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct MilestoneRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<DateTime>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LockReason {
    #[serde(rename = "off-topic")]
    OffTopic,
    #[serde(rename = "too heated")]
    TooHeated,
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(rename = "spam")]
    Spam,
}

display_to_param!(ListIssuesFilter);

/// `IssuesClient` handles communication with the issues related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/issues
pub struct IssuesClient<'a> {
    inner: &'a Client,
}

impl<'a> IssuesClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// List issues assigned to the authenticated user across all visible repositories including
    /// owned repositories, member repositories, and organization repositories.
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#list-issues-assigned-to-the-authenticated-user
    pub async fn list(&self, options: Option<ListIssuesOptions>) -> Result<RawResponse> {
        let params = Params::new().extend_from(&options);
        self.inner.get("/issues", &params).await
    }

    /// List issues across owned and member repositories assigned to the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#list-user-account-issues-assigned-to-the-authenticated-user
    pub async fn list_for_authenticated_user(
        &self,
        options: Option<ListIssuesOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new().extend_from(&options);
        self.inner.get("/user/issues", &params).await
    }

    /// List issues in an organization assigned to the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#list-organization-issues-assigned-to-the-authenticated-user
    pub async fn list_for_org(
        &self,
        org: &str,
        options: Option<ListIssuesOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new().with("org", org).extend_from(&options);
        self.inner.get("/orgs/{org}/issues", &params).await
    }

    /// GitHub API docs: https://docs.github.com/rest/issues/issues#list-repository-issues
    pub async fn list_for_repo(
        &self,
        owner: &str,
        repo: &str,
        options: Option<ListIssuesForRepoOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner.get("/repos/{owner}/{repo}/issues", &params).await
    }

    /// Get an Issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#get-an-issue
    pub async fn get(&self, owner: &str, repo: &str, issue_number: u64) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("issue_number", issue_number);
        self.inner
            .get("/repos/{owner}/{repo}/issues/{issue_number}", &params)
            .await
    }

    /// Create an Issue
    ///
    /// `IssueRequest` must have the field `title` set and `state` unset
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#create-an-issue
    pub async fn create(&self, owner: &str, repo: &str, issue: &IssueRequest) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        let body = Body::json(issue)?;
        self.inner
            .post("/repos/{owner}/{repo}/issues", &params, Some(body))
            .await
    }

    /// Update an Issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#update-an-issue
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        issue: &IssueRequest,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("issue_number", issue_number);
        let body = Body::json(issue)?;
        self.inner
            .patch("/repos/{owner}/{repo}/issues/{issue_number}", &params, Some(body))
            .await
    }

    /// Lock an Issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#lock-an-issue
    pub async fn lock(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        lock_reason: Option<LockReason>,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct LockRequest {
            lock_reason: LockReason,
        }

        let params = repo_params(owner, repo).with("issue_number", issue_number);
        let body = match lock_reason {
            Some(lock_reason) => Some(Body::json(&LockRequest { lock_reason })?),
            None => None,
        };
        self.inner
            .put("/repos/{owner}/{repo}/issues/{issue_number}/lock", &params, body)
            .await
    }

    /// Unlock an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/issues#unlock-an-issue
    pub async fn unlock(&self, owner: &str, repo: &str, issue_number: u64) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("issue_number", issue_number);
        self.inner
            .delete("/repos/{owner}/{repo}/issues/{issue_number}/lock", &params, None)
            .await
    }

    // Assignees
    // https://docs.github.com/rest/issues/assignees

    /// List all available assignees (owners and collaborators) to which issues may be assigned.
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/assignees#list-assignees
    pub async fn list_assignees(
        &self,
        owner: &str,
        repo: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner.get("/repos/{owner}/{repo}/assignees", &params).await
    }

    /// Checks if a user has permission to be assigned to an issue in this repository. GitHub
    /// answers 204 when they can and 404 when they can't.
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/assignees#check-if-a-user-can-be-assigned
    pub async fn check_assignee(
        &self,
        owner: &str,
        repo: &str,
        assignee: &str,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("assignee", assignee);
        self.inner
            .get("/repos/{owner}/{repo}/assignees/{assignee}", &params)
            .await
    }

    /// Add up to 10 assignees to an issue. Users already assigned to an issue are not replaced.
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/assignees#add-assignees-to-an-issue
    pub async fn add_assignees(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        assignees: &[&str],
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct AssigneesRequest<'a> {
            assignees: &'a [&'a str],
        }

        let params = repo_params(owner, repo).with("issue_number", issue_number);
        let body = Body::json(&AssigneesRequest { assignees })?;
        self.inner
            .post(
                "/repos/{owner}/{repo}/issues/{issue_number}/assignees",
                &params,
                Some(body),
            )
            .await
    }

    /// Removes one or more assignees from an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/assignees#remove-assignees-from-an-issue
    pub async fn remove_assignees(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        assignees: &[&str],
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct AssigneesRequest<'a> {
            assignees: &'a [&'a str],
        }

        let params = repo_params(owner, repo).with("issue_number", issue_number);
        let body = Body::json(&AssigneesRequest { assignees })?;
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/{issue_number}/assignees",
                &params,
                Some(body),
            )
            .await
    }

    // Comments
    // https://docs.github.com/rest/issues/comments

    /// List comments on an Issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#list-issue-comments
    pub async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        options: Option<ListIssueCommentsOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("issue_number", issue_number)
            .extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/issues/{issue_number}/comments", &params)
            .await
    }

    /// List comments in a Repository
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#list-issue-comments-for-a-repository
    pub async fn list_comments_for_repo(
        &self,
        owner: &str,
        repo: &str,
        options: Option<ListIssueCommentsOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/issues/comments", &params)
            .await
    }

    /// Get a single Comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#get-an-issue-comment
    pub async fn get_comment(&self, owner: &str, repo: &str, comment_id: u64) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("comment_id", comment_id);
        self.inner
            .get("/repos/{owner}/{repo}/issues/comments/{comment_id}", &params)
            .await
    }

    /// Create a Comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#create-an-issue-comment
    pub async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct CommentRequest<'a> {
            body: &'a str,
        }

        let params = repo_params(owner, repo).with("issue_number", issue_number);
        let body = Body::json(&CommentRequest { body })?;
        self.inner
            .post(
                "/repos/{owner}/{repo}/issues/{issue_number}/comments",
                &params,
                Some(body),
            )
            .await
    }

    /// Update a Comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#update-an-issue-comment
    pub async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct CommentRequest<'a> {
            body: &'a str,
        }

        let params = repo_params(owner, repo).with("comment_id", comment_id);
        let body = Body::json(&CommentRequest { body })?;
        self.inner
            .patch(
                "/repos/{owner}/{repo}/issues/comments/{comment_id}",
                &params,
                Some(body),
            )
            .await
    }

    /// Delete a Comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/comments#delete-an-issue-comment
    pub async fn delete_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("comment_id", comment_id);
        self.inner
            .delete("/repos/{owner}/{repo}/issues/comments/{comment_id}", &params, None)
            .await
    }

    // Events
    // https://docs.github.com/rest/issues/events

    /// GitHub API docs: https://docs.github.com/rest/issues/events#list-issue-events
    pub async fn list_events(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("issue_number", issue_number)
            .extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/issues/{issue_number}/events", &params)
            .await
    }

    // Labels
    // https://docs.github.com/rest/issues/labels

    /// List labels for this Repository
    ///
    /// Github API docs: https://docs.github.com/rest/issues/labels#list-labels-for-a-repository
    pub async fn list_labels_for_repo(
        &self,
        owner: &str,
        repo: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner.get("/repos/{owner}/{repo}/labels", &params).await
    }

    /// Get a single label
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#get-a-label
    pub async fn get_label(&self, owner: &str, repo: &str, name: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("name", name);
        self.inner
            .get("/repos/{owner}/{repo}/labels/{name}", &params)
            .await
    }

    /// Create a label
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#create-a-label
    pub async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        color: &str,
        description: Option<&str>,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct CreateLabelRequest<'a> {
            name: &'a str,
            color: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
        }

        let params = repo_params(owner, repo);
        let body = Body::json(&CreateLabelRequest {
            name,
            color,
            description,
        })?;
        self.inner
            .post("/repos/{owner}/{repo}/labels", &params, Some(body))
            .await
    }

    /// Update a label
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#update-a-label
    pub async fn update_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        new_name: Option<&str>,
        color: Option<&str>,
        description: Option<&str>,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct UpdateLabelRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            new_name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            color: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
        }

        let params = repo_params(owner, repo).with("name", name);
        let body = Body::json(&UpdateLabelRequest {
            new_name,
            color,
            description,
        })?;
        self.inner
            .patch("/repos/{owner}/{repo}/labels/{name}", &params, Some(body))
            .await
    }

    /// Delete a label
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#delete-a-label
    pub async fn delete_label(&self, owner: &str, repo: &str, name: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("name", name);
        self.inner
            .delete("/repos/{owner}/{repo}/labels/{name}", &params, None)
            .await
    }

    /// List all labels on an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#list-labels-for-an-issue
    pub async fn list_labels_on_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("issue_number", issue_number)
            .extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/issues/{issue_number}/labels", &params)
            .await
    }

    /// Add labels to an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#add-labels-to-an-issue
    pub async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[&str],
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct LabelsRequest<'a> {
            labels: &'a [&'a str],
        }

        let params = repo_params(owner, repo).with("issue_number", issue_number);
        let body = Body::json(&LabelsRequest { labels })?;
        self.inner
            .post(
                "/repos/{owner}/{repo}/issues/{issue_number}/labels",
                &params,
                Some(body),
            )
            .await
    }

    /// Replace all labels on an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#set-labels-for-an-issue
    pub async fn set_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[&str],
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct LabelsRequest<'a> {
            labels: &'a [&'a str],
        }

        let params = repo_params(owner, repo).with("issue_number", issue_number);
        let body = Body::json(&LabelsRequest { labels })?;
        self.inner
            .put(
                "/repos/{owner}/{repo}/issues/{issue_number}/labels",
                &params,
                Some(body),
            )
            .await
    }

    /// Remove a label from an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#remove-a-label-from-an-issue
    pub async fn remove_label(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        name: &str,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("issue_number", issue_number)
            .with("name", name);
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/{issue_number}/labels/{name}",
                &params,
                None,
            )
            .await
    }

    /// Removes all labels on an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#remove-all-labels-from-an-issue
    pub async fn remove_all_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("issue_number", issue_number);
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/{issue_number}/labels",
                &params,
                None,
            )
            .await
    }

    /// List labels for every issue in a milestone
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/labels#list-labels-for-issues-in-a-milestone
    pub async fn list_labels_for_milestone(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("milestone_number", milestone_number)
            .extend_from(&options);
        self.inner
            .get(
                "/repos/{owner}/{repo}/milestones/{milestone_number}/labels",
                &params,
            )
            .await
    }

    // Milestones
    // https://docs.github.com/rest/issues/milestones

    /// GitHub API docs: https://docs.github.com/rest/issues/milestones#list-milestones
    pub async fn list_milestones(
        &self,
        owner: &str,
        repo: &str,
        options: Option<ListMilestonesOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/milestones", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/issues/milestones#get-a-milestone
    pub async fn get_milestone(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("milestone_number", milestone_number);
        self.inner
            .get("/repos/{owner}/{repo}/milestones/{milestone_number}", &params)
            .await
    }

    /// `MilestoneRequest` must have the field `title` set
    ///
    /// GitHub API docs: https://docs.github.com/rest/issues/milestones#create-a-milestone
    pub async fn create_milestone(
        &self,
        owner: &str,
        repo: &str,
        milestone: &MilestoneRequest,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        let body = Body::json(milestone)?;
        self.inner
            .post("/repos/{owner}/{repo}/milestones", &params, Some(body))
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/issues/milestones#update-a-milestone
    pub async fn update_milestone(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
        milestone: &MilestoneRequest,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("milestone_number", milestone_number);
        let body = Body::json(milestone)?;
        self.inner
            .patch(
                "/repos/{owner}/{repo}/milestones/{milestone_number}",
                &params,
                Some(body),
            )
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/issues/milestones#delete-a-milestone
    pub async fn delete_milestone(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("milestone_number", milestone_number);
        self.inner
            .delete(
                "/repos/{owner}/{repo}/milestones/{milestone_number}",
                &params,
                None,
            )
            .await
    }
}

#[cfg(test)]
mod test {
    use super::{ListIssuesForRepoOptions, MilestoneFilter};
    use crate::client::{ParamValue, Params, StateFilter};

    #[test]
    fn repo_issue_filters() {
        let options = ListIssuesForRepoOptions {
            milestone: Some(MilestoneFilter::Any),
            state: Some(StateFilter::All),
            labels: vec!["bug".to_owned(), "ui".to_owned()],
            ..Default::default()
        };
        let params = Params::new().extend_from(&options);

        assert_eq!(params.get("milestone"), Some(&ParamValue::Scalar("*".to_owned())));
        assert_eq!(params.get("state"), Some(&ParamValue::Scalar("all".to_owned())));
        assert_eq!(params.get("creator"), Some(&ParamValue::Absent));
        assert_eq!(params.get("page"), Some(&ParamValue::Absent));
    }

    #[test]
    fn milestone_filter_wire_format() {
        use crate::client::ToParam;

        assert_eq!(
            MilestoneFilter::Number(3).to_param(),
            ParamValue::Scalar("3".to_owned())
        );
        assert_eq!(
            MilestoneFilter::None.to_param(),
            ParamValue::Scalar("none".to_owned())
        );
    }
}
