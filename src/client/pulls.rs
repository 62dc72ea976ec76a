use crate::client::{
    repo_params, Body, Client, ExtendParams, PaginationOptions, Params, RawResponse, Result,
    SortDirection, SortPages, StateFilter, Verb, MEDIA_TYPE_DIFF, MEDIA_TYPE_PATCH,
};
use crate::DateTime;
use serde::Serialize;

#[derive(Clone, Debug, Default)]
pub struct ListPullsOptions {
    /// Indicates the state of the pull requests to return
    pub state: Option<StateFilter>,

    /// Filter pulls by head user or head organization and branch name in the format of
    /// user:ref-name or organization:ref-name. For example: github:new-script-format or
    /// octocat:test-branch.
    pub head: Option<String>,

    /// Filter pulls by base branch name. Example: gh-pages.
    pub base: Option<String>,

    /// What to sort results by. `popularity` and `long-running` are also accepted by GitHub.
    pub sort: Option<String>,

    pub direction: Option<SortDirection>,

    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListPullsOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("state", self.state)
            .set("head", &self.head)
            .set("base", &self.base)
            .set("sort", &self.sort)
            .set("direction", self.direction);
        self.pagination_options.extend_params(params);
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct NewPullRequest {
    /// The title of the Pull Request
    pub title: String,

    /// The contents of the pull request cover letter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// The name of the branch where your changes are implemented. For cross-repository pull
    /// requests in the same network, namespace head with a user like this: username:branch.
    pub head: String,

    /// The name of the branch you want the changes pulled into. This should be an existing branch
    /// on the current repository. You cannot submit a pull request to one repository that requests
    /// a merge to a base of another repository.
    pub base: String,

    /// Indicates whether maintainers can modify the pull request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,

    /// Indicates whether the pull request is a draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdatePullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// `open` or `closed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMethod {
    Merge,
    Squash,
    Rebase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEvent {
    Approve,
    RequestChanges,
    Comment,
}

// A comment on part of a PullRequest review
#[derive(Clone, Debug, Default, Serialize)]
pub struct DraftReviewComment {
    /// The relative path to the file that necessitates a review comment.
    pub path: String,

    /// The position in the diff where you want to add a review comment. Note this value is not the
    /// same as the line number in the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,

    /// Text of the review comment
    pub body: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ReviewRequest {
    /// The SHA of the commit that needs a review. Defaults to the most recent commit in the pull
    /// request when you do not specify a value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,

    /// Required when using REQUEST_CHANGES or COMMENT for the event parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// By leaving this blank, you set the review action state to PENDING, which means you will
    /// need to submit the pull request review when you are ready.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<ReviewEvent>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<DraftReviewComment>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ListReviewCommentsOptions {
    pub sort: Option<SortPages>,
    pub direction: Option<SortDirection>,

    /// Only comments updated at or after this time are returned
    pub since: Option<DateTime>,

    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListReviewCommentsOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("sort", self.sort)
            .set("direction", self.direction)
            .set("since", self.since);
        self.pagination_options.extend_params(params);
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ReviewCommentRequest {
    /// Required. The text of the review comment.
    pub body: String,

    /// Required. The SHA of the commit needing a comment.
    pub commit_id: String,

    /// Required. The relative path to the file that necessitates a comment.
    pub path: String,

    /// In a split diff view, the side of the diff that the pull request's changes appear on.
    /// Can be LEFT or RIGHT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,

    /// The line of the blob in the pull request diff that the comment applies to. For a
    /// multi-line comment, the last line of the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,

    /// The first line in the pull request diff that a multi-line comment applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_side: Option<String>,

    /// The id of the review comment to reply to. All other fields but `body` are ignored when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<u64>,
}

#[derive(Debug, Serialize)]
struct ReviewersRequest<'a> {
    #[serde(skip_serializing_if = "no_reviewers")]
    reviewers: &'a [&'a str],
    #[serde(skip_serializing_if = "no_reviewers")]
    team_reviewers: &'a [&'a str],
}

fn no_reviewers(reviewers: &&[&str]) -> bool {
    reviewers.is_empty()
}

/// `PullsClient` handles communication with the pull request related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/pulls
pub struct PullsClient<'a> {
    inner: &'a Client,
}

impl<'a> PullsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn pull_params(owner: &str, repo: &str, pull_number: u64) -> Params {
        repo_params(owner, repo).with("pull_number", pull_number)
    }

    /// List pull requests
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#list-pull-requests
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        options: Option<ListPullsOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner.get("/repos/{owner}/{repo}/pulls", &params).await
    }

    /// Get a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#get-a-pull-request
    pub async fn get(&self, owner: &str, repo: &str, pull_number: u64) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number);
        self.inner
            .get("/repos/{owner}/{repo}/pulls/{pull_number}", &params)
            .await
    }

    /// Get a pull request as a unified diff
    pub async fn get_diff(&self, owner: &str, repo: &str, pull_number: u64) -> Result<RawResponse> {
        self.get_as(owner, repo, pull_number, MEDIA_TYPE_DIFF).await
    }

    /// Get a pull request formatted as a series of patches
    pub async fn get_patch(&self, owner: &str, repo: &str, pull_number: u64) -> Result<RawResponse> {
        self.get_as(owner, repo, pull_number, MEDIA_TYPE_PATCH).await
    }

    async fn get_as(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        media_type: &'static str,
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number);
        let response = self
            .inner
            .request(Verb::Get, "/repos/{owner}/{repo}/pulls/{pull_number}", &params)?
            .header(reqwest::header::ACCEPT, media_type)
            .send()
            .await?;

        Ok(response)
    }

    /// Create a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#create-a-pull-request
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        pull_request: &NewPullRequest,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo);
        let body = Body::json(pull_request)?;
        self.inner
            .post("/repos/{owner}/{repo}/pulls", &params, Some(body))
            .await
    }

    /// Update a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#update-a-pull-request
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        pull_request: &UpdatePullRequest,
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number);
        let body = Body::json(pull_request)?;
        self.inner
            .patch("/repos/{owner}/{repo}/pulls/{pull_number}", &params, Some(body))
            .await
    }

    /// Updates the pull request branch with the latest upstream changes by merging HEAD from the
    /// base branch into the pull request branch.
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#update-a-pull-request-branch
    pub async fn update_branch(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        expected_head_sha: Option<&str>,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct UpdateBranchRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            expected_head_sha: Option<&'a str>,
        }

        let params = Self::pull_params(owner, repo, pull_number);
        let body = Body::json(&UpdateBranchRequest { expected_head_sha })?;
        self.inner
            .put(
                "/repos/{owner}/{repo}/pulls/{pull_number}/update-branch",
                &params,
                Some(body),
            )
            .await
    }

    /// List commits on a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#list-commits-on-a-pull-request
    pub async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/pulls/{pull_number}/commits", &params)
            .await
    }

    /// List files on a pull request
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#list-pull-requests-files
    pub async fn list_files(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/pulls/{pull_number}/files", &params)
            .await
    }

    /// Check if a pull request has been merged. GitHub answers 204 if it has and 404 if not.
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#check-if-a-pull-request-has-been-merged
    pub async fn check_if_merged(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number);
        self.inner
            .get("/repos/{owner}/{repo}/pulls/{pull_number}/merge", &params)
            .await
    }

    /// Merge a pull request (hit the Merge Button)
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/pulls#merge-a-pull-request
    pub async fn merge(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        commit_title: Option<&str>,
        commit_message: Option<&str>,
        sha: Option<&str>,
        merge_method: Option<MergeMethod>,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct MergeRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            commit_title: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            commit_message: Option<&'a str>,
            /// SHA that pull request head must match to allow merge
            #[serde(skip_serializing_if = "Option::is_none")]
            sha: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            merge_method: Option<MergeMethod>,
        }

        let params = Self::pull_params(owner, repo, pull_number);
        let body = Body::json(&MergeRequest {
            commit_title,
            commit_message,
            sha,
            merge_method,
        })?;
        self.inner
            .put(
                "/repos/{owner}/{repo}/pulls/{pull_number}/merge",
                &params,
                Some(body),
            )
            .await
    }

    // Review requests
    // https://docs.github.com/rest/pulls/review-requests

    /// GitHub API docs: https://docs.github.com/rest/pulls/review-requests#get-all-requested-reviewers-for-a-pull-request
    pub async fn list_requested_reviewers(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number);
        self.inner
            .get(
                "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
                &params,
            )
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/pulls/review-requests#request-reviewers-for-a-pull-request
    pub async fn request_reviewers(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        reviewers: &[&str],
        team_reviewers: &[&str],
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number);
        let body = Body::json(&ReviewersRequest {
            reviewers,
            team_reviewers,
        })?;
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
                &params,
                Some(body),
            )
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/pulls/review-requests#remove-requested-reviewers-from-a-pull-request
    pub async fn remove_requested_reviewers(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        reviewers: &[&str],
        team_reviewers: &[&str],
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number);
        let body = Body::json(&ReviewersRequest {
            reviewers,
            team_reviewers,
        })?;
        self.inner
            .delete(
                "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
                &params,
                Some(body),
            )
            .await
    }

    // Reviews
    // https://docs.github.com/rest/pulls/reviews

    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#list-reviews-for-a-pull-request
    pub async fn list_reviews(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/pulls/{pull_number}/reviews", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#create-a-review-for-a-pull-request
    pub async fn create_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review: &ReviewRequest,
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number);
        let body = Body::json(review)?;
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls/{pull_number}/reviews",
                &params,
                Some(body),
            )
            .await
    }

    /// Submit a pending review
    ///
    /// GitHub API docs: https://docs.github.com/rest/pulls/reviews#submit-a-review-for-a-pull-request
    pub async fn submit_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review_id: u64,
        event: ReviewEvent,
        body: Option<&str>,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct SubmitReviewRequest<'a> {
            event: ReviewEvent,
            #[serde(skip_serializing_if = "Option::is_none")]
            body: Option<&'a str>,
        }

        let params = Self::pull_params(owner, repo, pull_number).with("review_id", review_id);
        let body = Body::json(&SubmitReviewRequest { event, body })?;
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}/events",
                &params,
                Some(body),
            )
            .await
    }

    // Review comments
    // https://docs.github.com/rest/pulls/comments

    /// GitHub API docs: https://docs.github.com/rest/pulls/comments#list-review-comments-on-a-pull-request
    pub async fn list_review_comments(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        options: Option<ListReviewCommentsOptions>,
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/pulls/{pull_number}/comments", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/pulls/comments#create-a-review-comment-for-a-pull-request
    pub async fn create_review_comment(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        comment: &ReviewCommentRequest,
    ) -> Result<RawResponse> {
        let params = Self::pull_params(owner, repo, pull_number);
        let body = Body::json(comment)?;
        self.inner
            .post(
                "/repos/{owner}/{repo}/pulls/{pull_number}/comments",
                &params,
                Some(body),
            )
            .await
    }
}

#[cfg(test)]
mod test {
    use super::{ReviewEvent, ReviewRequest, ReviewersRequest};
    use serde_json::json;

    #[test]
    fn review_request_skips_unset_fields() {
        let review = ReviewRequest {
            event: Some(ReviewEvent::RequestChanges),
            body: Some("please rebase".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&review).unwrap(),
            json!({ "event": "REQUEST_CHANGES", "body": "please rebase" })
        );
    }

    #[test]
    fn empty_reviewer_lists_are_omitted() {
        let request = ReviewersRequest {
            reviewers: &["octocat"],
            team_reviewers: &[],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "reviewers": ["octocat"] })
        );
    }
}
