use crate::client::{
    display_to_param, repo_params, Body, Client, ExtendParams, PaginationOptions, Params,
    RawResponse, Result,
};
use serde::Serialize;
use strum::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
pub enum ReactionContent {
    #[serde(rename = "+1")]
    #[strum(serialize = "+1")]
    PlusOne,
    #[serde(rename = "-1")]
    #[strum(serialize = "-1")]
    MinusOne,
    #[serde(rename = "laugh")]
    #[strum(serialize = "laugh")]
    Laugh,
    #[serde(rename = "confused")]
    #[strum(serialize = "confused")]
    Confused,
    #[serde(rename = "heart")]
    #[strum(serialize = "heart")]
    Heart,
    #[serde(rename = "hooray")]
    #[strum(serialize = "hooray")]
    Hooray,
    #[serde(rename = "rocket")]
    #[strum(serialize = "rocket")]
    Rocket,
    #[serde(rename = "eyes")]
    #[strum(serialize = "eyes")]
    Eyes,
}

display_to_param!(ReactionContent);

#[derive(Debug, Serialize)]
struct ReactionsRequest {
    content: ReactionContent,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ListReactionsOptions {
    /// Only list reactions of this type
    pub content: Option<ReactionContent>,

    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListReactionsOptions {
    fn extend_params(&self, params: &mut Params) {
        params.set("content", self.content);
        self.pagination_options.extend_params(params);
    }
}

/// `ReactionsClient` handles communication with the reactions related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/reactions
pub struct ReactionsClient<'a> {
    inner: &'a Client,
}

impl<'a> ReactionsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    async fn list_reactions(
        &self,
        route: &str,
        params: Params,
        options: Option<ListReactionsOptions>,
    ) -> Result<RawResponse> {
        let params = params.extend_from(&options);
        self.inner.get(route, &params).await
    }

    async fn create_reaction(
        &self,
        route: &str,
        params: Params,
        content: ReactionContent,
    ) -> Result<RawResponse> {
        let body = Body::json(&ReactionsRequest { content })?;
        self.inner.post(route, &params, Some(body)).await
    }

    /// List the reactions for a commit comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#list-reactions-for-a-commit-comment
    pub async fn list_for_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        options: Option<ListReactionsOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("comment_id", comment_id);
        self.list_reactions(
            "/repos/{owner}/{repo}/comments/{comment_id}/reactions",
            params,
            options,
        )
        .await
    }

    /// Create a reaction for a commit comment
    ///
    /// Note that if a reaction of the provided type already exists,
    /// GitHub answers with the existing reaction.
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#create-reaction-for-a-commit-comment
    pub async fn create_for_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        content: ReactionContent,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("comment_id", comment_id);
        self.create_reaction(
            "/repos/{owner}/{repo}/comments/{comment_id}/reactions",
            params,
            content,
        )
        .await
    }

    /// Delete a reaction for a commit comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#delete-a-commit-comment-reaction
    pub async fn delete_for_commit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        reaction_id: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("comment_id", comment_id)
            .with("reaction_id", reaction_id);
        self.inner
            .delete(
                "/repos/{owner}/{repo}/comments/{comment_id}/reactions/{reaction_id}",
                &params,
                None,
            )
            .await
    }

    /// List the reactions for an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#list-reactions-for-an-issue
    pub async fn list_for_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        options: Option<ListReactionsOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("issue_number", issue_number);
        self.list_reactions(
            "/repos/{owner}/{repo}/issues/{issue_number}/reactions",
            params,
            options,
        )
        .await
    }

    /// Create a reaction for an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#create-reaction-for-an-issue
    pub async fn create_for_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        content: ReactionContent,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("issue_number", issue_number);
        self.create_reaction(
            "/repos/{owner}/{repo}/issues/{issue_number}/reactions",
            params,
            content,
        )
        .await
    }

    /// Delete a reaction for an issue
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#delete-an-issue-reaction
    pub async fn delete_for_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        reaction_id: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("issue_number", issue_number)
            .with("reaction_id", reaction_id);
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/{issue_number}/reactions/{reaction_id}",
                &params,
                None,
            )
            .await
    }

    /// List the reactions for an issue comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#list-reactions-for-an-issue-comment
    pub async fn list_for_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        options: Option<ListReactionsOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("comment_id", comment_id);
        self.list_reactions(
            "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions",
            params,
            options,
        )
        .await
    }

    /// Create a reaction for an issue comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#create-reaction-for-an-issue-comment
    pub async fn create_for_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        content: ReactionContent,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("comment_id", comment_id);
        self.create_reaction(
            "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions",
            params,
            content,
        )
        .await
    }

    /// Delete a reaction for an issue comment
    ///
    /// GitHub API docs: https://docs.github.com/rest/reactions/reactions#delete-an-issue-comment-reaction
    pub async fn delete_for_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        reaction_id: u64,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo)
            .with("comment_id", comment_id)
            .with("reaction_id", reaction_id);
        self.inner
            .delete(
                "/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions/{reaction_id}",
                &params,
                None,
            )
            .await
    }
}

#[cfg(test)]
mod test {
    use super::{ListReactionsOptions, ReactionContent, ReactionsRequest};
    use crate::client::{ParamValue, Params};

    #[test]
    fn content_wire_names() {
        assert_eq!(
            serde_json::to_value(&ReactionsRequest {
                content: ReactionContent::PlusOne
            })
            .unwrap(),
            serde_json::json!({ "content": "+1" })
        );

        let params = Params::new().extend_from(&ListReactionsOptions {
            content: Some(ReactionContent::Hooray),
            ..Default::default()
        });
        assert_eq!(
            params.get("content"),
            Some(&ParamValue::Scalar("hooray".to_owned()))
        );
    }
}
