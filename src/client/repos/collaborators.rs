use super::RepositoryClient;
use crate::client::{
    repo_params, Body, ExtendParams, PaginationOptions, Params, RawResponse, Result,
};
use serde::Serialize;

#[derive(Clone, Debug, Default)]
pub struct ListCollaboratorsOptions {
    /// `outside`, `direct` or `all`
    pub affiliation: Option<String>,

    /// Only collaborators with this permission, e.g. `push` or `admin`
    pub permission: Option<String>,

    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListCollaboratorsOptions {
    fn extend_params(&self, params: &mut Params) {
        params
            .set("affiliation", &self.affiliation)
            .set("permission", &self.permission);
        self.pagination_options.extend_params(params);
    }
}

// Implementation for the collaborators endpoints
// https://docs.github.com/rest/collaborators/collaborators
impl RepositoryClient<'_> {
    /// List Collaborators
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/collaborators#list-repository-collaborators
    pub async fn list_collaborators(
        &self,
        owner: &str,
        repo: &str,
        options: Option<ListCollaboratorsOptions>,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).extend_from(&options);
        self.inner
            .get("/repos/{owner}/{repo}/collaborators", &params)
            .await
    }

    /// Check if a user is a collaborator. GitHub answers 204 if so and 404 if not.
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/collaborators#check-if-a-user-is-a-repository-collaborator
    pub async fn check_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("username", username);
        self.inner
            .get("/repos/{owner}/{repo}/collaborators/{username}", &params)
            .await
    }

    /// Checks the repository permission of a collaborator. The possible repository permissions are
    /// admin, write, read, and none.
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/collaborators#get-repository-permissions-for-a-user
    pub async fn get_collaborator_permission_level(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("username", username);
        self.inner
            .get(
                "/repos/{owner}/{repo}/collaborators/{username}/permission",
                &params,
            )
            .await
    }

    /// Add a repository collaborator, or update their permission. GitHub sends an invitation
    /// the user has to accept.
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/collaborators#add-a-repository-collaborator
    pub async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
        permission: Option<&str>,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct AddCollaboratorRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            permission: Option<&'a str>,
        }

        let params = repo_params(owner, repo).with("username", username);
        let body = Body::json(&AddCollaboratorRequest { permission })?;
        self.inner
            .put(
                "/repos/{owner}/{repo}/collaborators/{username}",
                &params,
                Some(body),
            )
            .await
    }

    /// Remove a repository collaborator
    ///
    /// GitHub API docs: https://docs.github.com/rest/collaborators/collaborators#remove-a-repository-collaborator
    pub async fn remove_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
    ) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("username", username);
        self.inner
            .delete(
                "/repos/{owner}/{repo}/collaborators/{username}",
                &params,
                None,
            )
            .await
    }
}
