use crate::client::{repo_params, Body, Client, RawResponse, Result};
use serde::Serialize;

/// One entry of a tree being created
#[derive(Clone, Debug, Serialize)]
pub struct TreeEntry {
    /// The file referenced in the tree
    pub path: String,

    /// `100644` for a file, `100755` for an executable, `040000` for a subdirectory, `160000` for
    /// a submodule or `120000` for a symlink
    pub mode: String,

    /// `blob`, `tree` or `commit`
    #[serde(rename = "type")]
    pub kind: String,

    /// SHA of an existing object. Exclusive with `content`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,

    /// Contents for a new blob. Exclusive with `sha`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// `GitClient` handles communication with the git database related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/git
pub struct GitClient<'a> {
    inner: &'a Client,
}

impl<'a> GitClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    // References

    /// Get a reference. `ref_name` is written without the `refs/` prefix, e.g. `heads/main`.
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/refs#get-a-reference
    pub async fn get_ref(&self, owner: &str, repo: &str, ref_name: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("ref", ref_name);
        self.inner
            .get("/repos/{owner}/{repo}/git/ref/{+ref}", &params)
            .await
    }

    /// Create a reference. `ref_name` is fully qualified, e.g. `refs/heads/main`.
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/refs#create-a-reference
    pub async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_name: &str,
        sha: &str,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct CreateRefRequest<'a> {
            #[serde(rename = "ref")]
            ref_name: &'a str,
            sha: &'a str,
        }

        let params = repo_params(owner, repo);
        let body = Body::json(&CreateRefRequest { ref_name, sha })?;
        self.inner
            .post("/repos/{owner}/{repo}/git/refs", &params, Some(body))
            .await
    }

    /// Update a reference
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/refs#update-a-reference
    pub async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_name: &str,
        sha: &str,
        force: bool,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct UpdateRefRequest<'a> {
            sha: &'a str,
            force: bool,
        }

        let params = repo_params(owner, repo).with("ref", ref_name);
        let body = Body::json(&UpdateRefRequest { sha, force })?;
        self.inner
            .patch("/repos/{owner}/{repo}/git/refs/{+ref}", &params, Some(body))
            .await
    }

    /// Delete a reference
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/refs#delete-a-reference
    pub async fn delete_ref(&self, owner: &str, repo: &str, ref_name: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("ref", ref_name);
        self.inner
            .delete("/repos/{owner}/{repo}/git/refs/{+ref}", &params, None)
            .await
    }

    // Commits

    /// GitHub API docs: https://docs.github.com/rest/git/commits#get-a-commit-object
    pub async fn get_commit(&self, owner: &str, repo: &str, commit_sha: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("commit_sha", commit_sha);
        self.inner
            .get("/repos/{owner}/{repo}/git/commits/{commit_sha}", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/git/commits#create-a-commit
    pub async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        message: &str,
        tree: &str,
        parents: &[&str],
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct CreateCommitRequest<'a> {
            message: &'a str,
            tree: &'a str,
            parents: &'a [&'a str],
        }

        let params = repo_params(owner, repo);
        let body = Body::json(&CreateCommitRequest {
            message,
            tree,
            parents,
        })?;
        self.inner
            .post("/repos/{owner}/{repo}/git/commits", &params, Some(body))
            .await
    }

    // Trees

    /// Get a tree, walking subtrees as well when `recursive` is set
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/trees#get-a-tree
    pub async fn get_tree(
        &self,
        owner: &str,
        repo: &str,
        tree_sha: &str,
        recursive: bool,
    ) -> Result<RawResponse> {
        // GitHub treats any value, including "false", as enabling recursion
        let params = repo_params(owner, repo)
            .with("tree_sha", tree_sha)
            .with("recursive", if recursive { Some(1u8) } else { None });
        self.inner
            .get("/repos/{owner}/{repo}/git/trees/{tree_sha}", &params)
            .await
    }

    /// GitHub API docs: https://docs.github.com/rest/git/trees#create-a-tree
    pub async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: Option<&str>,
        tree: &[TreeEntry],
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct CreateTreeRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            base_tree: Option<&'a str>,
            tree: &'a [TreeEntry],
        }

        let params = repo_params(owner, repo);
        let body = Body::json(&CreateTreeRequest { base_tree, tree })?;
        self.inner
            .post("/repos/{owner}/{repo}/git/trees", &params, Some(body))
            .await
    }

    // Blobs

    /// GitHub API docs: https://docs.github.com/rest/git/blobs#get-a-blob
    pub async fn get_blob(&self, owner: &str, repo: &str, file_sha: &str) -> Result<RawResponse> {
        let params = repo_params(owner, repo).with("file_sha", file_sha);
        self.inner
            .get("/repos/{owner}/{repo}/git/blobs/{file_sha}", &params)
            .await
    }

    /// Create a blob. `encoding` is `utf-8` or `base64`.
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/blobs#create-a-blob
    pub async fn create_blob(
        &self,
        owner: &str,
        repo: &str,
        content: &str,
        encoding: Option<&str>,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct CreateBlobRequest<'a> {
            content: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            encoding: Option<&'a str>,
        }

        let params = repo_params(owner, repo);
        let body = Body::json(&CreateBlobRequest { content, encoding })?;
        self.inner
            .post("/repos/{owner}/{repo}/git/blobs", &params, Some(body))
            .await
    }

    // Tags

    /// Create an annotated tag object. This does not create the `refs/tags/...` reference, which
    /// has to be made with `create_ref`.
    ///
    /// GitHub API docs: https://docs.github.com/rest/git/tags#create-a-tag-object
    pub async fn create_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
        message: &str,
        object: &str,
        kind: &str,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct CreateTagRequest<'a> {
            tag: &'a str,
            message: &'a str,
            object: &'a str,
            #[serde(rename = "type")]
            kind: &'a str,
        }

        let params = repo_params(owner, repo);
        let body = Body::json(&CreateTagRequest {
            tag,
            message,
            object,
            kind,
        })?;
        self.inner
            .post("/repos/{owner}/{repo}/git/tags", &params, Some(body))
            .await
    }
}
