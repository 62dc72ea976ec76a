use crate::{
    client::{Body, Client, PaginationOptions, Params, RawResponse, Result},
    DateTime,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, Serialize)]
pub struct GistFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// New name for the file when updating a gist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl GistFile {
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: Some(content.into()),
            filename: None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GistRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Only honoured on creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    /// Keyed by file name. On update, a `None` entry deletes that file from the gist.
    pub files: BTreeMap<String, Option<GistFile>>,
}

/// `GistsClient` handles communication with the gist related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/gists
pub struct GistsClient<'a> {
    inner: &'a Client,
}

impl<'a> GistsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// List gists for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#list-gists-for-the-authenticated-user
    pub async fn list(
        &self,
        since: Option<DateTime>,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new().with("since", since).extend_from(&options);
        self.inner.get("/gists", &params).await
    }

    /// Create a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#create-a-gist
    pub async fn create(&self, gist: &GistRequest) -> Result<RawResponse> {
        let body = Body::json(gist)?;
        self.inner.post("/gists", &Params::new(), Some(body)).await
    }

    /// Get a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#get-a-gist
    pub async fn get(&self, gist_id: &str) -> Result<RawResponse> {
        let params = Params::new().with("gist_id", gist_id);
        self.inner.get("/gists/{gist_id}", &params).await
    }

    /// Update a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#update-a-gist
    pub async fn update(&self, gist_id: &str, gist: &GistRequest) -> Result<RawResponse> {
        let params = Params::new().with("gist_id", gist_id);
        let body = Body::json(gist)?;
        self.inner
            .patch("/gists/{gist_id}", &params, Some(body))
            .await
    }

    /// Delete a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#delete-a-gist
    pub async fn delete(&self, gist_id: &str) -> Result<RawResponse> {
        let params = Params::new().with("gist_id", gist_id);
        self.inner.delete("/gists/{gist_id}", &params, None).await
    }

    /// Star a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#star-a-gist
    pub async fn star(&self, gist_id: &str) -> Result<RawResponse> {
        let params = Params::new().with("gist_id", gist_id);
        self.inner
            .put("/gists/{gist_id}/star", &params, None)
            .await
    }

    /// Unstar a gist
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#unstar-a-gist
    pub async fn unstar(&self, gist_id: &str) -> Result<RawResponse> {
        let params = Params::new().with("gist_id", gist_id);
        self.inner
            .delete("/gists/{gist_id}/star", &params, None)
            .await
    }

    /// Check if a gist is starred. GitHub answers 204 if it is and 404 if not.
    ///
    /// GitHub API docs: https://docs.github.com/rest/gists/gists#check-if-a-gist-is-starred
    pub async fn check_starred(&self, gist_id: &str) -> Result<RawResponse> {
        let params = Params::new().with("gist_id", gist_id);
        self.inner.get("/gists/{gist_id}/star", &params).await
    }
}

#[cfg(test)]
mod test {
    use super::{GistFile, GistRequest};
    use serde_json::json;

    #[test]
    fn removed_files_serialize_as_null() {
        let mut gist = GistRequest::default();
        gist.files
            .insert("hello.rs".to_owned(), Some(GistFile::new("fn main() {}")));
        gist.files.insert("old.txt".to_owned(), None);

        assert_eq!(
            serde_json::to_value(&gist).unwrap(),
            json!({
                "files": {
                    "hello.rs": { "content": "fn main() {}" },
                    "old.txt": null,
                }
            })
        );
    }
}
