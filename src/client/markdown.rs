use crate::client::{Body, Client, Params, RawResponse, Result, Verb};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
struct MarkdownRequest<'a> {
    text: &'a str,
    mode: MarkdownMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkdownMode {
    /// Plain Markdown
    Markdown,
    /// Github Flavored Markdown
    Gfm,
}

/// `MarkdownClient` handles communication with the markdown related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/markdown
pub struct MarkdownClient<'a> {
    inner: &'a Client,
}

impl<'a> MarkdownClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Render a Markdown document. In `Gfm` mode a repository context (`Some(("owner", "repo"))`)
    /// is used to link issue references and mentions.
    ///
    /// GitHub API docs: https://docs.github.com/rest/markdown/markdown#render-a-markdown-document
    pub async fn render(
        &self,
        text: &str,
        mode: MarkdownMode,
        context: Option<(&str, &str)>,
    ) -> Result<RawResponse> {
        let context = context.map(|(owner, repo)| format!("{}/{}", owner, repo));
        let body = Body::json(&MarkdownRequest {
            text,
            mode,
            context,
        })?;

        self.inner.post("/markdown", &Params::new(), Some(body)).await
    }

    /// Render a Markdown document in raw mode. The document is sent as plain text and rendered
    /// like a README.md file, without repository context.
    ///
    /// GitHub API docs: https://docs.github.com/rest/markdown/markdown#render-a-markdown-document-in-raw-mode
    pub async fn render_raw(&self, text: &str) -> Result<RawResponse> {
        let response = self
            .inner
            .request(Verb::Post, "/markdown/raw", &Params::new())?
            .header(CONTENT_TYPE, "text/plain")
            .body(text.to_owned())
            .send()
            .await?;

        Ok(response)
    }
}

#[cfg(test)]
mod test {
    use super::{MarkdownMode, MarkdownRequest};
    use serde_json::json;

    #[test]
    fn gfm_request_with_context() {
        let request = MarkdownRequest {
            text: "Hello **world** #1",
            mode: MarkdownMode::Gfm,
            context: Some("acme/widgets".to_owned()),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "text": "Hello **world** #1", "mode": "gfm", "context": "acme/widgets" })
        );
    }
}
