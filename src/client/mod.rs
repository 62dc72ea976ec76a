use log::{debug, warn};
use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Client as ReqwestClient, RequestBuilder,
};
use serde::Serialize;
use std::time::Duration;
use url::Url;

mod actions;
mod checks;
mod error;
mod gists;
mod git;
mod issues;
mod licenses;
mod markdown;
mod meta;
mod options;
mod orgs;
mod params;
mod pulls;
mod rate_limit;
mod reactions;
mod repos;
mod route;
mod search;
mod users;
mod verb;

pub use actions::{ActionsClient, ListWorkflowRunsOptions, WorkflowRunStatus};
pub use checks::{
    CheckRunConclusion, CheckRunOutput, CheckRunRequest, CheckRunStatus, ChecksClient,
    ListCheckRunsOptions, ListCheckSuitesOptions,
};
pub use error::{Error, InvalidHeader, Result};
pub use gists::{GistFile, GistRequest, GistsClient};
pub use git::{GitClient, TreeEntry};
pub use issues::{
    IssueRequest, IssuesClient, ListIssueCommentsOptions, ListIssuesFilter,
    ListIssuesForRepoOptions, ListIssuesOptions, ListMilestonesOptions, LockReason,
    MilestoneFilter, MilestoneRequest,
};
pub use licenses::LicensesClient;
pub use markdown::{MarkdownClient, MarkdownMode};
pub use meta::MetaClient;
pub use options::{PaginationOptions, SortDirection, SortPages, StateFilter};
pub use orgs::{
    ListMembersOptions, MemberFilter, MemberRoleFilter, MembershipRole, OrgsClient,
    UpdateOrgRequest,
};
pub use params::{ExtendParams, ListStyle, ParamValue, Params, ToParam};
pub use pulls::{
    DraftReviewComment, ListPullsOptions, ListReviewCommentsOptions, MergeMethod, NewPullRequest,
    PullsClient, ReviewCommentRequest, ReviewEvent, ReviewRequest, UpdatePullRequest,
};
pub use rate_limit::RateLimitClient;
pub use reactions::{ListReactionsOptions, ReactionContent, ReactionsClient};
pub use repos::{
    CreateStatusRequest, ListCollaboratorsOptions, ListCommitsOptions, ListReposOptions,
    ReleaseRequest, RepositoryClient, RepositoryRequest, StatusState,
};
pub use route::{ResolvedRoute, Route};
pub use search::{SearchClient, SearchOptions, SearchOrder};
pub use users::{UpdateUserRequest, UsersClient};
pub use verb::Verb;

pub(crate) use params::display_to_param;

/// The response handed back by the transport, untouched
pub type RawResponse = reqwest::Response;

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const DEFAULT_API_VERSION: &str = "2022-11-28";

const HEADER_API_VERSION: &str = "X-GitHub-Api-Version";

const MEDIA_TYPE_JSON: &str = "application/vnd.github+json";
const MEDIA_TYPE_RAW: &str = "application/vnd.github.raw+json";
const MEDIA_TYPE_DIFF: &str = "application/vnd.github.diff";
const MEDIA_TYPE_PATCH: &str = "application/vnd.github.patch";

/// Parameters shared by every `/repos/{owner}/{repo}` route
fn repo_params(owner: &str, repo: &str) -> Params {
    Params::new().with("owner", owner).with("repo", repo)
}

/// A structured request payload, sent as JSON
#[derive(Clone, Debug, PartialEq)]
pub struct Body(serde_json::Value);

impl Body {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Body(serde_json::to_value(value)?))
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body(value)
    }
}

#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    github_api_token: Option<String>,
    api_version: Option<String>,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            github_api_token: None,
            api_version: None,
            timeout: None,
            default_headers: Vec::new(),
        }
    }

    /// Base URL to use for API requests. Defaults to the public GitHub API, but can be
    /// overridden for use with GitHub Enterprise, e.g. `https://ghe.example.com/api/v3`.
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn github_api_token<S: Into<String>>(mut self, github_api_token: S) -> Self {
        self.github_api_token = Some(github_api_token.into());
        self
    }

    /// Value of the `X-GitHub-Api-Version` header. Defaults to `2022-11-28`.
    pub fn api_version<S: Into<String>>(mut self, api_version: S) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request. Validated by `build`.
    pub fn default_header<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(format!("`{}` cannot be used as a base url", base_url).into());
        }

        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());
        let api_version = self
            .api_version
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_owned());

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(MEDIA_TYPE_JSON));
        headers.insert(HEADER_API_VERSION, HeaderValue::from_str(&api_version)?);

        if let Some(token) = &self.github_api_token {
            let mut value = HeaderValue::from_str(&format!("token {}", token))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        for (name, value) in &self.default_headers {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        let mut client_builder = ReqwestClient::builder()
            .user_agent(&user_agent)
            .default_headers(headers);

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build()?;

        Ok(Client { base_url, client })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Client {
    /// Base URL to use for API requests. Always terminated with a trailing slash.
    base_url: Url,

    /// Client used to make http requests. Carries the default headers.
    client: ReqwestClient,
}

impl Client {
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `route` against `params` and the base url without sending anything.
    pub fn resolve(&self, route: &str, params: &Params) -> Result<Url> {
        let resolved = Route::parse(route)?.resolve(params)?;
        let url = format!(
            "{}{}",
            self.base_url,
            resolved.to_string().trim_start_matches('/')
        );

        Ok(Url::parse(&url)?)
    }

    /// Build, but don't send, the request for `route`. Lets callers set a body or headers that
    /// `dispatch` doesn't cover.
    pub fn request(&self, verb: Verb, route: &str, params: &Params) -> Result<RequestBuilder> {
        let url = self.resolve(route, params)?;
        debug!("Github Request: {} {}", verb, url);

        Ok(self.client.request(verb.into(), url))
    }

    /// Send a single request and return the response as-is. Non-success statuses are not
    /// errors; only failures to build the request or transport failures are.
    pub async fn dispatch(
        &self,
        verb: Verb,
        route: &str,
        params: &Params,
        body: Option<Body>,
    ) -> Result<RawResponse> {
        let mut request = self.request(verb, route, params)?;

        match body {
            Some(body) if verb.allows_body() => request = request.json(body.as_value()),
            Some(_) => warn!("Dropping request body for {} {}", verb, route),
            None => {}
        }

        Ok(request.send().await?)
    }

    async fn get(&self, route: &str, params: &Params) -> Result<RawResponse> {
        self.dispatch(Verb::Get, route, params, None).await
    }

    async fn post(&self, route: &str, params: &Params, body: Option<Body>) -> Result<RawResponse> {
        self.dispatch(Verb::Post, route, params, body).await
    }

    async fn put(&self, route: &str, params: &Params, body: Option<Body>) -> Result<RawResponse> {
        self.dispatch(Verb::Put, route, params, body).await
    }

    async fn patch(&self, route: &str, params: &Params, body: Option<Body>) -> Result<RawResponse> {
        self.dispatch(Verb::Patch, route, params, body).await
    }

    async fn delete(
        &self,
        route: &str,
        params: &Params,
        body: Option<Body>,
    ) -> Result<RawResponse> {
        self.dispatch(Verb::Delete, route, params, body).await
    }

    pub fn actions(&self) -> ActionsClient {
        ActionsClient::new(self)
    }

    pub fn checks(&self) -> ChecksClient {
        ChecksClient::new(self)
    }

    pub fn gists(&self) -> GistsClient {
        GistsClient::new(self)
    }

    pub fn git(&self) -> GitClient {
        GitClient::new(self)
    }

    pub fn issues(&self) -> IssuesClient {
        IssuesClient::new(self)
    }

    pub fn licenses(&self) -> LicensesClient {
        LicensesClient::new(self)
    }

    pub fn markdown(&self) -> MarkdownClient {
        MarkdownClient::new(self)
    }

    pub fn meta(&self) -> MetaClient {
        MetaClient::new(self)
    }

    pub fn orgs(&self) -> OrgsClient {
        OrgsClient::new(self)
    }

    pub fn pulls(&self) -> PullsClient {
        PullsClient::new(self)
    }

    pub fn rate_limit(&self) -> RateLimitClient {
        RateLimitClient::new(self)
    }

    pub fn reactions(&self) -> ReactionsClient {
        ReactionsClient::new(self)
    }

    pub fn repos(&self) -> RepositoryClient {
        RepositoryClient::new(self)
    }

    pub fn search(&self) -> SearchClient {
        SearchClient::new(self)
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::new(self)
    }
}

#[cfg(test)]
mod test {
    use super::{Body, Client, Error, ListStyle, Params};

    fn client(base_url: &str) -> Client {
        Client::builder().base_url(base_url).build().unwrap()
    }

    #[test]
    fn resolve_against_default_base_url() {
        let client = Client::new().unwrap();
        let params = Params::new()
            .with("owner", "acme")
            .with("repo", "widgets")
            .with("issue_number", 42u64);

        let url = client
            .resolve("/repos/{owner}/{repo}/issues/{issue_number}", &params)
            .unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/repos/acme/widgets/issues/42");
    }

    #[test]
    fn base_url_path_prefix_is_kept() {
        let client = client("https://ghe.example.com/api/v3");
        assert_eq!(client.base_url().as_str(), "https://ghe.example.com/api/v3/");

        let params = Params::new().with("org", "acme").with("per_page", 100u32);
        let url = client.resolve("/orgs/{org}/repos", &params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/orgs/acme/repos?per_page=100"
        );
    }

    #[test]
    fn resolve_is_idempotent() {
        let client = client("https://api.github.com");
        let params = Params::new()
            .with("q", "test")
            .with("sort", None::<&str>)
            .with("per_page", 50u32);

        let first = client.resolve("/search/code", &params).unwrap();
        let second = client.resolve("/search/code", &params).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.query(), Some("q=test&per_page=50"));
    }

    #[test]
    fn resolve_reports_missing_parameters() {
        let client = client("https://api.github.com");
        let params = Params::new().with("owner", "acme");

        let error = client.resolve("/repos/{owner}/{repo}", &params).unwrap_err();
        assert!(error.is_construction());
        assert!(matches!(error, Error::MissingRouteParameter { ref name, .. } if name == "repo"));
    }

    #[test]
    fn resolved_urls_stay_on_the_route() {
        let client = client("https://api.github.com");

        let params = Params::new().with("org", "a?b#c").with("page", 2u32);
        let url = client.resolve("/orgs/{org}/members", &params).unwrap();
        assert_eq!(url.path(), "/orgs/a%3Fb%23c/members");
        assert_eq!(url.query(), Some("page=2"));
        assert_eq!(url.fragment(), None);

        let params = Params::new()
            .with("owner", "..")
            .with("repo", "widgets")
            .with("issue_number", 1u64);
        let error = client
            .resolve("/repos/{owner}/{repo}/issues/{issue_number}", &params)
            .unwrap_err();
        assert!(error.is_construction());
        assert!(matches!(error, Error::InvalidRouteParameter { ref name, .. } if name == "owner"));

        let params = Params::new()
            .with("owner", "acme")
            .with("repo", "widgets")
            .with("path", "../../../user");
        assert!(client
            .resolve("/repos/{owner}/{repo}/contents/{+path}", &params)
            .unwrap_err()
            .is_construction());
    }

    #[test]
    fn bracket_list_keys_survive_url_parsing() {
        let client = client("https://api.github.com");
        let params = Params::new().with_list("ids", vec![1u64, 2], ListStyle::Brackets);

        let url = client.resolve("/notifications", &params).unwrap();
        assert_eq!(url.query(), Some("ids[]=1&ids[]=2"));
    }

    #[test]
    fn invalid_base_urls() {
        assert!(matches!(
            Client::builder().base_url("not a url").build(),
            Err(Error::Url(_))
        ));
        assert!(matches!(
            Client::builder().base_url("mailto:octocat@github.com").build(),
            Err(Error::Message(_))
        ));
    }

    #[test]
    fn invalid_default_headers() {
        assert!(matches!(
            Client::builder().default_header("bad header", "x").build(),
            Err(Error::InvalidHeader(_))
        ));
        assert!(matches!(
            Client::builder().github_api_token("line\nbreak").build(),
            Err(Error::InvalidHeader(_))
        ));
    }

    #[test]
    fn body_from_serializable() {
        #[derive(serde::Serialize)]
        struct Request {
            title: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            body: Option<String>,
        }

        let body = Body::json(&Request {
            title: "hello",
            body: None,
        })
        .unwrap();
        assert_eq!(body.as_value(), &serde_json::json!({ "title": "hello" }));
    }
}
