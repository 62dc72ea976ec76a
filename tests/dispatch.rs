use github_rest::{
    client::{GistRequest, NewPullRequest, Params, Verb},
    Body, Client, Error,
};
use serde_json::json;
use wiremock::{
    matchers::{any, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

async fn setup(status: u16) -> (MockServer, Client) {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(server.uri())
        .github_api_token("secret")
        .build()
        .unwrap();

    (server, client)
}

async fn requests(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap()
}

fn query_pairs(request: &Request) -> Vec<(String, String)> {
    request.url.query_pairs().into_owned().collect()
}

#[tokio::test]
async fn path_parameters_are_substituted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/issues/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "number": 42 })))
        .mount(&server)
        .await;

    let client = Client::builder().base_url(server.uri()).build().unwrap();
    let response = client.issues().get("acme", "widgets", 42).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let issue: serde_json::Value = response.json().await.unwrap();
    assert_eq!(issue, json!({ "number": 42 }));
}

#[tokio::test]
async fn missing_route_parameter_sends_nothing() {
    let (server, client) = setup(200).await;

    let params = Params::new().with("owner", "acme");
    let error = client
        .dispatch(Verb::Get, "/repos/{owner}/{repo}", &params, None)
        .await
        .unwrap_err();
    assert!(matches!(error, Error::MissingRouteParameter { ref name, .. } if name == "repo"));

    let error = client.repos().get("acme", "").await.unwrap_err();
    assert!(matches!(error, Error::MissingRouteParameter { ref name, .. } if name == "repo"));

    assert!(requests(&server).await.is_empty());
}

#[tokio::test]
async fn dot_segment_values_send_nothing() {
    let (server, client) = setup(200).await;

    let error = client.issues().get("..", "widgets", 1).await.unwrap_err();
    assert!(matches!(error, Error::InvalidRouteParameter { ref name, .. } if name == "owner"));

    let error = client
        .repos()
        .get_content("acme", "widgets", "../../../user", None)
        .await
        .unwrap_err();
    assert!(matches!(error, Error::InvalidRouteParameter { ref name, .. } if name == "path"));

    let error = client.orgs().list_members(".", None).await.unwrap_err();
    assert!(error.is_construction());

    assert!(requests(&server).await.is_empty());

    client.orgs().list_members("a?b", None).await.unwrap();
    let requests = requests(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/orgs/a%3Fb/members");
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn absent_optional_values_are_omitted() {
    let (server, client) = setup(200).await;

    client
        .actions()
        .list_org_secrets("acme", Some(100), None)
        .await
        .unwrap();

    let requests = requests(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/orgs/acme/actions/secrets");
    assert_eq!(
        query_pairs(&requests[0]),
        vec![("per_page".to_owned(), "100".to_owned())]
    );
}

#[tokio::test]
async fn query_is_the_leftover_parameters() {
    let (server, client) = setup(200).await;

    let params = Params::new()
        .with("q", "test")
        .with("sort", None::<&str>)
        .with("per_page", 50u32);
    client
        .dispatch(Verb::Get, "/search/code", &params, None)
        .await
        .unwrap();

    let requests = requests(&server).await;
    assert_eq!(requests[0].url.path(), "/search/code");
    assert_eq!(requests[0].url.query(), Some("q=test&per_page=50"));
}

#[tokio::test]
async fn verbs_are_passed_through() {
    let (server, client) = setup(204).await;
    let gist = GistRequest::default();

    client.gists().get("aa5a315d").await.unwrap();
    client.gists().create(&gist).await.unwrap();
    client.gists().star("aa5a315d").await.unwrap();
    client.gists().update("aa5a315d", &gist).await.unwrap();
    client.gists().delete("aa5a315d").await.unwrap();

    let seen: Vec<(String, String)> = requests(&server)
        .await
        .iter()
        .map(|request| {
            (
                request.method.as_str().to_owned(),
                request.url.path().to_owned(),
            )
        })
        .collect();

    assert_eq!(
        seen,
        vec![
            ("GET".to_owned(), "/gists/aa5a315d".to_owned()),
            ("POST".to_owned(), "/gists".to_owned()),
            ("PUT".to_owned(), "/gists/aa5a315d/star".to_owned()),
            ("PATCH".to_owned(), "/gists/aa5a315d".to_owned()),
            ("DELETE".to_owned(), "/gists/aa5a315d".to_owned()),
        ]
    );
}

#[tokio::test]
async fn error_statuses_are_returned_as_responses() {
    let (_server, client) = setup(404).await;

    let response = client.users().check_following("octocat").await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn default_headers_are_sent() {
    let (server, client) = setup(200).await;

    client.meta().zen().await.unwrap();

    let requests = requests(&server).await;
    let header = |name: &str| {
        requests[0]
            .headers
            .get(name)
            .map(|value| value.to_str().unwrap().to_owned())
    };

    assert_eq!(
        header("accept").as_deref(),
        Some("application/vnd.github+json")
    );
    assert_eq!(
        header("x-github-api-version").as_deref(),
        Some("2022-11-28")
    );
    assert_eq!(header("authorization").as_deref(), Some("token secret"));
    assert!(header("user-agent").unwrap().starts_with("github-rest/"));
}

#[tokio::test]
async fn structured_body_is_sent_as_json() {
    let (server, client) = setup(201).await;

    let pull_request = NewPullRequest {
        title: "Amazing new feature".to_owned(),
        head: "octocat:new-feature".to_owned(),
        base: "main".to_owned(),
        ..Default::default()
    };
    client
        .pulls()
        .create("acme", "widgets", &pull_request)
        .await
        .unwrap();

    let requests = requests(&server).await;
    assert_eq!(requests[0].method.as_str(), "POST");
    assert_eq!(requests[0].url.path(), "/repos/acme/widgets/pulls");
    assert_eq!(
        requests[0].body_json::<serde_json::Value>().unwrap(),
        json!({
            "title": "Amazing new feature",
            "head": "octocat:new-feature",
            "base": "main",
        })
    );
}

#[tokio::test]
async fn get_never_carries_a_body() {
    let (server, client) = setup(200).await;

    let body = Body::from(json!({ "ignored": true }));
    client
        .dispatch(Verb::Get, "/zen", &Params::new(), Some(body))
        .await
        .unwrap();

    let requests = requests(&server).await;
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn reserved_placeholders_keep_slashes() {
    let (server, client) = setup(200).await;

    client
        .repos()
        .get_content("acme", "widgets", "docs/guide/intro.md", Some("main"))
        .await
        .unwrap();
    client
        .issues()
        .get_label("acme", "widgets", "area/ci")
        .await
        .unwrap();

    let requests = requests(&server).await;
    assert_eq!(
        requests[0].url.path(),
        "/repos/acme/widgets/contents/docs/guide/intro.md"
    );
    assert_eq!(requests[0].url.query(), Some("ref=main"));
    assert_eq!(
        requests[1].url.path(),
        "/repos/acme/widgets/labels/area%2Fci"
    );
}

#[tokio::test]
async fn alternate_media_types() {
    let (server, client) = setup(200).await;

    client.pulls().get_diff("acme", "widgets", 7).await.unwrap();
    client.markdown().render_raw("Hello **world**").await.unwrap();

    let requests = requests(&server).await;
    assert_eq!(
        requests[0].headers.get("accept").unwrap().to_str().unwrap(),
        "application/vnd.github.diff"
    );
    assert_eq!(requests[1].url.path(), "/markdown/raw");
    assert_eq!(
        requests[1]
            .headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap(),
        "text/plain"
    );
    assert_eq!(requests[1].body, b"Hello **world**".to_vec());
}

#[tokio::test]
async fn enterprise_base_url_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/meta"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(format!("{}/api/v3", server.uri()))
        .build()
        .unwrap();
    let response = client.meta().get().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn transport_errors_are_passed_through() {
    // nothing listens on port 1
    let client = Client::builder()
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let error = client.rate_limit().get().await.unwrap_err();
    assert!(matches!(error, Error::Transport(_)));
    assert!(!error.is_construction());
}
