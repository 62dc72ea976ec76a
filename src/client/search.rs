use crate::client::{
    display_to_param, Client, ExtendParams, PaginationOptions, Params, RawResponse, Result,
};
use strum::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SearchOrder {
    Asc,
    Desc,
}

display_to_param!(SearchOrder);

/// Options shared by every search endpoint. `q` is passed separately.
#[derive(Clone, Debug, Default)]
pub struct SearchOptions {
    /// What to sort results by. Accepted values depend on the endpoint, e.g. `stars` for
    /// repositories or `author-date` for commits. Best match when unset.
    pub sort: Option<String>,

    /// Ignored unless `sort` is provided
    pub order: Option<SearchOrder>,

    pub pagination_options: PaginationOptions,
}

impl ExtendParams for SearchOptions {
    fn extend_params(&self, params: &mut Params) {
        params.set("sort", &self.sort).set("order", self.order);
        self.pagination_options.extend_params(params);
    }
}

/// `SearchClient` handles communication with the search related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/search
pub struct SearchClient<'a> {
    inner: &'a Client,
}

impl<'a> SearchClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    async fn search(
        &self,
        route: &str,
        q: &str,
        options: Option<SearchOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new().with("q", q).extend_from(&options);
        self.inner.get(route, &params).await
    }

    /// GitHub API docs: https://docs.github.com/rest/search/search#search-code
    pub async fn code(&self, q: &str, options: Option<SearchOptions>) -> Result<RawResponse> {
        self.search("/search/code", q, options).await
    }

    /// GitHub API docs: https://docs.github.com/rest/search/search#search-commits
    pub async fn commits(&self, q: &str, options: Option<SearchOptions>) -> Result<RawResponse> {
        self.search("/search/commits", q, options).await
    }

    /// GitHub API docs: https://docs.github.com/rest/search/search#search-issues-and-pull-requests
    pub async fn issues_and_pull_requests(
        &self,
        q: &str,
        options: Option<SearchOptions>,
    ) -> Result<RawResponse> {
        self.search("/search/issues", q, options).await
    }

    /// Search labels in the repository with id `repository_id`
    ///
    /// GitHub API docs: https://docs.github.com/rest/search/search#search-labels
    pub async fn labels(
        &self,
        repository_id: u64,
        q: &str,
        options: Option<SearchOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new()
            .with("repository_id", repository_id)
            .with("q", q)
            .extend_from(&options);
        self.inner.get("/search/labels", &params).await
    }

    /// GitHub API docs: https://docs.github.com/rest/search/search#search-repositories
    pub async fn repos(&self, q: &str, options: Option<SearchOptions>) -> Result<RawResponse> {
        self.search("/search/repositories", q, options).await
    }

    /// Topics have no sort of their own, so only pagination applies
    ///
    /// GitHub API docs: https://docs.github.com/rest/search/search#search-topics
    pub async fn topics(&self, q: &str, options: Option<PaginationOptions>) -> Result<RawResponse> {
        let params = Params::new().with("q", q).extend_from(&options);
        self.inner.get("/search/topics", &params).await
    }

    /// GitHub API docs: https://docs.github.com/rest/search/search#search-users
    pub async fn users(&self, q: &str, options: Option<SearchOptions>) -> Result<RawResponse> {
        self.search("/search/users", q, options).await
    }
}

#[cfg(test)]
mod test {
    use super::{SearchOptions, SearchOrder};
    use crate::client::{PaginationOptions, Params};

    #[test]
    fn order_without_sort_is_still_sent() {
        let params = Params::new().with("q", "tokio").extend_from(&SearchOptions {
            order: Some(SearchOrder::Desc),
            pagination_options: PaginationOptions::new(50, 2),
            ..Default::default()
        });

        let names: Vec<_> = params
            .iter()
            .filter(|(_, value)| !value.is_absent())
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["q", "order", "per_page", "page"]);
    }
}
