//! Route templates such as `/repos/{owner}/{repo}/issues/{issue_number}`.
//!
//! A `{name}` placeholder is replaced by the percent-escaped value of the parameter with the same
//! name. `{+name}` is a reserved expansion which leaves `/` untouched so that values which are
//! themselves paths (file paths, git refs) keep their structure. Every parameter that does not
//! fill a placeholder is appended to the query string.

use crate::client::{Error, ParamValue, Params, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

// Everything but the RFC 3986 unreserved characters is escaped
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
const RESERVED: &AsciiSet = &SEGMENT.remove(b'/');
// Commas separate the items of a list value
const QUERY: &AsciiSet = &SEGMENT.remove(b',');
// Keys keep the brackets of `name[]`
const QUERY_KEY: &AsciiSet = &QUERY.remove(b'[').remove(b']');

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder { name: &'a str, reserved: bool },
}

/// A parsed route template
#[derive(Clone, Debug)]
pub struct Route<'a> {
    template: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Route<'a> {
    pub fn parse(template: &'a str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = template;

        while !rest.is_empty() {
            let open = match rest.find('{') {
                Some(open) => open,
                None => {
                    Self::check_literal(template, rest)?;
                    segments.push(Segment::Literal(rest));
                    break;
                }
            };

            if open > 0 {
                Self::check_literal(template, &rest[..open])?;
                segments.push(Segment::Literal(&rest[..open]));
            }

            let after_open = &rest[open + 1..];
            let close = after_open
                .find('}')
                .ok_or_else(|| Error::invalid_route(template, "unterminated placeholder"))?;
            let inner = &after_open[..close];

            if inner.contains('{') {
                return Err(Error::invalid_route(template, "nested placeholder"));
            }

            let (name, reserved) = match inner.strip_prefix('+') {
                Some(name) => (name, true),
                None => (inner, false),
            };

            if name.is_empty() {
                return Err(Error::invalid_route(template, "empty placeholder"));
            }
            if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(Error::invalid_route(template, "invalid placeholder name"));
            }

            segments.push(Segment::Placeholder { name, reserved });
            rest = &after_open[close + 1..];
        }

        Ok(Self { template, segments })
    }

    fn check_literal(template: &str, literal: &str) -> Result<()> {
        if literal.contains('}') {
            Err(Error::invalid_route(template, "unmatched `}`"))
        } else {
            Ok(())
        }
    }

    pub fn template(&self) -> &'a str {
        self.template
    }

    /// Names of the placeholders in the order they appear
    pub fn placeholders(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(*name),
            Segment::Literal(_) => None,
        })
    }

    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholders().any(|placeholder| placeholder == name)
    }

    /// Substitutes path parameters and collects the remaining, non-absent parameters as query
    /// pairs.
    pub fn resolve(&self, params: &Params) -> Result<ResolvedRoute> {
        let mut path = String::with_capacity(self.template.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder { name, reserved } => {
                    let value = params
                        .get(name)
                        .and_then(ParamValue::as_path_value)
                        .ok_or_else(|| Error::missing_route_parameter(self.template, name))?;
                    if has_dot_segment(&value, *reserved) {
                        return Err(Error::invalid_route_parameter(self.template, name));
                    }
                    let escape = if *reserved { RESERVED } else { SEGMENT };
                    path.extend(utf8_percent_encode(&value, escape));
                }
            }
        }

        let mut query = Vec::new();
        for (name, value) in params.iter() {
            if !self.has_placeholder(name) {
                value.push_query_pairs(name, &mut query);
            }
        }

        Ok(ResolvedRoute { path, query })
    }
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

// Escaping doesn't help here: `%2e` is still a dot segment to the url parser
fn has_dot_segment(value: &str, reserved: bool) -> bool {
    if reserved {
        value.split('/').any(is_dot_segment)
    } else {
        is_dot_segment(value)
    }
}

/// A route with its placeholders filled in, not yet joined to a base url
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    path: String,
    query: Vec<(String, String)>,
}

impl ResolvedRoute {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Unescaped query pairs in parameter order
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }

        let pairs: Vec<String> = self
            .query
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(name, QUERY_KEY),
                    utf8_percent_encode(value, QUERY)
                )
            })
            .collect();

        Some(pairs.join("&"))
    }
}

impl fmt::Display for ResolvedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = self.query_string() {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Route;
    use crate::client::{Error, ListStyle, Params};

    fn resolve(template: &str, params: &Params) -> String {
        Route::parse(template)
            .unwrap()
            .resolve(params)
            .unwrap()
            .to_string()
    }

    #[test]
    fn substitutes_placeholders_in_place() {
        let params = Params::new()
            .with("owner", "acme")
            .with("repo", "widgets")
            .with("issue_number", 42u64);

        assert_eq!(
            resolve("/repos/{owner}/{repo}/issues/{issue_number}", &params),
            "/repos/acme/widgets/issues/42"
        );
    }

    #[test]
    fn escapes_path_values() {
        let params = Params::new()
            .with("owner", "acme")
            .with("repo", "widgets")
            .with("name", "good first issue/ü");

        assert_eq!(
            resolve("/repos/{owner}/{repo}/labels/{name}", &params),
            "/repos/acme/widgets/labels/good%20first%20issue%2F%C3%BC"
        );
    }

    #[test]
    fn reserved_placeholders_keep_slashes() {
        let params = Params::new()
            .with("owner", "acme")
            .with("repo", "widgets")
            .with("path", "docs/getting started.md")
            .with("ref", "main");

        assert_eq!(
            resolve("/repos/{owner}/{repo}/contents/{+path}", &params),
            "/repos/acme/widgets/contents/docs/getting%20started.md?ref=main"
        );
    }

    #[test]
    fn missing_parameter() {
        let route = Route::parse("/repos/{owner}/{repo}").unwrap();
        let params = Params::new().with("owner", "acme");

        match route.resolve(&params) {
            Err(Error::MissingRouteParameter { route, name }) => {
                assert_eq!(route, "/repos/{owner}/{repo}");
                assert_eq!(name, "repo");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn absent_or_empty_path_values_are_missing() {
        let route = Route::parse("/orgs/{org}").unwrap();

        let absent = Params::new().with("org", None::<&str>);
        assert!(matches!(
            route.resolve(&absent),
            Err(Error::MissingRouteParameter { .. })
        ));

        let empty = Params::new().with("org", "");
        assert!(matches!(
            route.resolve(&empty),
            Err(Error::MissingRouteParameter { .. })
        ));
    }

    #[test]
    fn query_is_the_non_path_leftovers() {
        let params = Params::new()
            .with("q", "test")
            .with("sort", None::<&str>)
            .with("per_page", 50u32);

        assert_eq!(resolve("/search/code", &params), "/search/code?q=test&per_page=50");
    }

    #[test]
    fn query_values_are_escaped() {
        let params = Params::new()
            .with("q", "repo:acme/widgets is:open")
            .with_list("labels", vec!["bug", "help wanted"], ListStyle::Comma);

        assert_eq!(
            resolve("/search/issues", &params),
            "/search/issues?q=repo%3Aacme%2Fwidgets%20is%3Aopen&labels=bug,help%20wanted"
        );
    }

    #[test]
    fn path_keys_never_reach_the_query() {
        let route = Route::parse("/orgs/{org}/actions/secrets").unwrap();
        let params = Params::new()
            .with("org", "acme")
            .with("per_page", 100u32)
            .with("page", None::<u32>);

        let resolved = route.resolve(&params).unwrap();
        assert_eq!(resolved.path(), "/orgs/acme/actions/secrets");
        assert_eq!(
            resolved.query(),
            &[("per_page".to_owned(), "100".to_owned())]
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let route = Route::parse("/repos/{owner}/{repo}/pulls").unwrap();
        let params = Params::new()
            .with("owner", "acme")
            .with("repo", "widgets")
            .with("state", "all");

        assert_eq!(route.resolve(&params).unwrap(), route.resolve(&params).unwrap());
    }

    #[test]
    fn structural_characters_in_path_values() {
        let route = Route::parse("/repos/{owner}/{repo}/labels/{name}").unwrap();
        let cases: &[(&str, Option<&str>)] = &[
            ("a?b", Some("/repos/acme/widgets/labels/a%3Fb")),
            ("a#b", Some("/repos/acme/widgets/labels/a%23b")),
            ("50%", Some("/repos/acme/widgets/labels/50%25")),
            ("%2e%2e", Some("/repos/acme/widgets/labels/%252e%252e")),
            ("...", Some("/repos/acme/widgets/labels/...")),
            (".", None),
            ("..", None),
        ];

        for (name, expected) in cases {
            let params = Params::new()
                .with("owner", "acme")
                .with("repo", "widgets")
                .with("name", *name);

            match (route.resolve(&params), expected) {
                (Ok(resolved), Some(expected)) => {
                    assert_eq!(resolved.to_string(), *expected, "value {:?}", name)
                }
                (Err(Error::InvalidRouteParameter { name: param, .. }), None) => {
                    assert_eq!(param, "name")
                }
                (other, _) => panic!("unexpected result for {:?}: {:?}", name, other),
            }
        }
    }

    #[test]
    fn dot_segments_are_rejected() {
        let params = Params::new()
            .with("owner", "..")
            .with("repo", "widgets")
            .with("issue_number", 1u32);
        let error = Route::parse("/repos/{owner}/{repo}/issues/{issue_number}")
            .unwrap()
            .resolve(&params)
            .unwrap_err();
        assert!(error.is_construction());
        assert!(matches!(error, Error::InvalidRouteParameter { ref name, .. } if name == "owner"));

        let contents = Route::parse("/repos/{owner}/{repo}/contents/{+path}").unwrap();
        for path in &["../../../user", "docs/./intro.md", "docs/..", "."] {
            let params = Params::new()
                .with("owner", "acme")
                .with("repo", "widgets")
                .with("path", *path);
            assert!(
                matches!(
                    contents.resolve(&params),
                    Err(Error::InvalidRouteParameter { .. })
                ),
                "{} should be rejected",
                path
            );
        }

        let params = Params::new()
            .with("owner", "acme")
            .with("repo", "widgets")
            .with("path", ".github/workflows/ci.yml");
        assert_eq!(
            contents.resolve(&params).unwrap().path(),
            "/repos/acme/widgets/contents/.github/workflows/ci.yml"
        );
    }

    #[test]
    fn bracket_list_keys_are_not_escaped() {
        let params = Params::new().with_list("ids", vec![1u64, 2], ListStyle::Brackets);

        assert_eq!(resolve("/notifications", &params), "/notifications?ids[]=1&ids[]=2");
    }

    #[test]
    fn placeholders() {
        let route = Route::parse("/repos/{owner}/{repo}/git/ref/{+ref}").unwrap();
        let names: Vec<_> = route.placeholders().collect();
        assert_eq!(names, vec!["owner", "repo", "ref"]);
        assert!(route.has_placeholder("ref"));
        assert!(!route.has_placeholder("path"));

        assert_eq!(Route::parse("/meta").unwrap().placeholders().count(), 0);
    }

    #[test]
    fn invalid_templates() {
        for template in &[
            "/repos/{owner",
            "/repos/{}",
            "/repos/{+}",
            "/repos/{ow{ner}",
            "/repos/owner}",
            "/repos/{own-er}",
        ] {
            assert!(
                matches!(Route::parse(template), Err(Error::InvalidRoute { .. })),
                "{} should be rejected",
                template
            );
        }
    }
}
