use strum::{Display, EnumIter, EnumString};

/// The HTTP verbs used by GitHub's REST API.
///
/// ```
/// use github_rest::client::Verb;
///
/// let verb: Verb = "PATCH".parse().unwrap();
/// assert_eq!(verb, Verb::Patch);
/// assert_eq!(verb.to_string(), "PATCH");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    /// Returns `true` if a request with this verb may carry a body. GET never does.
    pub fn allows_body(self) -> bool {
        !matches!(self, Verb::Get)
    }

    pub fn to_method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        verb.to_method()
    }
}

#[cfg(test)]
mod test {
    use super::Verb;
    use strum::IntoEnumIterator;

    #[test]
    fn parse() {
        assert_eq!("GET".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("delete".parse::<Verb>().unwrap(), Verb::Delete);
        assert!("HEAD".parse::<Verb>().is_err());
        assert!("OPTIONS".parse::<Verb>().is_err());
    }

    #[test]
    fn method_names_match() {
        for verb in Verb::iter() {
            assert_eq!(verb.to_method().as_str(), verb.to_string());
        }
    }

    #[test]
    fn only_get_forbids_body() {
        let without_body: Vec<_> = Verb::iter().filter(|v| !v.allows_body()).collect();
        assert_eq!(without_body, vec![Verb::Get]);
    }
}
