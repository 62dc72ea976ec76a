use crate::{client::ClientBuilder, Client, Result};
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path, time::Duration};

/// Client settings as read from a TOML file.
///
/// ```toml
/// base-url = "https://ghe.example.com/api/v3"
/// github-api-token = "ghp_example"
/// timeout-secs = 30
///
/// [headers]
/// X-GitHub-Enterprise-Tenant = "acme"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub base_url: Option<String>,
    pub github_api_token: Option<String>,
    pub user_agent: Option<String>,
    pub api_version: Option<String>,
    pub timeout_secs: Option<u64>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn client_builder(&self) -> ClientBuilder {
        let mut builder = Client::builder();

        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.as_str());
        }
        if let Some(token) = &self.github_api_token {
            builder = builder.github_api_token(token.as_str());
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        if let Some(api_version) = &self.api_version {
            builder = builder.api_version(api_version.as_str());
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        for (name, value) in &self.headers {
            builder = builder.default_header(name.as_str(), value.as_str());
        }

        builder
    }

    pub fn client(&self) -> Result<Client> {
        self.client_builder().build()
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::Error;

    #[test]
    fn kebab_case_keys() {
        let config = Config::from_toml(
            r#"
            base-url = "https://ghe.example.com/api/v3"
            github-api-token = "secret"
            timeout-secs = 5

            [headers]
            X-Custom = "yes"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.base_url.as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        assert_eq!(config.github_api_token.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.headers.get("X-Custom").map(String::as_str), Some("yes"));
        assert_eq!(config.user_agent, None);

        let client = config.client().unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://ghe.example.com/api/v3/"
        );
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        let client = config.client().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.github.com/");
    }

    #[test]
    fn malformed_file() {
        assert!(matches!(
            Config::from_toml("timeout-secs = \"soon\""),
            Err(Error::Toml(_))
        ));
        assert!(matches!(
            Config::from_file("/nonexistent/github-rest.toml"),
            Err(Error::Io(_))
        ));
    }
}
