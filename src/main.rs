use anyhow::{bail, Context};
use github_rest::{
    client::{Params, Verb},
    Body, Config,
};
use log::info;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Options {
    #[structopt(short, long, parse(from_os_str))]
    /// config file to use
    config: Option<PathBuf>,

    #[structopt(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    /// API token, overrides `github-api-token` from the config file
    token: Option<String>,

    #[structopt(long)]
    /// API base url, overrides `base-url` from the config file
    base_url: Option<String>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(name = "request")]
    /// Send a single request and print the response body
    Request(RequestOptions),
}

#[derive(StructOpt)]
struct RequestOptions {
    /// GET, POST, PUT, PATCH or DELETE
    verb: Verb,

    /// Route template, e.g. /repos/{owner}/{repo}/issues
    route: String,

    #[structopt(short = "p", long = "param", parse(try_from_str = parse_param))]
    /// Parameter as name=value. Repeating a name sends a list.
    params: Vec<(String, String)>,

    #[structopt(long)]
    /// JSON request body
    body: Option<String>,

    #[structopt(long)]
    /// Print the resolved url instead of sending the request
    dry_run: bool,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.find('=') {
        Some(idx) => Ok((s[..idx].to_owned(), s[idx + 1..].to_owned())),
        None => Err(format!("expected name=value, got `{}`", s)),
    }
}

fn build_params(pairs: Vec<(String, String)>) -> Params {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for (name, value) in pairs {
        match grouped.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, values)) => values.push(value),
            None => grouped.push((name, vec![value])),
        }
    }

    let mut params = Params::new();
    for (name, mut values) in grouped {
        if values.len() == 1 {
            params.set(name, values.remove(0));
        } else {
            params.set(name, values);
        }
    }
    params
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opts = Options::from_args();

    // set up logging, allowing info level logging by default
    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match &opts.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("unable to load config {}", path.display()))?,
        None => Config::default(),
    };

    let mut builder = config.client_builder();
    if let Some(token) = opts.token {
        builder = builder.github_api_token(token);
    }
    if let Some(base_url) = opts.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    match opts.command {
        Command::Request(request) => {
            let params = build_params(request.params);

            if request.dry_run {
                let url = client.resolve(&request.route, &params)?;
                println!("{} {}", request.verb, url);
                return Ok(());
            }

            let body = match &request.body {
                Some(body) => Some(Body::from(
                    serde_json::from_str::<serde_json::Value>(body)
                        .context("--body is not valid json")?,
                )),
                None => None,
            };

            let response = client
                .dispatch(request.verb, &request.route, &params, body)
                .await?;
            let status = response.status();
            info!("{} {}", status, response.url());

            println!("{}", response.text().await?);

            if !status.is_success() {
                bail!("request failed with {}", status);
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::{build_params, parse_param};
    use github_rest::client::{ListStyle, ParamValue};

    #[test]
    fn params_from_cli() {
        assert_eq!(
            parse_param("q=repo:acme/widgets is:open"),
            Ok(("q".to_owned(), "repo:acme/widgets is:open".to_owned()))
        );
        assert!(parse_param("owner").is_err());

        let params = build_params(vec![
            ("labels".to_owned(), "bug".to_owned()),
            ("owner".to_owned(), "acme".to_owned()),
            ("labels".to_owned(), "ui".to_owned()),
        ]);
        assert_eq!(
            params.get("labels"),
            Some(&ParamValue::List {
                items: vec!["bug".to_owned(), "ui".to_owned()],
                style: ListStyle::Comma,
            })
        );
        assert_eq!(
            params.get("owner"),
            Some(&ParamValue::Scalar("acme".to_owned()))
        );
    }
}
