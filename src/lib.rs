//! An async client for the GitHub REST API.
//!
//! Every call goes through [`Client::dispatch`], which expands a route template such as
//! `/repos/{owner}/{repo}/issues/{issue_number}` from a [`client::Params`] map, sends whatever
//! parameters are left over as the query string, and hands back the raw response. The resource
//! clients (`client.issues()`, `client.pulls()`, ...) are thin typed wrappers over it.
//!
//! ```no_run
//! # async fn run() -> github_rest::Result<()> {
//! let client = github_rest::Client::builder()
//!     .github_api_token("ghp_example")
//!     .build()?;
//!
//! let response = client.issues().get("rust-lang", "rust", 1).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod client;
mod common;
mod config;

pub use client::{Body, Client, ClientBuilder, Error, Result};
pub use common::DateTime;
pub use config::Config;
