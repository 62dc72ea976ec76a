//! Error type for Github Client

use std::{borrow::Cow, io};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// A route placeholder had no value, or only an absent/empty one. Raised before any request
    /// is sent.
    #[error("missing value for route parameter `{name}` in `{route}`")]
    MissingRouteParameter { route: String, name: String },

    #[error("invalid route template `{route}`: {reason}")]
    InvalidRoute { route: String, reason: &'static str },

    /// A path value of `.` or `..`, which URL normalization would collapse into another route
    #[error("value of route parameter `{name}` in `{route}` is a dot segment")]
    InvalidRouteParameter { route: String, name: String },

    /// Anything reported by the HTTP transport, passed through untouched
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("url error")]
    Url(#[from] url::ParseError),

    #[error("invalid header")]
    InvalidHeader(#[from] InvalidHeader),

    #[error("Io error")]
    Io(#[from] io::Error),

    #[error("toml parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("`{0}`")]
    Message(Cow<'static, str>),
}

/// A default header whose name or value could not be used
#[derive(Error, Debug)]
pub enum InvalidHeader {
    #[error("invalid header name")]
    Name(#[from] reqwest::header::InvalidHeaderName),

    #[error("invalid header value")]
    Value(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    pub(crate) fn missing_route_parameter(route: &str, name: &str) -> Self {
        Error::MissingRouteParameter {
            route: route.to_owned(),
            name: name.to_owned(),
        }
    }

    pub(crate) fn invalid_route_parameter(route: &str, name: &str) -> Self {
        Error::InvalidRouteParameter {
            route: route.to_owned(),
            name: name.to_owned(),
        }
    }

    pub(crate) fn invalid_route(route: &str, reason: &'static str) -> Self {
        Error::InvalidRoute {
            route: route.to_owned(),
            reason,
        }
    }

    /// Returns true if this error was raised while building a request, before anything was sent
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::MissingRouteParameter { .. }
                | Error::InvalidRoute { .. }
                | Error::InvalidRouteParameter { .. }
        )
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(error: reqwest::header::InvalidHeaderValue) -> Self {
        Error::InvalidHeader(error.into())
    }
}

impl From<reqwest::header::InvalidHeaderName> for Error {
    fn from(error: reqwest::header::InvalidHeaderName) -> Self {
        Error::InvalidHeader(error.into())
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}
