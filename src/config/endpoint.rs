use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;

/// A named, typed location that data is read from or written to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Endpoint {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EndpointKind,
    pub uri: String,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, kind: EndpointKind, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            uri: uri.into(),
        }
    }

    pub fn api(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::new(name, EndpointKind::Api, uri)
    }

    pub fn file(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::new(name, EndpointKind::File, uri)
    }

    pub fn db(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::new(name, EndpointKind::Db, uri)
    }
}

/// Decides how an endpoint is read or written.
///
/// Matching on the configured `type` string is exact, so `"API"` ends up as
/// `Unknown("API")`. Unknown endpoints are skipped by readers and writers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum EndpointKind {
    Api,
    File,
    Db,
    Unknown(String),
}

impl Default for EndpointKind {
    fn default() -> Self {
        EndpointKind::Unknown(String::new())
    }
}

impl From<String> for EndpointKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "api" => EndpointKind::Api,
            "file" => EndpointKind::File,
            "db" => EndpointKind::Db,
            _ => EndpointKind::Unknown(kind),
        }
    }
}

impl From<&str> for EndpointKind {
    fn from(kind: &str) -> Self {
        EndpointKind::from(kind.to_string())
    }
}

impl From<EndpointKind> for String {
    fn from(kind: EndpointKind) -> Self {
        kind.to_string()
    }
}

impl Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointKind::Api => write!(f, "api"),
            EndpointKind::File => write!(f, "file"),
            EndpointKind::Db => write!(f, "db"),
            EndpointKind::Unknown(kind) => write!(f, "{kind}"),
        }
    }
}
