use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Request to data target '{name}' at '{uri}' failed")]
    Network {
        name: String,
        uri: String,
        #[source]
        err: reqwest::Error,
    },
    #[error("Could not write data target '{name}' at '{uri}'")]
    Io {
        name: String,
        uri: String,
        #[source]
        err: std::io::Error,
    },
    #[error("Could not report the result of target '{name}' to the output")]
    Output {
        name: String,
        #[source]
        err: std::io::Error,
    },
}
