use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Request to data source '{name}' at '{uri}' failed")]
    Network {
        name: String,
        uri: String,
        #[source]
        err: reqwest::Error,
    },
    #[error("Could not read data source '{name}' at '{uri}'")]
    Io {
        name: String,
        uri: String,
        #[source]
        err: std::io::Error,
    },
    #[error("Could not write data of source '{name}' to the output")]
    Output {
        name: String,
        #[source]
        err: std::io::Error,
    },
}
