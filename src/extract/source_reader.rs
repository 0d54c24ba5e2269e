use crate::config::{Endpoint, EndpointKind};
use crate::extract::error::ExtractionError;
use log::{debug, info};
use reqwest::blocking::{Client, Response};
use std::fs;
use std::io::Write;

/// Reads every configured data source and copies its data to an output sink.
///
/// Sources are read one after another. The first `api` or `file` source that fails
/// stops the reader, `db` sources are not supported yet and only logged, anything
/// else is skipped.
#[derive(Debug, Clone)]
pub struct SourceReader {
    client: Client,
}

impl SourceReader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn read_all(
        &self,
        sources: &[Endpoint],
        out: &mut dyn Write,
    ) -> Result<(), ExtractionError> {
        for source in sources {
            self.read(source, out)?;
        }
        Ok(())
    }

    pub fn read(&self, source: &Endpoint, out: &mut dyn Write) -> Result<(), ExtractionError> {
        match &source.kind {
            EndpointKind::Api => self.read_api(source, out),
            EndpointKind::File => Self::read_file(source, out),
            EndpointKind::Db => {
                info!(
                    "DB integration not implemented yet. Skipping source '{}'",
                    source.name
                );
                Ok(())
            }
            EndpointKind::Unknown(_) => Ok(()),
        }
    }

    fn read_api(&self, source: &Endpoint, out: &mut dyn Write) -> Result<(), ExtractionError> {
        let network_error = |err| ExtractionError::Network {
            name: source.name.clone(),
            uri: source.uri.clone(),
            err,
        };

        let response = self
            .client
            .get(&source.uri)
            .send()
            .and_then(Response::error_for_status)
            .map_err(network_error)?;
        debug!("Source '{}' answered with {}", source.name, response.status());

        let body = response.bytes().map_err(network_error)?;
        out.write_all(&body)
            .and_then(|_| writeln!(out))
            .map_err(|err| ExtractionError::Output {
                name: source.name.clone(),
                err,
            })
    }

    fn read_file(source: &Endpoint, out: &mut dyn Write) -> Result<(), ExtractionError> {
        let content = fs::read(&source.uri).map_err(|err| ExtractionError::Io {
            name: source.name.clone(),
            uri: source.uri.clone(),
            err,
        })?;
        debug!("Copying file {} of source '{}'", source.uri, source.name);

        writeln!(out, "File content:")
            .and_then(|_| out.write_all(&content))
            .map_err(|err| ExtractionError::Output {
                name: source.name.clone(),
                err,
            })
    }
}
