use crate::config::{Endpoint, EndpointKind};
use crate::load::error::LoadError;
use crate::load::traits::PayloadProvider;
use log::{debug, info};
use reqwest::blocking::Client;
use std::fs;
use std::io::Write;

/// Pushes a payload to every configured data target.
///
/// `api` targets receive the payload as the body of a POST request and the response
/// status line is reported to the output sink. `file` targets are created or truncated
/// and hold exactly the payload afterwards.
#[derive(Debug)]
pub struct TargetWriter {
    client: Client,
    payload: Box<dyn PayloadProvider>,
}

impl TargetWriter {
    pub fn new(client: Client, payload: Box<dyn PayloadProvider>) -> Self {
        Self { client, payload }
    }

    pub fn write_all(&self, targets: &[Endpoint], out: &mut dyn Write) -> Result<(), LoadError> {
        for target in targets {
            self.write(target, out)?;
        }
        Ok(())
    }

    pub fn write(&self, target: &Endpoint, out: &mut dyn Write) -> Result<(), LoadError> {
        match &target.kind {
            EndpointKind::Api => self.write_api(target, out),
            EndpointKind::File => self.write_file(target),
            EndpointKind::Db => {
                info!(
                    "DB integration not implemented yet. Skipping target '{}'",
                    target.name
                );
                Ok(())
            }
            EndpointKind::Unknown(_) => Ok(()),
        }
    }

    fn write_api(&self, target: &Endpoint, out: &mut dyn Write) -> Result<(), LoadError> {
        let response = self
            .client
            .post(&target.uri)
            .body(self.payload.payload(target))
            .send()
            .map_err(|err| LoadError::Network {
                name: target.name.clone(),
                uri: target.uri.clone(),
                err,
            })?;

        let status = response.status();
        debug!("Target '{}' answered with {status}", target.name);
        writeln!(out, "{status}").map_err(|err| LoadError::Output {
            name: target.name.clone(),
            err,
        })
    }

    fn write_file(&self, target: &Endpoint) -> Result<(), LoadError> {
        debug!("Storing target '{}' to: {}", target.name, target.uri);
        fs::write(&target.uri, self.payload.payload(target)).map_err(|err| LoadError::Io {
            name: target.name.clone(),
            uri: target.uri.clone(),
            err,
        })
    }
}
