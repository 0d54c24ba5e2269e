use crate::config::{Endpoint, IntegratorConfig};
use crate::error::{ConstructionError, PipelineError};
use crate::extract::SourceReader;
use crate::load::{StaticPayload, TargetWriter};
use crate::notify::traits::Notifier;
use crate::notify::{EmailNotifier, Notification};
use log::info;
use reqwest::blocking::Client;
use std::io::Write;
use strum_macros::Display;

/// The stages of an integration run. They are passed strictly in declaration order,
/// any error moves the pipeline to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    Load,
    ReadSources,
    WriteTargets,
    Notify,
    Done,
    Failed,
}

#[derive(Debug)]
pub struct Pipeline {
    source_reader: SourceReader,
    target_writer: TargetWriter,
    notifier: Box<dyn Notifier>,
    phase: Phase,
}

impl Pipeline {
    pub fn new(
        source_reader: SourceReader,
        target_writer: TargetWriter,
        notifier: Box<dyn Notifier>,
    ) -> Pipeline {
        Pipeline {
            source_reader,
            target_writer,
            notifier,
            phase: Phase::Load,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn run(
        &mut self,
        sources: &[Endpoint],
        targets: &[Endpoint],
        out: &mut dyn Write,
    ) -> Result<(), PipelineError> {
        let result = self.run_phases(sources, targets, out);
        self.phase = match result {
            Ok(()) => Phase::Done,
            Err(_) => Phase::Failed,
        };
        result
    }

    fn run_phases(
        &mut self,
        sources: &[Endpoint],
        targets: &[Endpoint],
        out: &mut dyn Write,
    ) -> Result<(), PipelineError> {
        self.read_sources(sources, out)?;
        self.write_targets(targets, out)?;
        self.notify()
    }

    pub fn read_sources(
        &mut self,
        sources: &[Endpoint],
        out: &mut dyn Write,
    ) -> Result<(), PipelineError> {
        self.phase = Phase::ReadSources;
        info!("Starting {}: {} data sources", self.phase, sources.len());
        self.source_reader.read_all(sources, out)?;
        info!("Concluded reading data sources");
        Ok(())
    }

    pub fn write_targets(
        &mut self,
        targets: &[Endpoint],
        out: &mut dyn Write,
    ) -> Result<(), PipelineError> {
        self.phase = Phase::WriteTargets;
        info!("Starting {}: {} data targets", self.phase, targets.len());
        self.target_writer.write_all(targets, out)?;
        info!("Concluded writing data targets");
        Ok(())
    }

    pub fn notify(&mut self) -> Result<(), PipelineError> {
        self.phase = Phase::Notify;
        info!("Starting {}", self.phase);
        self.notifier.send(&Notification::integration_complete())?;
        info!("Concluded notification");
        Ok(())
    }
}

impl TryFrom<&IntegratorConfig> for Pipeline {
    type Error = ConstructionError;

    fn try_from(config: &IntegratorConfig) -> Result<Self, Self::Error> {
        let settings = &config.settings;
        let client = Client::builder().timeout(settings.http_timeout()).build()?;

        let payload = settings
            .payload
            .as_deref()
            .map(StaticPayload::new)
            .unwrap_or_default();

        Ok(Pipeline::new(
            SourceReader::new(client.clone()),
            TargetWriter::new(client, Box::new(payload)),
            Box::new(EmailNotifier::new(
                config.notifications.email.clone(),
                settings.smtp_timeout(),
            )),
        ))
    }
}
