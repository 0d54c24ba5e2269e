use crate::Pipeline;
use crate::config::{ConfigLoader, Endpoint, IntegratorConfig};
use crate::error::{ConstructionError, PipelineError};
use crate::pipeline::Phase;
use log::info;
use std::io::Write;
use std::path::PathBuf;

/// Couples a [`Pipeline`] with the data sources and data targets it runs over.
#[derive(Debug)]
pub struct Integrator {
    pipeline: Pipeline,
    data_sources: Vec<Endpoint>,
    data_targets: Vec<Endpoint>,
}

impl Integrator {
    pub fn new(
        pipeline: Pipeline,
        data_sources: Vec<Endpoint>,
        data_targets: Vec<Endpoint>,
    ) -> Self {
        Self {
            pipeline,
            data_sources,
            data_targets,
        }
    }

    /// Reads all sources, writes all targets and sends the notification.
    ///
    /// Source data and target status lines are written to `out`. The first error aborts
    /// the run, side effects of the phases before it are not rolled back.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<(), PipelineError> {
        self.pipeline.run(&self.data_sources, &self.data_targets, out)?;
        info!("Integration complete");
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.pipeline.phase()
    }
}

impl TryFrom<IntegratorConfig> for Integrator {
    type Error = ConstructionError;

    fn try_from(config: IntegratorConfig) -> Result<Self, Self::Error> {
        let pipeline = Pipeline::try_from(&config)?;
        Ok(Self::new(pipeline, config.data_sources, config.data_targets))
    }
}

impl TryFrom<PathBuf> for Integrator {
    type Error = ConstructionError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        if !path.exists() {
            return Err(ConstructionError::NoConfigFileFound(path));
        }
        let config: IntegratorConfig = ConfigLoader::load(path)?;
        info!(
            "Loaded config with {} data sources and {} data targets",
            config.data_sources.len(),
            config.data_targets.len()
        );

        Integrator::try_from(config)
    }
}
