use crate::extract::error::ExtractionError;
use crate::load::error::LoadError;
use crate::notify::error::NotificationError;
use config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("Could not find config file at '{0}'")]
    NoConfigFileFound(PathBuf),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not build the HTTP client")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
