use thiserror::Error;

pub type Result<T, E = HostError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("backend not available in this build: {0}")]
    Unsupported(&'static str),
    #[error("metrics init error: {0}")]
    Metrics(String),
}
