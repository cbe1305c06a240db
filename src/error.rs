use thiserror::Error;

pub type ClockResult<T> = Result<T, ClockError>;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
