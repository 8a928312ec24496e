use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid axis: {0}")]
    InvalidAxis(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown series `{0}`")]
    UnknownSeries(String),

    #[error("render failed: {0}")]
    Render(String),
}
