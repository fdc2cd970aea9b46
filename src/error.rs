use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to read dataset: {0}")]
    DatasetIo(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    DatasetCsv(#[from] csv::Error),
}
