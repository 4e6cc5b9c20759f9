use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No chart data to export")]
    EmptySeries,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
