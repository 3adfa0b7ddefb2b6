use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainlogError {
    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrainlogError>;
