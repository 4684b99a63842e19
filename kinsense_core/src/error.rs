use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum MotionError {
    #[error("hardware error: {0}")]
    Hardware(String),
    #[error("hardware fault: {0}")]
    HardwareFault(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid state: {0}")]
    State(String),
    #[error("aborted: {0}")]
    Abort(AbortReason),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    #[error("cancelled by operator")]
    Cancelled,
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
