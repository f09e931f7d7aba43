use dicecourt_core::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutoplayError {
    #[error("setup error: {0}")]
    Setup(String),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl AutoplayError {
    /// Engine rejections leave the match untouched, so the bot may try
    /// another candidate.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AutoplayError::Engine(
                EngineError::InvalidSelection
                    | EngineError::CardUnavailable
                    | EngineError::EmptyFixSelection
                    | EngineError::IllegalCardChoice(_)
            )
        )
    }
}

impl From<std::io::Error> for AutoplayError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for AutoplayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
