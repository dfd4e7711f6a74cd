use crate::data::SensorType;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum SecurityError {
    #[error("Sensor not registered: {name} ({kind})")]
    UnknownSensor { name: String, kind: SensorType },

    #[error("Stored state is corrupt: {0}")]
    StorageCorrupt(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SecurityError>;
