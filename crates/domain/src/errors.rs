use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Capture error: {0}")]
    CaptureError(String),

    #[error("Capture device not found: {0}")]
    DeviceNotFound(String),

    #[error("No usable capture device")]
    NoUsableDevice,

    #[error("Malformed DNS payload: {0}")]
    MalformedDns(String),

    #[error("Unclassifiable packet: no recognized layer")]
    UnclassifiablePacket,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
