use thiserror::Error;

/// Errors raised by a durable key-value backend.
///
/// These never reach the user: slots log them and keep the in-memory value.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to serialize value for {key}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("Storage rejected write for {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while building export artifacts
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while handing an artifact to the user
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Failed to write {filename}: {source}")]
    Write {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Browser download failed for {filename}: {reason}")]
    Browser { filename: String, reason: String },
}

/// Everything that can go wrong between pressing "Download" and the files landing
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Package(#[from] PackageError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
