/// Durable key-value storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("stored value could not be decoded: {message}")]
    Serialization { message: String },

    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },
}
