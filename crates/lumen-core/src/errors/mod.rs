mod cloud_error;
mod search_error;
mod storage_error;

pub use cloud_error::CloudError;
pub use search_error::SearchError;
pub use storage_error::StorageError;

/// Result alias used across the workspace.
pub type LumenResult<T> = Result<T, LumenError>;

/// Top-level error for every Lumen subsystem.
///
/// None of these are fatal to the public search and trending surfaces:
/// engines recover from them locally and degrade to partial, stale, or
/// empty results.
#[derive(Debug, thiserror::Error)]
pub enum LumenError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("cloud error: {0}")]
    Cloud(#[from] CloudError),

    #[error("search error: {0}")]
    Search(#[from] SearchError),

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LumenError {
    /// Whether the error came from the network side of a remote call.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            LumenError::Cloud(CloudError::NetworkError { .. } | CloudError::HttpStatus { .. })
        )
    }
}
