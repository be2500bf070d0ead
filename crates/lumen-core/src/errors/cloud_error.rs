/// Remote endpoint errors.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("network error: {reason}")]
    NetworkError { reason: String },

    #[error("unexpected HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("{endpoint} reported an unsuccessful response")]
    Unsuccessful { endpoint: String },

    #[error("malformed response: {reason}")]
    Decode { reason: String },

    #[error("no remote configured for {endpoint}")]
    Offline { endpoint: String },
}
