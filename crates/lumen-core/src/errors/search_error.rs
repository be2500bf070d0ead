/// Search filter errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("invalid {filter} filter value: {value:?}")]
    InvalidFilter { filter: &'static str, value: String },
}
