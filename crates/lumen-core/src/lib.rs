//! # lumen-core
//!
//! Foundation crate for the Lumen discovery engine.
//! Defines the corpus entities, search and trending result types, the
//! collaborator traits (storage, remote endpoints, clock), errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LumenConfig;
pub use errors::{LumenError, LumenResult};
pub use models::{
    Ad, Corpus, Post, SearchFilters, SearchResult, TrendCategory, TrendingTopic, User,
};
