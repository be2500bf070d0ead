//! # lumen-search
//!
//! Query → tokenize → per-entity weighted scoring → (remote-augmented corpus)
//! → date filter → stable sort.
//!
//! Scoring is synchronous and pure; the only suspension points are the
//! optional remote post/user lookups made by [`SearchEngine`].

pub mod engine;
pub mod merge;
pub mod ranking;
pub mod scoring;
pub mod searchers;
pub mod suggest;
pub mod tokenize;

pub use engine::SearchEngine;
pub use tokenize::{QueryToken, QueryTokens};
