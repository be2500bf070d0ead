//! # lumen-trending
//!
//! Two ways to answer "what is trending":
//! - [`aggregate::compute_trending`] buckets hashtag occurrences from a
//!   local corpus into rolling windows and ranks them. [`TrendingEngine`]
//!   memoizes the result in-process through [`TrendMemo`].
//! - [`TrendCache`] asks the remote trending endpoint and keeps the answer
//!   in durable storage, serving stale data when the remote is unreachable.

pub mod aggregate;
pub mod cache;
pub mod engine;
pub mod memo;

pub use cache::TrendCache;
pub use engine::TrendingEngine;
pub use memo::TrendMemo;
