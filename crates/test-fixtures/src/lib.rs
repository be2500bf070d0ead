//! Test support for the Lumen crates: entity builders, fake remote and
//! storage collaborators, and the JSON sample corpus.

pub mod builders;
pub mod fakes;

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use lumen_core::models::{Ad, Corpus, Post, User};

pub use builders::{ad, post, user, AdBuilder, PostBuilder, UserBuilder};
pub use fakes::{FailingStore, FakeDirectory, FakeTrending, RemoteMode};

/// The instant fixtures are anchored on: 2024-06-01T12:00:00Z.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Directory holding the JSON fixtures of this crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Owned collections, in the wire format the remote API returns.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SampleCorpus {
    pub posts: Vec<Post>,
    pub users: Vec<User>,
    pub ads: Vec<Ad>,
}

impl SampleCorpus {
    pub fn as_corpus(&self) -> Corpus<'_> {
        Corpus::new(&self.posts, &self.users, &self.ads)
    }
}

/// The sample corpus shipped in `data/sample_corpus.json`.
pub fn load_sample_corpus() -> SampleCorpus {
    load_fixture("sample_corpus.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_corpus_exists() {
        assert!(fixture_exists("sample_corpus.json"));
    }

    #[test]
    fn sample_corpus_parses_wire_format() {
        let corpus = load_sample_corpus();
        assert_eq!(corpus.posts.len(), 6);
        assert_eq!(corpus.users.len(), 4);
        assert_eq!(corpus.ads.len(), 3);

        let first = &corpus.posts[0];
        assert_eq!(first.id, "p1");
        assert_eq!(first.author.handle, "alexr");
        assert!(first.radiance > 0.0);

        let hidden = corpus.users.iter().find(|u| u.id == "u4").unwrap();
        assert!(!hidden.is_searchable());
        assert_eq!(corpus.as_corpus().active_ads().count(), 2);
    }

    #[test]
    fn fixture_now_is_stable() {
        assert_eq!(fixture_now().to_rfc3339(), "2024-06-01T12:00:00+00:00");
    }
}
