//! In-memory stand-ins for the remote and storage collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use lumen_core::errors::{CloudError, LumenResult, StorageError};
use lumen_core::models::{Post, RemotePosts, RemoteUsers, TrendCount, TrendingResponse, User};
use lumen_core::traits::{IKeyValueStore, IRemoteDirectory, IRemoteTrending};

/// How a fake remote answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteMode {
    /// `success: true` with the configured payload.
    Healthy,
    /// `success: false` with an empty payload.
    Unsuccessful,
    /// A network error.
    Down,
}

fn network_down(endpoint: &str) -> lumen_core::errors::LumenError {
    CloudError::NetworkError {
        reason: format!("connection refused: {endpoint}"),
    }
    .into()
}

/// Remote post/user search with canned results and call counters.
#[derive(Debug)]
pub struct FakeDirectory {
    posts: Vec<Post>,
    users: Vec<User>,
    mode: Mutex<RemoteMode>,
    post_calls: AtomicUsize,
    user_calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn new(posts: Vec<Post>, users: Vec<User>) -> Self {
        Self {
            posts,
            users,
            mode: Mutex::new(RemoteMode::Healthy),
            post_calls: AtomicUsize::new(0),
            user_calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn failing() -> Self {
        let fake = Self::empty();
        fake.set_mode(RemoteMode::Down);
        fake
    }

    pub fn set_mode(&self, mode: RemoteMode) {
        *self.mode.lock().unwrap() = mode;
    }

    fn mode(&self) -> RemoteMode {
        *self.mode.lock().unwrap()
    }

    pub fn post_calls(&self) -> usize {
        self.post_calls.load(Ordering::SeqCst)
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.post_calls() + self.user_calls()
    }
}

impl IRemoteDirectory for FakeDirectory {
    async fn search_posts(&self, _query: &str) -> LumenResult<RemotePosts> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        match self.mode() {
            RemoteMode::Healthy => Ok(RemotePosts {
                success: true,
                posts: self.posts.clone(),
            }),
            RemoteMode::Unsuccessful => Ok(RemotePosts::default()),
            RemoteMode::Down => Err(network_down("posts/search")),
        }
    }

    async fn search_users(&self, _query: &str) -> LumenResult<RemoteUsers> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        match self.mode() {
            RemoteMode::Healthy => Ok(RemoteUsers {
                success: true,
                users: self.users.clone(),
            }),
            RemoteMode::Unsuccessful => Ok(RemoteUsers::default()),
            RemoteMode::Down => Err(network_down("users/search")),
        }
    }
}

/// Remote trending endpoint with a swappable response and a call counter.
#[derive(Debug)]
pub struct FakeTrending {
    data: Mutex<Vec<TrendCount>>,
    mode: Mutex<RemoteMode>,
    calls: AtomicUsize,
}

impl FakeTrending {
    /// A healthy endpoint reporting `(hashtag, count)` pairs.
    pub fn with_counts(counts: &[(&str, u64)]) -> Self {
        Self {
            data: Mutex::new(counts_to_wire(counts)),
            mode: Mutex::new(RemoteMode::Healthy),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        let fake = Self::with_counts(&[]);
        fake.set_mode(RemoteMode::Down);
        fake
    }

    pub fn set_counts(&self, counts: &[(&str, u64)]) {
        *self.data.lock().unwrap() = counts_to_wire(counts);
    }

    pub fn set_mode(&self, mode: RemoteMode) {
        *self.mode.lock().unwrap() = mode;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn counts_to_wire(counts: &[(&str, u64)]) -> Vec<TrendCount> {
    counts
        .iter()
        .map(|(id, count)| TrendCount {
            id: id.to_string(),
            count: *count,
        })
        .collect()
}

impl IRemoteTrending for FakeTrending {
    async fn fetch_trending(&self, limit: usize, _hours: u32) -> LumenResult<TrendingResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mode = *self.mode.lock().unwrap();
        match mode {
            RemoteMode::Healthy => {
                let data = self.data.lock().unwrap().iter().take(limit).cloned().collect();
                Ok(TrendingResponse {
                    success: true,
                    data,
                })
            }
            RemoteMode::Unsuccessful => Ok(TrendingResponse::default()),
            RemoteMode::Down => Err(network_down("trending")),
        }
    }
}

/// A key-value store whose every operation fails.
#[derive(Debug, Default)]
pub struct FailingStore {
    gets: AtomicUsize,
    sets: AtomicUsize,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }
}

impl IKeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> LumenResult<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable {
            reason: "disk detached".into(),
        }
        .into())
    }

    fn set(&self, _key: &str, _value: &str) -> LumenResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable {
            reason: "disk detached".into(),
        }
        .into())
    }
}
