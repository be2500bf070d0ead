use super::{Ad, Post, User};

/// Read-only view of the collections supplied to one search call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Corpus<'a> {
    pub posts: &'a [Post],
    pub users: &'a [User],
    pub ads: &'a [Ad],
}

impl<'a> Corpus<'a> {
    pub fn new(posts: &'a [Post], users: &'a [User], ads: &'a [Ad]) -> Self {
        Self { posts, users, ads }
    }

    /// Ads with `status == active`; the only ads search and trending see.
    pub fn active_ads(&self) -> impl Iterator<Item = &'a Ad> {
        self.ads.iter().filter(|ad| ad.is_active())
    }
}

/// Entities identified by a stable string id.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Post {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Ad {
    fn id(&self) -> &str {
        &self.id
    }
}
