//! Builders for posts, users and ads with sensible defaults: a random id,
//! empty text fields, and a timestamp of [`fixture_now`](crate::fixture_now).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use lumen_core::models::{Ad, AdStatus, AuthorRef, Comment, PrivacySettings, Post, User};

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn post(content: &str) -> PostBuilder {
    PostBuilder {
        post: Post {
            id: fresh_id(),
            content: content.to_string(),
            author: AuthorRef::default(),
            hashtags: Vec::new(),
            comments: Vec::new(),
            timestamp: Some(crate::fixture_now()),
            radiance: 0.0,
        },
    }
}

pub fn user(name: &str) -> UserBuilder {
    UserBuilder {
        user: User {
            id: fresh_id(),
            name: name.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            handle: String::new(),
            bio: String::new(),
            company_name: String::new(),
            industry: String::new(),
            trust_score: 0.0,
            privacy_settings: PrivacySettings::default(),
        },
    }
}

/// An active ad with the given headline.
pub fn ad(headline: &str) -> AdBuilder {
    AdBuilder {
        ad: Ad {
            id: fresh_id(),
            headline: headline.to_string(),
            description: String::new(),
            owner_name: String::new(),
            hashtags: Vec::new(),
            cta_text: String::new(),
            status: AdStatus::Active,
        },
    }
}

fn tags(hashtags: &[&str]) -> Vec<String> {
    hashtags.iter().map(|t| t.to_string()).collect()
}

#[derive(Debug, Clone)]
pub struct PostBuilder {
    post: Post,
}

impl PostBuilder {
    pub fn id(mut self, id: &str) -> Self {
        self.post.id = id.to_string();
        self
    }

    pub fn author(mut self, name: &str, handle: &str) -> Self {
        self.post.author = AuthorRef {
            name: name.to_string(),
            handle: handle.to_string(),
        };
        self
    }

    pub fn hashtags(mut self, hashtags: &[&str]) -> Self {
        self.post.hashtags = tags(hashtags);
        self
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.post.comments.push(Comment {
            text: text.to_string(),
        });
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.post.timestamp = Some(timestamp);
        self
    }

    pub fn radiance(mut self, radiance: f64) -> Self {
        self.post.radiance = radiance;
        self
    }

    pub fn build(self) -> Post {
        self.post
    }
}

#[derive(Debug, Clone)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    pub fn id(mut self, id: &str) -> Self {
        self.user.id = id.to_string();
        self
    }

    pub fn names(mut self, first: &str, last: &str) -> Self {
        self.user.first_name = first.to_string();
        self.user.last_name = last.to_string();
        self
    }

    pub fn handle(mut self, handle: &str) -> Self {
        self.user.handle = handle.to_string();
        self
    }

    pub fn bio(mut self, bio: &str) -> Self {
        self.user.bio = bio.to_string();
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.user.company_name = company.to_string();
        self
    }

    pub fn industry(mut self, industry: &str) -> Self {
        self.user.industry = industry.to_string();
        self
    }

    pub fn trust(mut self, trust_score: f64) -> Self {
        self.user.trust_score = trust_score;
        self
    }

    /// Opt the user out of search and suggestions.
    pub fn hidden(mut self) -> Self {
        self.user.privacy_settings.show_in_search = false;
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}

#[derive(Debug, Clone)]
pub struct AdBuilder {
    ad: Ad,
}

impl AdBuilder {
    pub fn id(mut self, id: &str) -> Self {
        self.ad.id = id.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.ad.description = description.to_string();
        self
    }

    pub fn owner(mut self, owner_name: &str) -> Self {
        self.ad.owner_name = owner_name.to_string();
        self
    }

    pub fn hashtags(mut self, hashtags: &[&str]) -> Self {
        self.ad.hashtags = tags(hashtags);
        self
    }

    pub fn cta(mut self, cta_text: &str) -> Self {
        self.ad.cta_text = cta_text.to_string();
        self
    }

    pub fn status(mut self, status: AdStatus) -> Self {
        self.ad.status = status;
        self
    }

    pub fn build(self) -> Ad {
        self.ad
    }
}
