//! Shapes of the data returned by the remote search and trending endpoints.
//!
//! Every field is defaulted so a partial payload decodes instead of failing:
//! a missing `success` reads as unsuccessful, a missing or malformed count as
//! zero, a missing id as the empty string. List elements that cannot be
//! decoded are skipped and the rest are kept.

use serde::{Deserialize, Deserializer, Serialize};

use super::{Post, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemotePosts {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "super::lenient::skip_malformed")]
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteUsers {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "super::lenient::skip_malformed")]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "super::lenient::skip_malformed")]
    pub data: Vec<TrendCount>,
}

/// One hashtag aggregate as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendCount {
    #[serde(rename = "_id", deserialize_with = "super::lenient::id_string")]
    pub id: String,
    #[serde(deserialize_with = "super::lenient::count")]
    pub count: u64,
}

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
