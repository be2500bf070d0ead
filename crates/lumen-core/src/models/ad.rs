use serde::{Deserialize, Serialize};

/// A sponsored ad. Ads carry no timestamp: they are always "current".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub cta_text: String,
    #[serde(default)]
    pub status: AdStatus,
}

impl Ad {
    pub fn is_active(&self) -> bool {
        self.status == AdStatus::Active
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    Active,
    Paused,
    Ended,
    #[default]
    Draft,
    /// Any status string this build does not know about.
    #[serde(other)]
    Unknown,
}
