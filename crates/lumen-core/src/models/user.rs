use serde::{Deserialize, Serialize};

/// A platform member. Optional profile fields are defaulted to empty strings
/// when the record is deserialized, so scoring never sees a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    /// Trust score on a 0–100 scale.
    #[serde(default)]
    pub trust_score: f64,
    #[serde(default)]
    pub privacy_settings: PrivacySettings,
}

impl User {
    /// Whether the user may appear in search results and suggestions.
    pub fn is_searchable(&self) -> bool {
        self.privacy_settings.show_in_search
    }

    /// The name shown for this user: `name`, or `first last` when unset.
    pub fn display_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.clone();
        }
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    #[serde(default = "default_true")]
    pub show_in_search: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            show_in_search: true,
        }
    }
}

fn default_true() -> bool {
    true
}
