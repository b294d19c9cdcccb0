// src/models/selectors.rs

//! CSS selectors for scraping a profile page.

use serde::{Deserialize, Serialize};

/// CSS selectors describing the markup shape of a profile page.
///
/// The defaults target the platform's current achievement page layout;
/// a markup change is a configuration change, not a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSelectors {
    /// Selector for the profile display name element
    #[serde(default = "default_profile_name")]
    pub profile_name: String,

    /// Selector for each achievement container element
    #[serde(default = "default_achievement")]
    pub achievement: String,

    /// Selector for the title element within a container
    #[serde(default = "default_title")]
    pub title: String,

    /// Selector for the unlock-time element within a container
    #[serde(default = "default_unlock_time")]
    pub unlock_time: String,

    /// Selector for the unlocked-state marker within a container
    #[serde(default = "default_unlocked")]
    pub unlocked: String,
}

fn default_profile_name() -> String {
    ".whiteLink.persona_name_text_content".to_string()
}

fn default_achievement() -> String {
    ".achieveTxtHolder".to_string()
}

fn default_title() -> String {
    ".achieveTxt h3".to_string()
}

fn default_unlock_time() -> String {
    ".achieveUnlockTime".to_string()
}

fn default_unlocked() -> String {
    ".achieveState".to_string()
}

impl Default for ProfileSelectors {
    fn default() -> Self {
        Self {
            profile_name: default_profile_name(),
            achievement: default_achievement(),
            title: default_title(),
            unlock_time: default_unlock_time(),
            unlocked: default_unlocked(),
        }
    }
}

impl ProfileSelectors {
    /// True if any selector string is blank.
    pub fn has_empty(&self) -> bool {
        [
            &self.profile_name,
            &self.achievement,
            &self.title,
            &self.unlock_time,
            &self.unlocked,
        ]
        .iter()
        .any(|s| s.trim().is_empty())
    }
}
