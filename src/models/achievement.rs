//! Achievement data structures.

use serde::{Deserialize, Serialize};

/// A single achievement scraped from a profile page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    /// Achievement title
    pub title: String,

    /// Unlock time as free-form text from the page (empty when locked)
    pub unlock_time: String,

    /// Whether the profile has earned this achievement
    pub unlocked: bool,
}

/// Everything scraped from a single profile page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSummary {
    /// Profile display name (empty string when the page carries none)
    pub profile_name: String,

    /// Achievements in document order
    pub achievements: Vec<Achievement>,

    /// Count of unlocked achievements
    pub total_unlocked: usize,
}

impl ProfileSummary {
    /// Build a summary, deriving the unlocked total from the records.
    pub fn new(profile_name: String, achievements: Vec<Achievement>) -> Self {
        let total_unlocked = achievements.iter().filter(|a| a.unlocked).count();
        Self {
            profile_name,
            achievements,
            total_unlocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(title: &str, unlock_time: &str, unlocked: bool) -> Achievement {
        Achievement {
            title: title.to_string(),
            unlock_time: unlock_time.to_string(),
            unlocked,
        }
    }

    #[test]
    fn total_counts_only_unlocked() {
        let summary = ProfileSummary::new(
            "Alice".to_string(),
            vec![
                achievement("First Blood", "2020-01-01", true),
                achievement("Pacifist", "", false),
                achievement("Speedrun", "2021-06-15", true),
            ],
        );
        assert_eq!(summary.total_unlocked, 2);
        assert_eq!(summary.achievements.len(), 3);
    }

    #[test]
    fn empty_summary_has_zero_total() {
        let summary = ProfileSummary::new(String::new(), Vec::new());
        assert_eq!(summary.total_unlocked, 0);
        assert!(summary.achievements.is_empty());
    }
}
