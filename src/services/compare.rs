// src/services/compare.rs

//! Achievement comparison rendering.

use crate::models::Achievement;

/// Render the comparison of two achievement lists as an HTML fragment.
///
/// Walks the first list in its original order; for each record, the first
/// title-equal record of the second list (case-sensitive, no normalization)
/// pairs the two unlock times, otherwise the record is reported as exclusive.
/// Achievements present only in the second list are not reported. The final
/// line carries both full list lengths, unlocked or not.
pub fn render_comparison(
    first: &[Achievement],
    second: &[Achievement],
    first_name: &str,
    second_name: &str,
) -> String {
    let mut result = String::from("Comparison Results:<br>");

    for achievement in first {
        match second.iter().find(|other| other.title == achievement.title) {
            Some(matched) => {
                result.push_str(&format!(
                    "<p>{}: {} ({}) vs {} ({})</p>",
                    achievement.title,
                    first_name,
                    achievement.unlock_time,
                    second_name,
                    matched.unlock_time
                ));
            }
            None => {
                result.push_str(&format!(
                    "<p>{}: Present only in {}</p>",
                    achievement.title, first_name
                ));
            }
        }
    }

    result.push_str(&format!(
        "<p>Total Achievements: {} ({}) vs {} ({})</p>",
        first_name,
        first.len(),
        second_name,
        second.len()
    ));

    result
}
