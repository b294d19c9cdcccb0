// src/services/scrape.rs

//! Profile scraping service.
//!
//! Fetches a profile page and extracts its achievement list using
//! configured CSS selectors.

use std::sync::Arc;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Achievement, ProfileSelectors, ProfileSummary};
use crate::services::PageFetcher;

/// Result of scraping a single profile URL.
///
/// A fetch failure does not abort the comparison; it degrades to an empty
/// summary so the endpoint always renders something. The caller can still
/// see that degradation happened and why.
#[derive(Debug)]
pub enum ScrapeOutcome {
    /// The page was fetched and extracted normally.
    Complete(ProfileSummary),

    /// The page could not be fetched; the summary is empty.
    Degraded { summary: ProfileSummary, reason: String },
}

impl ScrapeOutcome {
    /// Unwrap into the summary, complete or not.
    pub fn into_summary(self) -> ProfileSummary {
        match self {
            Self::Complete(summary) => summary,
            Self::Degraded { summary, .. } => summary,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Selectors compiled into typed form at construction.
struct CompiledSelectors {
    profile_name: Selector,
    achievement: Selector,
    title: Selector,
    unlock_time: Selector,
    unlocked: Selector,
}

/// Service for scraping achievement lists from profile pages.
pub struct ProfileScraper {
    fetcher: Arc<dyn PageFetcher>,
    selectors: CompiledSelectors,
}

impl ProfileScraper {
    /// Create a new scraper, compiling the configured selectors.
    ///
    /// An invalid selector string is a configuration error surfaced at
    /// startup, not per request.
    pub fn new(selectors: &ProfileSelectors, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let selectors = CompiledSelectors {
            profile_name: Self::parse_selector(&selectors.profile_name)?,
            achievement: Self::parse_selector(&selectors.achievement)?,
            title: Self::parse_selector(&selectors.title)?,
            unlock_time: Self::parse_selector(&selectors.unlock_time)?,
            unlocked: Self::parse_selector(&selectors.unlocked)?,
        };
        Ok(Self { fetcher, selectors })
    }

    /// Fetch one profile URL and extract its achievement list.
    ///
    /// Network and HTTP-status failures degrade to an empty summary.
    /// A URL that does not parse at all propagates as an error.
    pub async fn scrape(&self, url: &str) -> Result<ScrapeOutcome> {
        let target = Url::parse(url)?;

        match self.fetcher.fetch(target.as_str()).await {
            Ok(markup) => Ok(ScrapeOutcome::Complete(self.extract(&markup))),
            Err(error) => {
                log::warn!("Failed to fetch profile {}: {}", url, error);
                Ok(ScrapeOutcome::Degraded {
                    summary: ProfileSummary::default(),
                    reason: error.to_string(),
                })
            }
        }
    }

    /// Extract a profile summary from raw markup.
    ///
    /// The parser recovers from malformed input, so this never fails;
    /// markup that matches nothing yields an empty summary.
    pub fn extract(&self, markup: &str) -> ProfileSummary {
        let document = Html::parse_document(markup);

        let profile_name = document
            .select(&self.selectors.profile_name)
            .next()
            .map(|el| collect_text(&el))
            .unwrap_or_default();

        let mut achievements = Vec::new();
        for item in document.select(&self.selectors.achievement) {
            let title = item
                .select(&self.selectors.title)
                .next()
                .map(|el| collect_text(&el))
                .unwrap_or_default();
            let unlock_time = item
                .select(&self.selectors.unlock_time)
                .next()
                .map(|el| collect_text(&el))
                .unwrap_or_default();
            let unlocked = item.select(&self.selectors.unlocked).next().is_some();

            achievements.push(Achievement {
                title,
                unlock_time,
                unlocked,
            });
        }

        ProfileSummary::new(profile_name, achievements)
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

/// Collect the text of an element, whitespace-trimmed.
fn collect_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Fetcher that serves a fixed markup string.
    struct FixtureFetcher(String);

    #[async_trait]
    impl PageFetcher for FixtureFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    /// Fetcher that always fails.
    struct FailingFetcher;

    #[async_trait]
    impl PageFetcher for FailingFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            Err(AppError::status(url, 503))
        }
    }

    fn scraper_with(fetcher: Arc<dyn PageFetcher>) -> ProfileScraper {
        ProfileScraper::new(&ProfileSelectors::default(), fetcher).unwrap()
    }

    const SAMPLE_PAGE: &str = r#"
        <html><body>
        <span class="whiteLink persona_name_text_content"> Alice </span>
        <div class="achieveTxtHolder">
            <img class="achieveState" src="unlocked.png">
            <div class="achieveTxt"><h3>First Blood</h3><h5>Win a duel</h5></div>
            <div class="achieveUnlockTime">Unlocked 2020-01-01</div>
        </div>
        <div class="achieveTxtHolder">
            <div class="achieveTxt"><h3>Pacifist</h3><h5>Finish without a kill</h5></div>
        </div>
        </body></html>
    "#;

    #[test]
    fn extract_reads_name_and_achievements_in_order() {
        let scraper = scraper_with(Arc::new(FixtureFetcher(String::new())));
        let summary = scraper.extract(SAMPLE_PAGE);

        assert_eq!(summary.profile_name, "Alice");
        assert_eq!(summary.achievements.len(), 2);
        assert_eq!(summary.achievements[0].title, "First Blood");
        assert_eq!(summary.achievements[0].unlock_time, "Unlocked 2020-01-01");
        assert!(summary.achievements[0].unlocked);
        assert_eq!(summary.achievements[1].title, "Pacifist");
        assert_eq!(summary.achievements[1].unlock_time, "");
        assert!(!summary.achievements[1].unlocked);
        assert_eq!(summary.total_unlocked, 1);
    }

    #[test]
    fn extract_without_achievements_is_empty() {
        let scraper = scraper_with(Arc::new(FixtureFetcher(String::new())));
        let summary = scraper.extract("<html><body><p>nothing here</p></body></html>");

        assert!(summary.achievements.is_empty());
        assert_eq!(summary.total_unlocked, 0);
        assert_eq!(summary.profile_name, "");
    }

    #[test]
    fn extract_tolerates_malformed_markup() {
        let scraper = scraper_with(Arc::new(FixtureFetcher(String::new())));
        let summary = scraper.extract("<div><span class=\"unclosed");

        assert!(summary.achievements.is_empty());
        assert_eq!(summary.total_unlocked, 0);
    }

    #[test]
    fn invalid_selector_is_a_construction_error() {
        let mut selectors = ProfileSelectors::default();
        selectors.title = "[[invalid".to_string();
        let result = ProfileScraper::new(&selectors, Arc::new(FailingFetcher));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn scrape_degrades_on_fetch_failure() {
        let scraper = scraper_with(Arc::new(FailingFetcher));
        let outcome = scraper.scrape("https://example.com/profile").await.unwrap();

        assert!(outcome.is_degraded());
        let summary = outcome.into_summary();
        assert!(summary.achievements.is_empty());
        assert_eq!(summary.profile_name, "");
    }

    #[tokio::test]
    async fn scrape_rejects_unparseable_url() {
        let scraper = scraper_with(Arc::new(FixtureFetcher(SAMPLE_PAGE.to_string())));
        assert!(scraper.scrape("not a url").await.is_err());
    }

    #[tokio::test]
    async fn scrape_completes_on_fetch_success() {
        let scraper = scraper_with(Arc::new(FixtureFetcher(SAMPLE_PAGE.to_string())));
        let outcome = scraper.scrape("https://example.com/profile").await.unwrap();

        assert!(!outcome.is_degraded());
        assert_eq!(outcome.into_summary().profile_name, "Alice");
    }
}
