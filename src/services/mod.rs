// src/services/mod.rs

//! Services for fetching, extracting and comparing profile data.

mod compare;
mod fetch;
mod scrape;

pub use compare::render_comparison;
pub use fetch::{HttpFetcher, PageFetcher};
pub use scrape::{ProfileScraper, ScrapeOutcome};
