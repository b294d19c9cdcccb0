// src/server.rs

//! HTTP server: page routes, the comparison endpoint and static assets.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::post,
};
use futures::future;
use serde::Deserialize;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::Result;
use crate::models::{Config, ProfileSummary};
use crate::services::{HttpFetcher, ProfileScraper, render_comparison};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    scraper: Arc<ProfileScraper>,
}

impl AppState {
    pub fn new(scraper: Arc<ProfileScraper>) -> Self {
        Self { scraper }
    }
}

/// Form body of the comparison endpoint.
#[derive(Debug, Deserialize)]
pub struct CompareForm {
    pub profile1: String,
    pub profile2: String,
}

/// Build the application router.
///
/// `GET /` and unmatched paths are served from the static asset directory;
/// `GET /compare` serves the form page and `POST /compare` runs the
/// comparison.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();

    Router::new()
        .route(
            "/compare",
            post(compare_profiles).get_service(ServeFile::new(static_dir.join("compare.html"))),
        )
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// POST /compare - Scrape both profiles and render the comparison page.
async fn compare_profiles(
    State(state): State<AppState>,
    Form(form): Form<CompareForm>,
) -> Response {
    match run_comparison(&state, &form).await {
        Ok(page) => Html(page).into_response(),
        Err(error) => {
            log::error!(
                "Comparison of {} vs {} failed: {}",
                form.profile1,
                form.profile2,
                error
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error during comparison. Check server logs.",
            )
                .into_response()
        }
    }
}

/// Scrape both URLs concurrently and render the full comparison document.
async fn run_comparison(state: &AppState, form: &CompareForm) -> Result<String> {
    let (first, second) = future::try_join(
        state.scraper.scrape(&form.profile1),
        state.scraper.scrape(&form.profile2),
    )
    .await?;

    if first.is_degraded() {
        log::warn!("Rendering degraded result for {}", form.profile1);
    }
    if second.is_degraded() {
        log::warn!("Rendering degraded result for {}", form.profile2);
    }

    let first = first.into_summary();
    let second = second.into_summary();

    let fragment = render_comparison(
        &first.achievements,
        &second.achievements,
        &first.profile_name,
        &second.profile_name,
    );

    Ok(render_page(&first, &second, &fragment))
}

/// Wrap a comparison fragment in the fixed document shell.
///
/// The class names are the contract with the static stylesheet.
fn render_page(first: &ProfileSummary, second: &ProfileSummary, fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Achievement Comparison</title>
    <link rel="stylesheet" href="style.css">
  </head>
  <body class="compare-page">
    <div class="comparison-container">
      <h3>{} vs {}</h3>
      <div class="achievements-list">
        <div class="achievement-item">{}</div>
      </div>
    </div>
  </body>
</html>
"#,
        first.profile_name, second.profile_name, fragment
    )
}

/// Run the server until shutdown.
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let fetcher = Arc::new(HttpFetcher::new(&config.scraper)?);
    let scraper = Arc::new(ProfileScraper::new(&config.selectors, fetcher)?);
    let app = router(AppState::new(scraper), &config.server.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    log::info!("Shutdown signal received");
}
