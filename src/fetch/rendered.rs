// src/fetch/rendered.rs

//! Rendered page fetcher backed by a headless browser.
//!
//! Pages that build their link lists client-side are empty in the raw HTTP
//! response. This backend loads each page in a browser tab, waits a fixed
//! settling interval for scripts to run, then extracts the resulting markup.

use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab, browser::default_executable};
use tokio::task;
use url::Url;

use crate::error::{AppError, FetchError, Result};
use crate::fetch::PageFetcher;
use crate::models::CrawlerConfig;

/// Fetches pages through a shared headless Chrome session.
///
/// The browser process is launched once at construction and terminated when
/// the fetcher is dropped. Each fetch opens its own incognito tab and closes
/// it again on every exit path.
pub struct RenderedFetcher {
    browser: Arc<Browser>,
    settle: Duration,
}

impl RenderedFetcher {
    /// Launch the browser session.
    ///
    /// Fails with [`AppError::Renderer`] if no Chrome binary is found or the
    /// process cannot be started, which aborts the crawl before it begins.
    pub fn launch(config: &CrawlerConfig) -> Result<Self> {
        let executable = default_executable().map_err(AppError::renderer)?;
        let options = LaunchOptions::default_builder()
            .path(Some(executable))
            .headless(true)
            .sandbox(false)
            .args(vec![OsStr::new("--disable-gpu")])
            .idle_browser_timeout(Duration::from_secs(config.timeout_secs.max(45)))
            .build()
            .map_err(|e| AppError::renderer(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| AppError::renderer(e.to_string()))?;
        log::debug!("headless browser session acquired");

        Ok(Self {
            browser: Arc::new(browser),
            settle: Duration::from_millis(config.render_settle_ms),
        })
    }
}

#[async_trait]
impl PageFetcher for RenderedFetcher {
    async fn fetch(&self, url: &Url) -> std::result::Result<String, FetchError> {
        let browser = Arc::clone(&self.browser);
        let target = url.to_string();
        let settle = self.settle;

        // The headless_chrome API is blocking; keep it off the async runtime.
        task::spawn_blocking(move || render_page(&browser, &target, settle))
            .await
            .map_err(|e| FetchError::Render(format!("renderer task failed: {e}")))?
    }
}

fn render_page(
    browser: &Browser,
    url: &str,
    settle: Duration,
) -> std::result::Result<String, FetchError> {
    let context = browser
        .new_context()
        .map_err(|e| FetchError::Render(e.to_string()))?;
    let tab = context
        .new_tab()
        .map_err(|e| FetchError::Render(e.to_string()))?;

    let markup = load_and_extract(&tab, url, settle);

    // Release the tab whether or not the load succeeded.
    if let Err(e) = tab.close(false) {
        log::debug!("could not close tab for {url}: {e}");
    }

    markup
}

fn load_and_extract(
    tab: &Arc<Tab>,
    url: &str,
    settle: Duration,
) -> std::result::Result<String, FetchError> {
    tab.navigate_to(url)
        .map_err(|e| FetchError::Render(e.to_string()))?
        .wait_until_navigated()
        .map_err(|e| FetchError::Render(e.to_string()))?;

    // Fixed wait for dynamic content to materialize.
    std::thread::sleep(settle);

    tab.get_content()
        .map_err(|e| FetchError::Render(e.to_string()))
}
