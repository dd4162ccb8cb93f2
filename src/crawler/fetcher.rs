//! Page fetching
//!
//! This module retrieves raw page content for a URL, either with a single
//! plain GET request or by loading the page in headless Chromium when the
//! site needs JavaScript to produce its content. All failures are values of
//! [`FetchError`]; the scheduler treats every one of them as "skip this URL
//! and keep crawling".

use crate::config::FetchMode;
use crate::FetchError;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;
use tokio::task::JoinHandle;
use url::Url;

/// Raw content of a successfully fetched page
#[derive(Debug)]
pub struct Fetched {
    /// Response body, or the serialized DOM in rendered mode
    pub body: String,

    /// HTTP status code; the CDP path has no status, so rendered fetches
    /// report 200
    pub status: u16,
}

/// Builds the HTTP client used for static fetches
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("docsweep/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// A launched headless browser plus the task draining its CDP event stream
struct BrowserHandle {
    browser: Browser,
    event_loop: JoinHandle<()>,
}

/// Retrieves raw page content, statically or rendered
///
/// The browser is a scoped resource: it is launched lazily on the first
/// rendered fetch and must be released with [`Fetcher::shutdown`] before the
/// fetcher is dropped. One fetch is in flight at a time.
pub struct Fetcher {
    client: Client,
    mode: FetchMode,
    browser: Option<BrowserHandle>,
}

impl Fetcher {
    /// Creates a fetcher for the given mode
    pub fn new(mode: FetchMode) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client()?,
            mode,
            browser: None,
        })
    }

    /// Fetches a URL according to the configured mode
    ///
    /// # Fetch Flow
    ///
    /// * Static mode: one GET request; non-2xx status, timeout, and network
    ///   failures are errors.
    /// * Rendered mode: load the page in Chromium, sleep the configured wait
    ///   for dynamic content to settle (a fixed wait, not event-driven),
    ///   then serialize the DOM. If the rendered fetch fails, fall back to a
    ///   static GET before giving up on the URL.
    ///
    /// No retries: a URL gets a single attempt per crawl run.
    pub async fn fetch(&mut self, url: &Url) -> Result<Fetched, FetchError> {
        match self.mode {
            FetchMode::Static => self.fetch_static(url).await,
            FetchMode::Rendered { wait } => match self.fetch_rendered(url, wait).await {
                Ok(fetched) => Ok(fetched),
                Err(e) => {
                    tracing::warn!(
                        "Rendered fetch failed for {} ({}), falling back to static fetch",
                        url,
                        e
                    );
                    self.fetch_static(url).await
                }
            },
        }
    }

    async fn fetch_static(&self, url: &Url) -> Result<Fetched, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| classify_reqwest_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(url, e))?;

        Ok(Fetched {
            body,
            status: status.as_u16(),
        })
    }

    async fn fetch_rendered(&mut self, url: &Url, wait: Duration) -> Result<Fetched, FetchError> {
        let render_error = |message: String| FetchError::Render {
            url: url.to_string(),
            message,
        };

        let handle = self.ensure_browser(url).await?;

        let page = handle
            .browser
            .new_page(url.as_str())
            .await
            .map_err(|e| render_error(e.to_string()))?;

        // Fixed settle time for SPA content
        tokio::time::sleep(wait).await;

        let body = page
            .content()
            .await
            .map_err(|e| render_error(e.to_string()))?;

        let _ = page.close().await;

        Ok(Fetched { body, status: 200 })
    }

    /// Launches the headless browser on first use
    async fn ensure_browser(&mut self, url: &Url) -> Result<&mut BrowserHandle, FetchError> {
        let render_error = |message: String| FetchError::Render {
            url: url.to_string(),
            message,
        };

        if self.browser.is_none() {
            let config = BrowserConfig::builder()
                .arg("--no-sandbox")
                .arg("--disable-dev-shm-usage")
                .build()
                .map_err(render_error)?;

            let (browser, mut handler) = Browser::launch(config)
                .await
                .map_err(|e| render_error(e.to_string()))?;

            // The CDP connection dies unless its event stream is drained
            let event_loop = tokio::spawn(async move {
                while let Some(event) = handler.next().await {
                    if event.is_err() {
                        break;
                    }
                }
            });

            tracing::info!("Launched headless browser for rendered fetches");
            self.browser = Some(BrowserHandle {
                browser,
                event_loop,
            });
        }

        match self.browser.as_mut() {
            Some(handle) => Ok(handle),
            None => Err(render_error("browser unavailable".to_string())),
        }
    }

    /// Tears down the headless browser, if one was launched
    ///
    /// The scheduler calls this on every exit path, including the
    /// page-ceiling early stop and fatal errors.
    pub async fn shutdown(&mut self) {
        if let Some(mut handle) = self.browser.take() {
            if let Err(e) = handle.browser.close().await {
                tracing::warn!("Failed to close browser cleanly: {}", e);
            }
            handle.event_loop.abort();
            tracing::info!("Headless browser shut down");
        }
    }
}

/// Maps reqwest failures onto the fetch error taxonomy
fn classify_reqwest_error(url: &Url, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            source: e,
        }
    }
}
