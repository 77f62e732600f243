//! Paginated page fetcher.
//!
//! The collection loop only ever sees [`PageFetcher`]; the HTTP
//! implementation below fetches real listing pages, while tests drive the
//! loop with scripted in-memory pages.

use async_trait::async_trait;
use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::domain::article::RawArticle;

use super::config::AppConfig;
use super::error::{FetchError, FetchResult};
use super::html_parser::NewestPageParser;
use super::http_client::HttpClient;

/// A paginated source of listing rows.
#[async_trait]
pub trait PageFetcher {
    /// Rows on the page the fetcher currently points at, in page order.
    async fn items_on_current_page(&mut self) -> FetchResult<Vec<RawArticle>>;

    /// Advance to the next page. `Ok(true)` when the fetcher moved,
    /// `Ok(false)` when the listing is exhausted. Suspends until the next
    /// page's content is loaded.
    async fn advance_to_next_page(&mut self) -> FetchResult<bool>;
}

/// One fetched-and-parsed listing page.
///
/// The scraper DOM is not `Send`, so pages are reduced to plain data
/// eagerly instead of holding `Html` across await points.
struct PageContent {
    url: Url,
    articles: Vec<RawArticle>,
    next_href: Option<String>,
}

/// [`PageFetcher`] over live HTTP, following the "More" link to advance.
pub struct HttpPageFetcher {
    client: HttpClient,
    parser: NewestPageParser,
    current: PageContent,
}

impl HttpPageFetcher {
    /// Fetch the first listing page. An empty first page is fatal: the
    /// listing markup is expected to contain article rows immediately.
    pub async fn open(client: HttpClient, config: &AppConfig) -> FetchResult<Self> {
        let url = Url::parse(&config.base_url).map_err(|e| FetchError::BadBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        let parser = NewestPageParser::new()?;
        let current = load_page(&client, &parser, url).await?;

        if current.articles.is_empty() {
            return Err(FetchError::MissingElement {
                selector: parser.row_selector().to_string(),
                url: current.url.to_string(),
            });
        }

        Ok(Self {
            client,
            parser,
            current,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn items_on_current_page(&mut self) -> FetchResult<Vec<RawArticle>> {
        Ok(self.current.articles.clone())
    }

    async fn advance_to_next_page(&mut self) -> FetchResult<bool> {
        let Some(href) = self.current.next_href.as_deref() else {
            info!("No more pages at {}", self.current.url);
            return Ok(false);
        };
        let next_url =
            self.current
                .url
                .join(href)
                .map_err(|e| FetchError::BadNextPageLink {
                    href: href.to_string(),
                    base: self.current.url.to_string(),
                    reason: e.to_string(),
                })?;
        self.current = load_page(&self.client, &self.parser, next_url).await?;
        Ok(true)
    }
}

async fn load_page(
    client: &HttpClient,
    parser: &NewestPageParser,
    url: Url,
) -> FetchResult<PageContent> {
    let body = client.get_text(url.as_str()).await?;
    let content = parse_page(parser, &body, url);
    debug!(
        "Loaded {} with {} rows (more: {})",
        content.url,
        content.articles.len(),
        content.next_href.is_some()
    );
    Ok(content)
}

// Synchronous on purpose: the Html document must be dropped before the
// next await.
fn parse_page(parser: &NewestPageParser, body: &str, url: Url) -> PageContent {
    let document = Html::parse_document(body);
    let articles = parser.extract_articles(&document);
    let next_href = parser.next_page_href(&document);
    PageContent {
        url,
        articles,
        next_href,
    }
}
