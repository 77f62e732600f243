//! Collaborators around the domain core: configuration, the rate-limited
//! HTTP client, HTML extraction, the paginated fetcher, and logging setup.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod html_parser;
pub mod http_client;
pub mod logging;

pub use config::AppConfig;
pub use error::FetchError;
pub use fetcher::{HttpPageFetcher, PageFetcher};
pub use http_client::HttpClient;
