//! Fetch-side error taxonomy.
//!
//! All of these are fatal for the run: a failed or malformed page fetch
//! aborts without retry and without writing a report. Ordering violations
//! and parse anomalies are not errors; they are absorbed into the run
//! status and the normalizer respectively.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request for {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    #[error("invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("expected element '{selector}' not found on {url}")]
    MissingElement { selector: String, url: String },

    #[error("cannot resolve next-page link '{href}' against {base}: {reason}")]
    BadNextPageLink {
        href: String,
        base: String,
        reason: String,
    },

    #[error("invalid base URL '{url}': {reason}")]
    BadBaseUrl { url: String, reason: String },
}

pub type FetchResult<T> = Result<T, FetchError>;
