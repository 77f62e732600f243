//! HTML extraction for the newest listing.
//!
//! Each article is a `tr.athing` row carrying the item id; the creation
//! time lives in the *following* row, in the `title` attribute of the
//! `.age` element. Pagination is a single `a.morelink` anchor.

use scraper::{Element, ElementRef, Html, Selector};
use tracing::debug;

use crate::domain::article::RawArticle;

use super::error::{FetchError, FetchResult};

const ROW_SELECTOR: &str = "tr.athing";
const RANK_SELECTOR: &str = ".rank";
const TITLE_LINK_SELECTOR: &str = ".titleline a";
const AGE_SELECTOR: &str = ".age";
const MORE_LINK_SELECTOR: &str = "a.morelink";

/// Compiled selectors for the newest listing page.
pub struct NewestPageParser {
    row: Selector,
    rank: Selector,
    title_link: Selector,
    age: Selector,
    more_link: Selector,
}

impl NewestPageParser {
    pub fn new() -> FetchResult<Self> {
        Ok(Self {
            row: compile(ROW_SELECTOR)?,
            rank: compile(RANK_SELECTOR)?,
            title_link: compile(TITLE_LINK_SELECTOR)?,
            age: compile(AGE_SELECTOR)?,
            more_link: compile(MORE_LINK_SELECTOR)?,
        })
    }

    /// Extract all article rows from a parsed listing page, in document
    /// order. Rows with odd markup still yield an article; missing fields
    /// stay `None` so the normalizer can apply its policy.
    pub fn extract_articles(&self, document: &Html) -> Vec<RawArticle> {
        let articles: Vec<RawArticle> = document
            .select(&self.row)
            .map(|row| self.extract_row(&row))
            .collect();
        debug!("Extracted {} article rows", articles.len());
        articles
    }

    fn extract_row(&self, row: &ElementRef) -> RawArticle {
        let id = row.value().attr("id").unwrap_or_default().to_string();
        let rank = row
            .select(&self.rank)
            .next()
            .map(|el| el.text().collect::<String>());
        let title_link = row.select(&self.title_link).next();
        let title = title_link.map(|el| el.text().collect::<String>());
        let link = title_link
            .and_then(|el| el.value().attr("href"))
            .map(str::to_string);
        let timestamp = self.timestamp_for_row(row);

        RawArticle {
            id,
            rank,
            title,
            link,
            timestamp,
        }
    }

    /// The age string sits in the subtext row immediately after the
    /// article row.
    fn timestamp_for_row(&self, row: &ElementRef) -> Option<String> {
        let subtext_row = row.next_sibling_element()?;
        subtext_row
            .select(&self.age)
            .next()
            .and_then(|el| el.value().attr("title"))
            .map(str::to_string)
    }

    /// Href of the "More" control, when the listing has further pages.
    pub fn next_page_href(&self, document: &Html) -> Option<String> {
        document
            .select(&self.more_link)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(str::to_string)
    }

    pub fn row_selector(&self) -> &'static str {
        ROW_SELECTOR
    }
}

fn compile(selector: &str) -> FetchResult<Selector> {
    Selector::parse(selector).map_err(|e| FetchError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
