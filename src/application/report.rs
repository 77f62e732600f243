//! JSON report artifact for post-hoc inspection.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::article::Article;
use crate::domain::validation::{RunStatus, ValidationState};

/// Serialized run outcome. Written pretty-printed (2-space indent) so
/// failed runs can be diffed by hand.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport<'a> {
    pub passed: bool,
    pub total_articles: usize,
    pub articles: &'a [Article],
}

impl<'a> ValidationReport<'a> {
    pub fn from_state(state: &'a ValidationState) -> Self {
        Self {
            passed: state.status() == RunStatus::Passed,
            total_articles: state.len(),
            articles: state.accepted(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing validation report")
    }

    /// Overwrites any previous report at `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
        Ok(())
    }
}
