//! Timestamp normalization for scraped age strings.
//!
//! Hacker News encodes the creation time in the `title` attribute of the
//! `.age` element as `<iso-datetime> <epoch-seconds>`. The second
//! whitespace-delimited token is the canonical ordering key.

use thiserror::Error;
use tracing::warn;

/// How the normalizer handles input it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Coerce any parse failure to epoch 0 so malformed entries sort as
    /// the oldest possible item instead of aborting the run.
    #[default]
    ZeroDefault,
    /// Surface parse failures as errors.
    Reject,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampParseError {
    #[error("timestamp field is empty or missing")]
    Empty,
    #[error("timestamp '{0}' has no epoch token after the first whitespace")]
    MissingEpochToken(String),
    #[error("epoch token '{token}' in timestamp '{raw}' is not an integer")]
    NonNumericEpoch { raw: String, token: String },
}

/// Extract the epoch-seconds integer from a raw composite timestamp string.
///
/// Under [`ParsePolicy::ZeroDefault`] this never fails: empty input, a
/// missing second token, or a non-numeric token all normalize to `0`.
pub fn parse_epoch_seconds(
    raw: Option<&str>,
    policy: ParsePolicy,
) -> Result<i64, TimestampParseError> {
    match try_parse(raw) {
        Ok(epoch) => Ok(epoch),
        Err(e) => match policy {
            ParsePolicy::ZeroDefault => {
                warn!("normalizing unparseable timestamp to epoch 0: {e}");
                Ok(0)
            }
            ParsePolicy::Reject => Err(e),
        },
    }
}

fn try_parse(raw: Option<&str>) -> Result<i64, TimestampParseError> {
    let raw = raw.unwrap_or("");
    if raw.trim().is_empty() {
        return Err(TimestampParseError::Empty);
    }
    let token = raw
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| TimestampParseError::MissingEpochToken(raw.to_string()))?;
    token
        .parse::<i64>()
        .map_err(|_| TimestampParseError::NonNumericEpoch {
            raw: raw.to_string(),
            token: token.to_string(),
        })
}
