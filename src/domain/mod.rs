//! Pure domain logic: the article model, timestamp normalization, and the
//! ordering validator. Nothing in here performs I/O.

pub mod article;
pub mod timestamp;
pub mod validation;

pub use article::{Article, RawArticle};
pub use timestamp::{ParsePolicy, TimestampParseError, parse_epoch_seconds};
pub use validation::{CheckOutcome, PushOutcome, RunStatus, ValidationState, check_order};
