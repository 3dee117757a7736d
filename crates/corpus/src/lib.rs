//! Corpus acquisition for lexreport.
//!
//! A request names how many paragraphs it wants; [`ParagraphCount`]
//! validates that number before anything touches the network, and a
//! [`CorpusSource`] turns it into paragraphs. [`BaconIpsumSource`] is the
//! production source; [`StaticSource`] serves a fixed list.
//!
//! ```rust
//! use corpus::{ParagraphCount, ValidationError};
//! use serde_json::json;
//!
//! let count = ParagraphCount::from_json(Some(&json!("3")), 100).unwrap();
//! assert_eq!(count.get(), 3);
//! assert_eq!(
//!     ParagraphCount::from_json(Some(&json!(2.5)), 100),
//!     Err(ValidationError::NotAnInteger)
//! );
//! ```

mod bacon;
mod config;
mod count;
mod error;
mod source;

pub use crate::bacon::BaconIpsumSource;
pub use crate::config::CorpusConfig;
pub use crate::count::ParagraphCount;
pub use crate::error::{FetchError, ValidationError};
pub use crate::source::{Corpus, CorpusSource, StaticSource};
