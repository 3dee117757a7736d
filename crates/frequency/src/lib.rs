//! Frequency distributions over a token stream.
//!
//! [`analyze`] computes the four distributions the report is built from:
//! words, word lengths, bigrams and trigrams. Counting is exact and
//! exhaustive, with no sampling, and key order is the order of first
//! appearance, so repeated runs over the same tokens produce identical
//! distributions and identical rankings.
//!
//! ```rust
//! use frequency::analyze;
//!
//! let dists = analyze(&["bacon", "bacon", "pork"]);
//! assert_eq!(dists.words.count("bacon"), 2);
//! assert_eq!(dists.bigrams.total(), 2);
//! assert_eq!(dists.trigrams.total(), 1);
//! ```

mod analysis;
mod dist;
mod key;

pub use crate::analysis::{analyze, Bigram, Distributions, Trigram};
pub use crate::dist::{FreqDist, Ranked};
pub use crate::key::{tuple_repr, KeyLabel};
