//! Headless section headers for sorted row sources.
//!
//! For list-adapter utilities (view types, sticky headers, anchors), see the
//! `sectionizer-adapter` crate.
//!
//! Given a row source sorted by some string field, this crate presents it as one flat sequence
//! in which every non-empty bucket (a letter, or a numeric catch-all) gets a synthetic header
//! row right before its first member. The hard part is the position translation: mapping a
//! virtual position to either a header or a real row in `O(log S)` (S = number of sections),
//! including the `-1` / `count()` sentinels and empty sources.
//!
//! It is UI-agnostic. Your data layer implements [`RowSource`]; your list widget reads
//! [`SectionedSequence::count`], navigates, and checks [`SectionedSequence::is_header`] to pick
//! a header style.
//!
//! ```
//! use sectionizer::{MemorySource, SectionedSequence, SectionizerOptions};
//!
//! let rows = MemorySource::from_keys(["Ada", "Alan", "Barbara", "Dennis"]);
//! let mut seq = SectionedSequence::new(rows, SectionizerOptions::alphabetic(0));
//! assert_eq!(seq.count(), 4 + 3);
//!
//! assert!(seq.move_to(0));
//! assert!(seq.is_header());
//! assert_eq!(seq.field_value(0).as_deref(), Some("A"));
//!
//! assert!(seq.move_next());
//! assert_eq!(seq.field_value(0).as_deref(), Some("Ada"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bucket_index;
mod classifier;
mod options;
mod sequence;
mod source;
mod types;


pub use bucket_index::{BucketIndex, PresentBucket};
pub use classifier::{ALPHABET, AlphaNumeric, Alphabetic, BucketClassifier, NUMERIC_BUCKET};
pub use options::{SectionizerOptions, SharedClassifier};
pub use sequence::SectionedSequence;
pub use source::{MemorySource, RowSource};
pub use types::Slot;
