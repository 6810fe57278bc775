//! List-adapter utilities for the `sectionizer` crate.
//!
//! The `sectionizer` crate owns the position translation between a sorted row source and a
//! sectioned view of it. This crate provides small, framework-neutral helpers that list widgets
//! commonly need on top of that:
//!
//! - View-type bookkeeping (headers as an extra, non-selectable view type)
//! - Sticky/pinned section headers for a visible range
//! - Row anchoring across data changes (keep the cursor on the same record after a rebuild)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

#[cfg(test)]
extern crate std;

mod anchor;
mod controller;
mod item;
mod sticky;

#[cfg(test)]
mod tests;

pub use anchor::{RowAnchor, apply_anchor, capture_anchor};
pub use controller::Controller;
pub use item::ListItem;
pub use sticky::{for_each_header_in_range, for_each_index_with_sticky_header, sticky_header_for};
