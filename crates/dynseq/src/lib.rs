//! A growable, index-addressable sequence container.
//!
//! [`DynamicSequence`] keeps its elements in an owned, fixed-length block of
//! slots and replaces the block with a larger one only when an insertion
//! finds it full. Capacity starts at 10 by default and doubles on each
//! growth step; a zero-capacity sequence grows straight to 10.
//!
//! # Operations
//!
//! | Operation | Valid index range | Error |
//! |-----------|-------------------|-------|
//! | [`add`](DynamicSequence::add) | n/a | none |
//! | [`insert`](DynamicSequence::insert) | `[0, len]` | [`SequenceError::IndexOutOfBounds`] |
//! | [`get`](DynamicSequence::get) / [`set`](DynamicSequence::set) / [`remove_at`](DynamicSequence::remove_at) | `[0, len)` | [`SequenceError::IndexOutOfBounds`] |
//! | [`with_capacity`](DynamicSequence::with_capacity) | capacity `>= 0` | [`SequenceError::InvalidArgument`] |
//!
//! Search ([`contains`](DynamicSequence::contains),
//! [`index_of`](DynamicSequence::index_of),
//! [`last_index_of`](DynamicSequence::last_index_of),
//! [`remove_value`](DynamicSequence::remove_value)) uses `PartialEq`, so an
//! `Option` element type gets absent-aware matching for free.
//!
//! The container is single-threaded and takes `&mut self` for every
//! mutation; it performs no internal locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
mod raw;
pub mod sequence;

// Public re-exports for the primary API surface.
pub use config::SequenceConfig;
pub use error::SequenceError;
pub use sequence::{DynamicSequence, NOT_FOUND};
