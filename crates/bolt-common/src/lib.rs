//! Common utilities and data structures for Bolt.
//!
//! This crate provides the source model used across the Bolt toolchain:
//! - `SourceFile`: a named, read-only view of one source buffer
//! - `Span`: byte ranges within that buffer
//! - `Location`: human-facing line/column positions

mod location;
mod source;
mod span;

pub use location::Location;
pub use source::SourceFile;
pub use span::{BytePos, Span};
