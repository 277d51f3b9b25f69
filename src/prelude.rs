//! Prelude module for layout_date crate.
//!
//! Re-exports the derive macros shared across modules.

pub use derive_more::Display;
