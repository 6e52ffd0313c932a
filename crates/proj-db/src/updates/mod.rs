//! Partial-update types for entity mutations.
//!
//! `None` leaves a field untouched; for nullable columns `Some(None)` clears
//! the stored value.

pub mod project;
