//! # proj-core
//!
//! Core types shared by every crate of the project tracker:
//! - Entity structs (projects and the materials, steps and categories they aggregate)
//! - Fixed-point hour helpers (two fractional digits, always)
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod hours;
