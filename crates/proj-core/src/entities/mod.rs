//! Entity structs for the project tracker.
//!
//! Each entity maps to a table in the relational store. Child entities carry
//! the id of their owning project; their lifetime is tied to that id, not to
//! the in-memory `Project` value.

mod category;
mod material;
mod project;
mod step;

pub use category::Category;
pub use material::Material;
pub use project::Project;
pub use step::Step;
