//! Repository methods, implemented as `impl ProjectsDb` blocks.

pub mod project;
