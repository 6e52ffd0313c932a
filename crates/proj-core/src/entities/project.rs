use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, Material, Step};

/// A tracked project and the child rows it aggregates.
///
/// `id` is `None` until the store assigns one on insert and never changes
/// afterwards. Child collections are only populated by a by-id fetch; list
/// fetches return summaries with empty collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: Option<i64>,
    pub name: String,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    /// Suggested range 1-5; not enforced by the store.
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Project {
    /// A transient project with only a name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when no child collection holds any rows.
    #[must_use]
    pub fn has_no_children(&self) -> bool {
        self.materials.is_empty() && self.steps.is_empty() && self.categories.is_empty()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{id}: {}", self.name),
            None => write!(f, "<unsaved>: {}", self.name),
        }
    }
}
