use serde::{Deserialize, Serialize};

/// A category a project is filed under (many-to-many via `project_category`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
}
