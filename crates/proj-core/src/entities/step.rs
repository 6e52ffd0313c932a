use serde::{Deserialize, Serialize};

/// One step of a project's instructions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    pub id: Option<i64>,
    pub project_id: i64,
    pub text: String,
    pub order: i32,
}
