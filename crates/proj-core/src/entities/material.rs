use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A material needed by a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Material {
    pub id: Option<i64>,
    pub project_id: i64,
    pub name: String,
    /// Number of units required.
    pub quantity: Option<i32>,
    pub cost: Option<Decimal>,
}
