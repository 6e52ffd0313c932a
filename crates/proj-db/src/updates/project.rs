//! Project update builder.

use rust_decimal::Decimal;

use proj_core::entities::Project;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub estimated_hours: Option<Option<Decimal>>,
    pub actual_hours: Option<Option<Decimal>>,
    pub difficulty: Option<Option<i32>>,
    pub notes: Option<Option<String>>,
}

impl ProjectUpdate {
    /// True when applying the update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.estimated_hours.is_none()
            && self.actual_hours.is_none()
            && self.difficulty.is_none()
            && self.notes.is_none()
    }

    /// Copy of `project` with every set field replaced. Id and child
    /// collections are kept.
    #[must_use]
    pub fn apply_to(&self, project: &Project) -> Project {
        let mut merged = project.clone();
        if let Some(name) = &self.name {
            merged.name.clone_from(name);
        }
        if let Some(hours) = self.estimated_hours {
            merged.estimated_hours = hours;
        }
        if let Some(hours) = self.actual_hours {
            merged.actual_hours = hours;
        }
        if let Some(difficulty) = self.difficulty {
            merged.difficulty = difficulty;
        }
        if let Some(notes) = &self.notes {
            merged.notes.clone_from(notes);
        }
        merged
    }
}

pub struct ProjectUpdateBuilder(ProjectUpdate);

impl ProjectUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn estimated_hours(mut self, hours: Option<Decimal>) -> Self {
        self.0.estimated_hours = Some(hours);
        self
    }

    #[must_use]
    pub fn actual_hours(mut self, hours: Option<Decimal>) -> Self {
        self.0.actual_hours = Some(hours);
        self
    }

    #[must_use]
    pub fn difficulty(mut self, difficulty: Option<i32>) -> Self {
        self.0.difficulty = Some(difficulty);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectUpdate {
        self.0
    }
}

impl Default for ProjectUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
