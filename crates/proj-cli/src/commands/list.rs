use proj_core::entities::Project;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// One line of `projects list`. Summaries carry no children, so none are shown.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct ProjectRow<'a> {
    id: Option<i64>,
    name: &'a str,
    estimated_hours: Option<Decimal>,
    actual_hours: Option<Decimal>,
    difficulty: Option<i32>,
}

impl<'a> From<&'a Project> for ProjectRow<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            id: project.id,
            name: &project.name,
            estimated_hours: project.estimated_hours,
            actual_hours: project.actual_hours,
            difficulty: project.difficulty,
        }
    }
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let projects = ctx.service.fetch_all_projects().await?;
    let rows = projects.iter().map(ProjectRow::from).collect::<Vec<_>>();
    output(&rows, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::render;

    #[test]
    fn rows_omit_children_and_notes() {
        let project = Project {
            id: Some(3),
            notes: Some("private".into()),
            ..Project::new("Fence")
        };

        let out = render(&vec![ProjectRow::from(&project)], OutputFormat::Raw).unwrap();

        assert_eq!(
            out,
            r#"[{"id":3,"name":"Fence","estimated_hours":null,"actual_hours":null,"difficulty":null}]"#
        );
    }
}
