use proj_core::entities::Project;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = project_from_args(args)?;
    let saved = ctx.service.add_project(&project).await?;
    output(&saved, flags.format)
}

fn project_from_args(args: &AddArgs) -> anyhow::Result<Project> {
    let name = args.name.trim();
    anyhow::ensure!(!name.is_empty(), "project name cannot be blank");

    Ok(Project {
        name: name.to_string(),
        estimated_hours: args.estimated_hours,
        actual_hours: args.actual_hours,
        difficulty: args.difficulty,
        notes: args.notes.clone(),
        ..Project::default()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(name: &str) -> AddArgs {
        AddArgs {
            name: name.to_string(),
            estimated_hours: None,
            actual_hours: None,
            difficulty: Some(2),
            notes: Some("stain first".into()),
        }
    }

    #[test]
    fn builds_transient_project() {
        let project = project_from_args(&args("  Deck ")).unwrap();
        assert_eq!(project.id, None);
        assert_eq!(project.name, "Deck");
        assert_eq!(project.difficulty, Some(2));
        assert_eq!(project.notes.as_deref(), Some("stain first"));
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(project_from_args(&args("   ")).is_err());
    }
}
