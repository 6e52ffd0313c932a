use anyhow::bail;
use proj_db::updates::project::{ProjectUpdate, ProjectUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ClearableField, UpdateArgs};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = update_from_args(args)?;
    let project = ctx.service.update_project(args.id, &update).await?;
    output(&project, flags.format)
}

fn update_from_args(args: &UpdateArgs) -> anyhow::Result<ProjectUpdate> {
    let clears = |field| args.clear.contains(&field);
    let conflicts = [
        (ClearableField::EstimatedHours, args.estimated_hours.is_some(), "estimated-hours"),
        (ClearableField::ActualHours, args.actual_hours.is_some(), "actual-hours"),
        (ClearableField::Difficulty, args.difficulty.is_some(), "difficulty"),
        (ClearableField::Notes, args.notes.is_some(), "notes"),
    ];
    for (field, set, flag) in conflicts {
        if set && clears(field) {
            bail!("--{flag} and --clear {flag} cannot be combined");
        }
    }

    let mut builder = ProjectUpdateBuilder::new();
    if let Some(name) = &args.name {
        let name = name.trim();
        if name.is_empty() {
            bail!("project name cannot be blank");
        }
        builder = builder.name(name);
    }
    if args.estimated_hours.is_some() || clears(ClearableField::EstimatedHours) {
        builder = builder.estimated_hours(args.estimated_hours);
    }
    if args.actual_hours.is_some() || clears(ClearableField::ActualHours) {
        builder = builder.actual_hours(args.actual_hours);
    }
    if args.difficulty.is_some() || clears(ClearableField::Difficulty) {
        builder = builder.difficulty(args.difficulty);
    }
    if args.notes.is_some() || clears(ClearableField::Notes) {
        builder = builder.notes(args.notes.clone());
    }

    let update = builder.build();
    if update.is_empty() {
        bail!("nothing to update: pass at least one field or --clear");
    }
    Ok(update)
}
