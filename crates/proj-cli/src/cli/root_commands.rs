use clap::{Args, Subcommand, ValueEnum};
use rust_decimal::Decimal;

/// Top-level commands for the `projects` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a project.
    Add(AddArgs),
    /// List project summaries ordered by name.
    List,
    /// Show a project with its materials, steps and categories.
    Get { id: i64 },
    /// Change fields of an existing project.
    Update(UpdateArgs),
    /// Delete a project and everything attached to it.
    Delete { id: i64 },
    /// Interactive numbered menu (the default when no command is given).
    Menu,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Project name.
    pub name: String,
    #[arg(long, value_parser = parse_decimal)]
    pub estimated_hours: Option<Decimal>,
    #[arg(long, value_parser = parse_decimal)]
    pub actual_hours: Option<Decimal>,
    /// Suggested range 1-5.
    #[arg(long)]
    pub difficulty: Option<i32>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_parser = parse_decimal)]
    pub estimated_hours: Option<Decimal>,
    #[arg(long, value_parser = parse_decimal)]
    pub actual_hours: Option<Decimal>,
    #[arg(long)]
    pub difficulty: Option<i32>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Clear a nullable field. Repeatable.
    #[arg(long, value_enum)]
    pub clear: Vec<ClearableField>,
}

/// Nullable project fields that `update --clear` can reset.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ClearableField {
    EstimatedHours,
    ActualHours,
    Difficulty,
    Notes,
}

fn parse_decimal(value: &str) -> Result<Decimal, String> {
    proj_core::hours::parse_hours(value).map_err(|error| error.to_string())
}
