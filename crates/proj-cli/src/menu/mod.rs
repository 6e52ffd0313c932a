//! Interactive numbered menu.
//!
//! The selected project lives in a [`MenuState`] owned by the loop and handed
//! to each handler. Blank input at the selection prompt (or end of input)
//! leaves the menu; any other failure is reported and the loop continues.

mod console;

use std::io::{self, BufRead, Write};

use anyhow::bail;
use proj_core::entities::Project;
use proj_db::service::ProjectsService;
use proj_db::updates::project::ProjectUpdateBuilder;

use console::Console;

const OPERATIONS: [&str; 5] = [
    "1) Add a project",
    "2) List projects",
    "3) Select a project",
    "4) Update project details",
    "5) Delete a project",
];

/// What the menu is currently working with.
#[derive(Debug, Default)]
pub struct MenuState {
    pub current: Option<Project>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Selection {
    Quit,
    Add,
    List,
    Select,
    Update,
    Delete,
}

fn parse_selection(input: Option<&str>) -> anyhow::Result<Selection> {
    let Some(input) = input else {
        return Ok(Selection::Quit);
    };
    let Ok(number) = input.parse::<i64>() else {
        bail!("{input} is not a valid number.");
    };
    Ok(match number {
        1 => Selection::Add,
        2 => Selection::List,
        3 => Selection::Select,
        4 => Selection::Update,
        5 => Selection::Delete,
        other => bail!("{other} is not a valid selection."),
    })
}

/// Run the menu until the user quits or input ends.
///
/// # Errors
///
/// Only I/O failures on the reader or writer end the loop with an error.
pub async fn run<R: BufRead, W: Write>(
    service: &ProjectsService,
    input: R,
    out: W,
) -> anyhow::Result<()> {
    let mut console = Console::new(input, out);
    let mut state = MenuState::default();

    loop {
        print_operations(&mut console, &state)?;
        let answer = console.prompt_string("Enter a menu selection")?;

        let outcome = match parse_selection(answer.as_deref()) {
            Ok(Selection::Quit) => {
                console.say("Exiting the menu.")?;
                return Ok(());
            }
            Ok(selection) => handle(selection, service, &mut state, &mut console).await,
            Err(error) => Err(error),
        };

        if let Err(error) = outcome {
            if error.downcast_ref::<io::Error>().is_some() {
                return Err(error);
            }
            tracing::debug!(error = %error, "menu operation failed");
            console.say(format_args!("\nError: {error} Try again."))?;
        }
        if console.is_closed() {
            console.say("Exiting the menu.")?;
            return Ok(());
        }
    }
}

async fn handle<R: BufRead, W: Write>(
    selection: Selection,
    service: &ProjectsService,
    state: &mut MenuState,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    match selection {
        Selection::Add => add_project(service, console).await,
        Selection::List => list_projects(service, console).await,
        Selection::Select => select_project(service, state, console).await,
        Selection::Update => update_project(service, state, console).await,
        Selection::Delete => delete_project(service, state, console).await,
        Selection::Quit => Ok(()),
    }
}

fn print_operations<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &MenuState,
) -> io::Result<()> {
    console.say("\nThese are the available selections. Press the Enter key to quit:")?;
    for operation in OPERATIONS {
        console.say(format_args!("   {operation}"))?;
    }
    match &state.current {
        None => console.say("\nYou are not working with a project."),
        Some(project) => console.say(format_args!("\nYou are working with project: {project}")),
    }
}

async fn add_project<R: BufRead, W: Write>(
    service: &ProjectsService,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let Some(name) = console.prompt_string("Enter the project name")? else {
        bail!("A project name is required.");
    };
    let project = Project {
        name,
        estimated_hours: console.prompt_decimal("Enter the estimated hours")?,
        actual_hours: console.prompt_decimal("Enter the actual hours")?,
        difficulty: console.prompt_difficulty("Enter the project difficulty (1-5)")?,
        notes: console.prompt_string("Enter the project notes")?,
        ..Project::default()
    };

    let saved = service.add_project(&project).await?;
    console.say(format_args!("You have successfully created project: {saved}"))?;
    Ok(())
}

async fn list_projects<R: BufRead, W: Write>(
    service: &ProjectsService,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let projects = service.fetch_all_projects().await?;
    console.say("\nProjects:")?;
    for project in &projects {
        console.say(format_args!("   {project}"))?;
    }
    Ok(())
}

async fn select_project<R: BufRead, W: Write>(
    service: &ProjectsService,
    state: &mut MenuState,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    list_projects(service, console).await?;
    let Some(id) = console.prompt_int("Enter a project ID to select a project")? else {
        return Ok(());
    };

    state.current = None;
    let project = service.fetch_project_by_id(id).await?;
    print_project(console, &project)?;
    state.current = Some(project);
    Ok(())
}

async fn update_project<R: BufRead, W: Write>(
    service: &ProjectsService,
    state: &mut MenuState,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let Some(current) = &state.current else {
        console.say("\nPlease select a project.")?;
        return Ok(());
    };
    let Some(id) = current.id else {
        bail!("The selected project has no ID.");
    };

    let mut builder = ProjectUpdateBuilder::new();
    if let Some(name) = console.prompt_string(&format!("Enter the project name [{}]", current.name))? {
        builder = builder.name(name);
    }
    if let Some(hours) = console.prompt_decimal(&format!(
        "Enter the estimated hours [{}]",
        shown(current.estimated_hours)
    ))? {
        builder = builder.estimated_hours(Some(hours));
    }
    if let Some(hours) = console.prompt_decimal(&format!(
        "Enter the actual hours [{}]",
        shown(current.actual_hours)
    ))? {
        builder = builder.actual_hours(Some(hours));
    }
    if let Some(difficulty) = console.prompt_difficulty(&format!(
        "Enter the project difficulty (1-5) [{}]",
        shown(current.difficulty)
    ))? {
        builder = builder.difficulty(Some(difficulty));
    }
    if let Some(notes) = console.prompt_string(&format!(
        "Enter the project notes [{}]",
        shown(current.notes.as_deref())
    ))? {
        builder = builder.notes(Some(notes));
    }

    let update = builder.build();
    if update.is_empty() {
        console.say("Nothing changed.")?;
        return Ok(());
    }
    let updated = service.update_project(id, &update).await?;
    console.say(format_args!("Updated project: {updated}"))?;
    state.current = Some(updated);
    Ok(())
}

async fn delete_project<R: BufRead, W: Write>(
    service: &ProjectsService,
    state: &mut MenuState,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    list_projects(service, console).await?;
    let Some(id) = console.prompt_int("Enter the ID of the project to delete")? else {
        return Ok(());
    };

    service.delete_project(id).await?;
    console.say(format_args!("Project {id} was deleted successfully."))?;
    if state.current.as_ref().and_then(|project| project.id) == Some(id) {
        state.current = None;
    }
    Ok(())
}

fn print_project<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    project: &Project,
) -> io::Result<()> {
    console.say(format_args!("\n   ID={}", shown(project.id)))?;
    console.say(format_args!("   name={}", project.name))?;
    console.say(format_args!("   estimated hours={}", shown(project.estimated_hours)))?;
    console.say(format_args!("   actual hours={}", shown(project.actual_hours)))?;
    console.say(format_args!("   difficulty={}", shown(project.difficulty)))?;
    console.say(format_args!("   notes={}", shown(project.notes.as_deref())))?;

    console.say("\n   Materials:")?;
    for material in &project.materials {
        console.say(format_args!(
            "      {}: {} x{} @ {}",
            shown(material.id),
            material.name,
            shown(material.quantity),
            shown(material.cost)
        ))?;
    }
    console.say("\n   Steps:")?;
    for step in &project.steps {
        console.say(format_args!("      {}. {}", step.order, step.text))?;
    }
    console.say("\n   Categories:")?;
    for category in &project.categories {
        console.say(format_args!("      {}", category.name))?;
    }
    Ok(())
}

fn shown<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
