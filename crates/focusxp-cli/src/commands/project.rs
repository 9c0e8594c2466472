//! Project management commands for CLI.

use clap::Subcommand;
use focusxp_core::{
    NewProject, ProjectCategory, ProjectPriority, ProjectStatus, ProjectUpdate,
};
use serde_json::json;

use super::{open_engine, parse_id, parse_opt, print_json, CmdResult};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new project
    Create {
        /// Project title
        title: String,
        /// Effort estimate, 1-10
        #[arg(long, default_value = "5")]
        cost: u8,
        /// Expected payoff, 1-10
        #[arg(long, default_value = "5")]
        benefit: u8,
        /// work, growth, projects or life
        #[arg(long)]
        category: Option<String>,
        /// must_do, should_do or nice_to_have
        #[arg(long)]
        priority: Option<String>,
        /// Initial status (default: active)
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List projects
    List {
        /// Only projects with this status
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one project with its sessions
    Show {
        id: String,
    },
    /// Change a project's status
    Status {
        id: String,
        /// active, inactive, parking_lot, completed or graveyard
        status: String,
    },
    /// Update project fields
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        cost: Option<u8>,
        #[arg(long)]
        benefit: Option<u8>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Comma-separated tags, replacing the current ones
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        lessons: Option<String>,
    },
    /// Delete a project
    Delete {
        id: String,
    },
    /// Status history of a project
    History {
        id: String,
    },
}

pub fn run(action: ProjectAction) -> CmdResult {
    let mut engine = open_engine()?;

    match action {
        ProjectAction::Create {
            title,
            cost,
            benefit,
            category,
            priority,
            status,
            description,
        } => {
            let mut input = NewProject::new(title, cost, benefit);
            if let Some(category) = parse_opt::<ProjectCategory>(category.as_deref())? {
                input = input.with_category(category);
            }
            if let Some(priority) = parse_opt::<ProjectPriority>(priority.as_deref())? {
                input = input.with_priority(priority);
            }
            if let Some(status) = parse_opt::<ProjectStatus>(status.as_deref())? {
                input = input.with_status(status);
            }
            input.description = description;

            let project = engine.create_project(input)?;
            print_json(&project)?;
        }
        ProjectAction::List { status } => {
            let status = parse_opt::<ProjectStatus>(status.as_deref())?;
            print_json(&engine.projects(status))?;
        }
        ProjectAction::Show { id } => {
            let id = parse_id(&id)?;
            let project = engine
                .project(id)
                .ok_or_else(|| format!("project not found: {id}"))?;
            print_json(&json!({
                "project": project,
                "strategic_value": project.strategic_value(),
                "sessions": engine.project_sessions(id),
            }))?;
        }
        ProjectAction::Status { id, status } => {
            let id = parse_id(&id)?;
            let status: ProjectStatus = status.parse()?;
            let project = engine
                .update_project_status(id, status)?
                .ok_or_else(|| format!("project not found: {id}"))?;
            print_json(&json!({
                "project": project,
                "weekly_xp": engine.weekly_xp(),
            }))?;
        }
        ProjectAction::Update {
            id,
            title,
            description,
            cost,
            benefit,
            priority,
            category,
            tags,
            lessons,
        } => {
            let id = parse_id(&id)?;
            let update = ProjectUpdate {
                title,
                description,
                cost,
                benefit,
                priority: parse_opt(priority.as_deref())?,
                category: parse_opt(category.as_deref())?,
                custom_tags: tags.map(|t| {
                    t.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                }),
                lessons_learned: lessons,
                ..Default::default()
            };
            let project = engine
                .update_project(id, update)?
                .ok_or_else(|| format!("project not found: {id}"))?;
            print_json(&project)?;
        }
        ProjectAction::Delete { id } => {
            let id = parse_id(&id)?;
            if !engine.delete_project(id)? {
                return Err(format!("project not found: {id}").into());
            }
            println!("Project deleted: {id}");
        }
        ProjectAction::History { id } => {
            let id = parse_id(&id)?;
            print_json(&engine.project_transitions(id))?;
        }
    }
    Ok(())
}
