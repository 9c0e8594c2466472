use clap::Subcommand;
use focusxp_core::{CaptureSource, NewProject, ProjectCategory, TriageOutcome};

use super::{open_engine, parse_id, parse_opt, print_json, CmdResult};

#[derive(Subcommand)]
pub enum CaptureAction {
    /// Capture a thought without leaving focus
    Add {
        text: String,
        /// Mark as captured through the global hotkey
        #[arg(long)]
        hotkey: bool,
    },
    /// List captures
    List {
        /// Include already triaged captures
        #[arg(long)]
        all: bool,
    },
    /// Decide what happens to a capture
    Triage {
        /// Capture ID
        id: String,
        /// project, quick_task, routed or deleted
        decision: String,
        /// Title for the project or quick task (default: capture text)
        #[arg(long)]
        title: Option<String>,
        #[arg(long, default_value = "5")]
        cost: u8,
        #[arg(long, default_value = "5")]
        benefit: u8,
        #[arg(long)]
        category: Option<String>,
        /// Where a routed capture went
        #[arg(long)]
        destination: Option<String>,
    },
}

pub fn run(action: CaptureAction) -> CmdResult {
    let mut engine = open_engine()?;

    match action {
        CaptureAction::Add { text, hotkey } => {
            let source = if hotkey {
                CaptureSource::Hotkey
            } else {
                CaptureSource::Manual
            };
            print_json(&engine.capture(&text, source)?)?;
        }
        CaptureAction::List { all } => {
            let items = if all {
                engine.captures()
            } else {
                engine.untriaged()
            };
            print_json(&items)?;
        }
        CaptureAction::Triage {
            id,
            decision,
            title,
            cost,
            benefit,
            category,
            destination,
        } => {
            let id = parse_id(&id)?;
            let item = engine
                .captures()
                .into_iter()
                .find(|c| c.id == id)
                .ok_or_else(|| format!("capture not found: {id}"))?;
            let title = title.unwrap_or(item.text);

            let outcome = match decision.as_str() {
                "project" => {
                    let mut project = NewProject::new(title, cost, benefit);
                    if let Some(category) = parse_opt::<ProjectCategory>(category.as_deref())? {
                        project = project.with_category(category);
                    }
                    TriageOutcome::Project { project }
                }
                "quick_task" => TriageOutcome::QuickTask { title },
                "routed" => TriageOutcome::Routed {
                    destination: destination.ok_or("--destination is required for routed")?,
                },
                "deleted" => TriageOutcome::Deleted,
                other => {
                    return Err(format!(
                        "unknown decision '{other}' (expected one of: project, quick_task, routed, deleted)"
                    )
                    .into())
                }
            };

            let item = engine
                .triage(id, outcome)?
                .ok_or_else(|| format!("capture not found: {id}"))?;
            print_json(&item)?;
        }
    }
    Ok(())
}
