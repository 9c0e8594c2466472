use clap::Subcommand;
use focusxp_core::Config;

use super::{open_engine, print_json, CmdResult};

#[derive(Subcommand)]
pub enum ObjectiveAction {
    /// Set today's objective (defaults from config)
    Set {
        /// Number of sessions
        #[arg(long)]
        sessions: Option<u32>,
        /// Minutes per session
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Show today's objective and progress
    Show,
}

pub fn run(action: ObjectiveAction) -> CmdResult {
    let mut engine = open_engine()?;

    match action {
        ObjectiveAction::Set { sessions, duration } => {
            let config = Config::load_or_default();
            let objective = engine.set_daily_objective(
                sessions.unwrap_or(config.objective.session_count),
                duration.unwrap_or(config.objective.session_duration),
            )?;
            print_json(&objective)?;
        }
        ObjectiveAction::Show => match engine.today_objective() {
            Some(objective) => print_json(&serde_json::json!({
                "met": objective.is_met(),
                "objective": objective,
            }))?,
            None => println!("null"),
        },
    }
    Ok(())
}
