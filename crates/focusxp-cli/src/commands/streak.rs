use clap::Subcommand;
use focusxp_core::StreakType;
use serde_json::json;

use super::{open_engine, print_json, CmdResult};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Current and longest run
    Show {
        #[arg(long = "type", default_value = "daily_sessions")]
        kind: String,
    },
}

pub fn run(action: StreakAction) -> CmdResult {
    let engine = open_engine()?;

    match action {
        StreakAction::Show { kind } => {
            let streak_type: StreakType = kind.parse()?;
            print_json(&json!({
                "streak_type": streak_type,
                "current": engine.current_streak(streak_type),
                "longest": engine.longest_streak(streak_type),
                "record": engine.streak(streak_type),
            }))?;
        }
    }
    Ok(())
}
