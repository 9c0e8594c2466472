use clap::Subcommand;

use super::{open_engine, print_json, CmdResult};

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// The full catalogue with unlock times
    List,
    /// Unlock anything newly earned and print it
    Check,
    /// Progress towards every achievement
    Progress,
}

pub fn run(action: AchievementsAction) -> CmdResult {
    let mut engine = open_engine()?;

    match action {
        AchievementsAction::List => print_json(&engine.achievements())?,
        AchievementsAction::Check => print_json(&engine.check_achievements()?)?,
        AchievementsAction::Progress => print_json(&engine.achievement_progress())?,
    }
    Ok(())
}
