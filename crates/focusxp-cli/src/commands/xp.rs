use clap::Subcommand;
use serde_json::json;

use super::{open_engine, print_json, CmdResult};

#[derive(Subcommand)]
pub enum XpAction {
    /// XP earned this week
    Weekly,
    /// XP earned ever
    Total,
    /// Every ledger entry, oldest first
    Log {
        /// Only the most recent entries
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub fn run(action: XpAction) -> CmdResult {
    let engine = open_engine()?;

    match action {
        XpAction::Weekly => print_json(&json!({ "weekly_xp": engine.weekly_xp() }))?,
        XpAction::Total => print_json(&json!({ "total_xp": engine.total_xp() }))?,
        XpAction::Log { limit } => {
            let entries = engine.xp_log();
            let skip = limit.map_or(0, |n| entries.len().saturating_sub(n));
            print_json(&entries[skip..])?;
        }
    }
    Ok(())
}
