use focusxp_core::StreakType;
use serde_json::json;

use super::{open_engine, print_json, CmdResult};

pub fn run() -> CmdResult {
    let engine = open_engine()?;

    print_json(&json!({
        "sessions": engine.session_stats(),
        "weekly_xp": engine.weekly_xp(),
        "total_xp": engine.total_xp(),
        "current_streak": engine.current_streak(StreakType::DailySessions),
        "active_projects": engine.active_projects().len(),
    }))
}
