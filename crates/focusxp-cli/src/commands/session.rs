//! Focus session commands.
//!
//! `start` persists the in-flight session in the store so that a later
//! `end` or `interrupt` invocation can pick it up.

use chrono::{DateTime, Duration, Utc};
use clap::Subcommand;
use focusxp_core::{
    CompletionStatus, Config, EnergyLevel, NewSession, QualityRating, SessionLength,
    WillpowerLevel,
};
use serde_json::json;

use super::{open_engine, parse_id, parse_opt, print_json, CmdResult};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start a session on a project
    Start {
        /// Project ID
        project_id: String,
        /// 25, 60, 90 or mixed (default from config)
        #[arg(long)]
        length: Option<String>,
        /// high, medium or low (default from config)
        #[arg(long)]
        willpower: Option<String>,
    },
    /// End the session in flight as completed
    End {
        /// excellent, good, average, challenging or bad
        #[arg(long)]
        quality: Option<String>,
        /// fired_up, need_break or spent
        #[arg(long)]
        energy: Option<String>,
    },
    /// Stop the session in flight early
    Interrupt {
        #[arg(long)]
        reason: Option<String>,
    },
    /// Record a session after the fact
    Log {
        /// Project ID
        project_id: String,
        /// Planned minutes
        #[arg(long, default_value = "25")]
        planned: u32,
        /// Minutes actually focused (default: planned)
        #[arg(long)]
        actual: Option<u32>,
        #[arg(long, default_value = "medium")]
        willpower: String,
        #[arg(long)]
        quality: Option<String>,
        #[arg(long)]
        energy: Option<String>,
        /// Start time as RFC 3339 (default: `actual` minutes ago)
        #[arg(long)]
        started_at: Option<String>,
        /// Record as interrupted
        #[arg(long)]
        interrupted: bool,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Rate a finished session
    Rate {
        /// Session ID
        id: String,
        #[arg(long)]
        quality: Option<String>,
        #[arg(long)]
        energy: Option<String>,
    },
    /// Sessions started today
    Today,
    /// All sessions
    List {
        /// Only sessions of this project
        #[arg(long)]
        project: Option<String>,
    },
    /// The session in flight, if any
    Current,
}

pub fn run(action: SessionAction) -> CmdResult {
    let mut engine = open_engine()?;

    match action {
        SessionAction::Start {
            project_id,
            length,
            willpower,
        } => {
            let project_id = parse_id(&project_id)?;
            let config = Config::load_or_default();
            let length = match length {
                Some(raw) => raw.parse::<SessionLength>()?,
                None => config.default_length(),
            };
            let willpower = match willpower {
                Some(raw) => raw.parse::<WillpowerLevel>()?,
                None => config.default_willpower(),
            };

            let handle = engine.start_session(project_id, length, willpower)?;
            print_json(&handle)?;
        }
        SessionAction::End { quality, energy } => {
            let handle = engine
                .active_session()
                .ok_or("no session in flight")?;
            let quality = parse_opt::<QualityRating>(quality.as_deref())?;
            let energy = parse_opt::<EnergyLevel>(energy.as_deref())?;
            let outcome = engine.end_session(&handle, quality, energy)?;
            print_json(&outcome)?;
        }
        SessionAction::Interrupt { reason } => {
            let handle = engine
                .active_session()
                .ok_or("no session in flight")?;
            let outcome = engine.interrupt_session(&handle, reason)?;
            print_json(&outcome)?;
        }
        SessionAction::Log {
            project_id,
            planned,
            actual,
            willpower,
            quality,
            energy,
            started_at,
            interrupted,
            reason,
        } => {
            let actual = actual.unwrap_or(planned);
            let started_at = match started_at {
                Some(raw) => DateTime::parse_from_rfc3339(&raw)
                    .map_err(|e| format!("invalid start time '{raw}': {e}"))?
                    .with_timezone(&Utc),
                None => Utc::now() - Duration::minutes(i64::from(actual)),
            };
            let completion_status = if interrupted {
                CompletionStatus::Interrupted
            } else {
                CompletionStatus::Completed
            };

            let outcome = engine.log_session(NewSession {
                project_id: parse_id(&project_id)?,
                planned_duration: planned,
                actual_duration: actual,
                willpower_level: willpower.parse()?,
                quality_rating: parse_opt(quality.as_deref())?,
                energy_level: parse_opt(energy.as_deref())?,
                completion_status,
                interruption_reason: reason,
                started_at,
                ended_at: started_at + Duration::minutes(i64::from(actual)),
            })?;
            print_json(&outcome)?;
        }
        SessionAction::Rate {
            id,
            quality,
            energy,
        } => {
            let id = parse_id(&id)?;
            let session = engine
                .rate_session(
                    id,
                    parse_opt(quality.as_deref())?,
                    parse_opt(energy.as_deref())?,
                )?
                .ok_or_else(|| format!("session not found: {id}"))?;
            print_json(&session)?;
        }
        SessionAction::Today => {
            print_json(&engine.todays_sessions())?;
        }
        SessionAction::List { project } => {
            let sessions = match project {
                Some(raw) => engine.project_sessions(parse_id(&raw)?),
                None => engine.sessions(),
            };
            print_json(&sessions)?;
        }
        SessionAction::Current => match engine.active_session() {
            Some(handle) => {
                let elapsed = handle.elapsed_minutes(Utc::now());
                print_json(&json!({
                    "session": handle,
                    "elapsed_minutes": elapsed,
                }))?;
            }
            None => println!("null"),
        },
    }
    Ok(())
}
