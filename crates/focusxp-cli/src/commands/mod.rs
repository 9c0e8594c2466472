pub mod achievements;
pub mod capture;
pub mod config;
pub mod objective;
pub mod project;
pub mod session;
pub mod stats;
pub mod streak;
pub mod xp;

use std::error::Error;

use focusxp_core::{FocusEngine, SqliteStore, SystemClock};
use serde::Serialize;
use uuid::Uuid;

pub type CmdResult<T = ()> = Result<T, Box<dyn Error>>;

/// Engine over the on-disk store in the data directory.
pub fn open_engine() -> CmdResult<FocusEngine<SqliteStore, SystemClock>> {
    let store = SqliteStore::open()?;
    Ok(FocusEngine::new(store, SystemClock)?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn parse_id(raw: &str) -> CmdResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| format!("invalid id '{raw}': {e}").into())
}

/// Parse an optional enum argument.
pub fn parse_opt<T>(raw: Option<&str>) -> CmdResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: Error + 'static,
{
    raw.map(|s| s.parse::<T>().map_err(|e| Box::new(e) as Box<dyn Error>))
        .transpose()
}
