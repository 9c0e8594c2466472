//! Time source abstraction.
//!
//! Calendar-day and week arithmetic happens in local time, so the clock hands
//! out `DateTime<Local>`; records are persisted in UTC.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Duration, Local};

/// Supplies the current instant to the engine.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle and advance
/// time while the engine owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self {
            now: Rc::new(Cell::new(at)),
        }
    }

    pub fn set(&self, at: DateTime<Local>) {
        self.now.set(at);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}
