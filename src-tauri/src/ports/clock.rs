//! Wall-clock port

use chrono::NaiveDateTime;

/// Source of the current local time
pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;
}
