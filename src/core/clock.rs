use crate::core::period::MonthIndex;
use chrono::Local;

/// Source of the current calendar month, used to resolve "Present".
pub trait Clock {
    fn current_month(&self) -> MonthIndex;
}

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> MonthIndex {
        MonthIndex::from_date(&Local::now())
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub MonthIndex);

impl Clock for FixedClock {
    fn current_month(&self) -> MonthIndex {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_month(&self) -> MonthIndex {
        (**self).current_month()
    }
}
