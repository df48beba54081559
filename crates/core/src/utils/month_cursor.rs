use chrono::{DateTime, Utc};

use super::YearMonth;

/// The month currently being viewed.
///
/// One cursor is shared by the summary, budget and invoice views so that
/// they always aggregate the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    current: YearMonth,
}

impl MonthCursor {
    pub fn new(month: YearMonth) -> Self {
        Self { current: month }
    }

    /// Cursor positioned on the month containing `now`.
    pub fn starting_at(now: &DateTime<Utc>) -> Self {
        Self::new(YearMonth::from_datetime(now))
    }

    pub fn current(&self) -> YearMonth {
        self.current
    }

    pub fn set(&mut self, month: YearMonth) {
        self.current = month;
    }

    pub fn next(&mut self) -> YearMonth {
        self.current = self.current.next();
        self.current
    }

    pub fn prev(&mut self) -> YearMonth {
        self.current = self.current.prev();
        self.current
    }

    pub fn label(&self) -> String {
        self.current.label()
    }
}
