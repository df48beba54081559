mod month_cursor;
mod time_utils;
mod year_month;

pub use month_cursor::MonthCursor;
pub use time_utils::{Clock, FixedClock, SystemClock};
pub use year_month::YearMonth;
