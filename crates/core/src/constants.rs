use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Maximum number of transactions an owner may record in one calendar month
pub const MONTHLY_TRANSACTION_LIMIT: usize = 200;

/// Largest amount accepted for a single entry
pub const MAX_AMOUNT: Decimal = dec!(999999.99);

/// Decimal precision for stored amounts
pub const AMOUNT_DECIMAL_PRECISION: u32 = 2;

/// Category assigned to expenses created by settling a payable
pub const BILLS_CATEGORY: &str = "Bills";

/// Category label used for expenses with no category in reports
pub const UNCATEGORIZED_LABEL: &str = "Other";

/// Budget usage ratio at which a budget enters the warning band
pub const BUDGET_WARNING_RATIO: Decimal = dec!(0.80);

/// Hour of day (local to the caller) at which payable reminders fire
pub const PAYABLE_REMINDER_HOUR: u32 = 9;
