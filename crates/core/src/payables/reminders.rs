use chrono::{Days, NaiveDateTime, NaiveTime};

use super::payables_model::{Payable, PayableReminder, PayableStatus};

/// Reminder firing the day before the due date at `hour`:00.
///
/// Returns `None` for paid payables and for reminders that would not fire
/// after `now`.
pub fn reminder_for(payable: &Payable, hour: u32, now: NaiveDateTime) -> Option<PayableReminder> {
    if payable.status != PayableStatus::Pending {
        return None;
    }

    let day_before = payable.due_date.checked_sub_days(Days::new(1))?;
    let trigger_at = day_before.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?);
    if trigger_at <= now {
        return None;
    }

    Some(PayableReminder {
        payable_id: payable.id.clone(),
        title: "Bill due soon".to_string(),
        body: format!(
            "Your bill \"{}\" of {:.2} is due tomorrow!",
            payable.description, payable.amount
        ),
        trigger_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn payable(due: NaiveDate, status: PayableStatus) -> Payable {
        Payable {
            id: "p1".to_string(),
            owner_id: "user-1".to_string(),
            description: "Rent".to_string(),
            amount: dec!(1500),
            due_date: due,
            status,
            created_at: None,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_reminder_fires_day_before_at_hour() {
        let due = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        let reminder =
            reminder_for(&payable(due, PayableStatus::Pending), 9, at(2026, 10, 18, 12)).unwrap();
        assert_eq!(reminder.trigger_at, at(2026, 10, 31, 9));
        assert_eq!(reminder.body, "Your bill \"Rent\" of 1500.00 is due tomorrow!");
    }

    #[test]
    fn test_past_trigger_is_skipped() {
        let due = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let p = payable(due, PayableStatus::Pending);
        // Trigger is 2026-10-18 09:00.
        assert!(reminder_for(&p, 9, at(2026, 10, 18, 9)).is_none());
        assert!(reminder_for(&p, 9, at(2026, 10, 18, 8)).is_some());
    }

    #[test]
    fn test_paid_payable_has_no_reminder() {
        let due = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        assert!(reminder_for(&payable(due, PayableStatus::Paid), 9, at(2026, 10, 18, 0)).is_none());
    }
}
