//! Engine settings.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BILLS_CATEGORY, BUDGET_WARNING_RATIO, MAX_AMOUNT, MONTHLY_TRANSACTION_LIMIT,
    PAYABLE_REMINDER_HOUR,
};
use crate::errors::{Error, Result};

/// Tunables shared by the services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub monthly_transaction_limit: usize,
    pub max_amount: Decimal,
    pub bills_category: String,
    pub budget_warning_ratio: Decimal,
    pub reminder_hour: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_transaction_limit: MONTHLY_TRANSACTION_LIMIT,
            max_amount: MAX_AMOUNT,
            bills_category: BILLS_CATEGORY.to_string(),
            budget_warning_ratio: BUDGET_WARNING_RATIO,
            reminder_hour: PAYABLE_REMINDER_HOUR,
        }
    }
}

impl Settings {
    /// Parses settings from a JSON document. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(raw)
            .map_err(|e| Error::InvalidConfigValue(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads `TALLY_*` environment variables on top of the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = lookup("TALLY_MONTHLY_TRANSACTION_LIMIT") {
            settings.monthly_transaction_limit = parse_value(
                "TALLY_MONTHLY_TRANSACTION_LIMIT",
                &raw,
            )?;
        }
        if let Some(raw) = lookup("TALLY_MAX_AMOUNT") {
            settings.max_amount = parse_value("TALLY_MAX_AMOUNT", &raw)?;
        }
        if let Some(raw) = lookup("TALLY_BILLS_CATEGORY") {
            settings.bills_category = raw.trim().to_string();
        }
        if let Some(raw) = lookup("TALLY_BUDGET_WARNING_RATIO") {
            settings.budget_warning_ratio = parse_value("TALLY_BUDGET_WARNING_RATIO", &raw)?;
        }
        if let Some(raw) = lookup("TALLY_REMINDER_HOUR") {
            settings.reminder_hour = parse_value("TALLY_REMINDER_HOUR", &raw)?;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.monthly_transaction_limit == 0 {
            return Err(Error::InvalidConfigValue(
                "monthlyTransactionLimit must be greater than zero".to_string(),
            ));
        }
        if self.max_amount <= Decimal::ZERO {
            return Err(Error::InvalidConfigValue(
                "maxAmount must be positive".to_string(),
            ));
        }
        if self.bills_category.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "billsCategory must not be empty".to_string(),
            ));
        }
        if self.budget_warning_ratio <= Decimal::ZERO || self.budget_warning_ratio > Decimal::ONE
        {
            return Err(Error::InvalidConfigValue(format!(
                "budgetWarningRatio must be in (0, 1], got {}",
                self.budget_warning_ratio
            )));
        }
        if self.reminder_hour > 23 {
            return Err(Error::InvalidConfigValue(format!(
                "reminderHour must be between 0 and 23, got {}",
                self.reminder_hour
            )));
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| Error::InvalidConfigValue(format!("{}='{}'", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.monthly_transaction_limit, 200);
        assert_eq!(settings.max_amount, dec!(999999.99));
        assert_eq!(settings.bills_category, "Bills");
        assert_eq!(settings.budget_warning_ratio, dec!(0.80));
        assert_eq!(settings.reminder_hour, 9);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_keeps_defaults_for_missing_keys() {
        let settings =
            Settings::from_json(r#"{"monthlyTransactionLimit": 50, "billsCategory": "Utilities"}"#)
                .unwrap();
        assert_eq!(settings.monthly_transaction_limit, 50);
        assert_eq!(settings.bills_category, "Utilities");
        assert_eq!(settings.max_amount, dec!(999999.99));
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let err = Settings::from_json(r#"{"reminderHour": 24}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TALLY_MONTHLY_TRANSACTION_LIMIT", "10"),
            ("TALLY_BUDGET_WARNING_RATIO", "0.9"),
        ]);
        let settings = Settings::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(settings.monthly_transaction_limit, 10);
        assert_eq!(settings.budget_warning_ratio, dec!(0.9));
        assert_eq!(settings.reminder_hour, 9);
    }

    #[test]
    fn test_from_lookup_rejects_unparseable_value() {
        let err = Settings::from_lookup(|k| {
            (k == "TALLY_MAX_AMOUNT").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(msg) if msg.contains("TALLY_MAX_AMOUNT")));
    }
}
