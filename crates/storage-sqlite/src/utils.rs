//! Column decoding helpers shared by the repositories.
//!
//! Amounts are stored as decimal text and enums by their `as_str` names.
//! Timestamps are naive UTC.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::StorageError;

pub fn parse_decimal(value: &str, field: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(value.trim())
        .map_err(|e| StorageError::SerializationError(format!("{} '{}': {}", field, value, e)))
}

pub fn parse_column<T>(value: &str, field: &str) -> Result<T, StorageError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse::<T>()
        .map_err(|e| StorageError::SerializationError(format!("{} '{}': {}", field, value, e)))
}

pub fn to_naive(instant: &DateTime<Utc>) -> NaiveDateTime {
    instant.naive_utc()
}

pub fn to_utc(stored: NaiveDateTime) -> DateTime<Utc> {
    stored.and_utc()
}
