//! Input sanitation shared by the add and edit flows.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::transactions_model::{NewTransaction, PaymentMethod, TransactionInput};
use crate::constants::AMOUNT_DECIMAL_PRECISION;
use crate::errors::ValidationError;

/// Parses a user-entered amount.
///
/// Accepts `,` or `.` as decimal separator, rounds half-up to two places and
/// requires `0 < amount <= max_amount` after rounding.
pub fn normalize_amount(raw: &str, max_amount: Decimal) -> Result<Decimal, ValidationError> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return Err(ValidationError::InvalidAmount(raw.to_string()));
    }

    let parsed = Decimal::from_str(&cleaned)
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;
    let rounded = parsed
        .round_dp_with_strategy(AMOUNT_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);

    if rounded <= Decimal::ZERO || rounded > max_amount {
        return Err(ValidationError::AmountOutOfRange(rounded.to_string()));
    }
    Ok(rounded)
}

/// Returns the trimmed value, or `None` when it is blank.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validates raw input and builds an insertable entry. Pure.
pub fn validate_and_build_transaction(
    owner_id: &str,
    input: &TransactionInput,
    max_amount: Decimal,
) -> Result<NewTransaction, ValidationError> {
    let owner_id = non_blank(owner_id).ok_or(ValidationError::OwnerRequired)?;
    let amount = normalize_amount(&input.raw_amount, max_amount)?;
    let category = non_blank(&input.category).ok_or(ValidationError::CategoryRequired)?;
    let description = non_blank(&input.description).ok_or(ValidationError::DescriptionRequired)?;

    let card_id = match input.payment_method {
        PaymentMethod::CreditCard => Some(
            input
                .card_id
                .as_deref()
                .and_then(non_blank)
                .ok_or(ValidationError::CardRequired)?,
        ),
        PaymentMethod::Cash => None,
    };

    Ok(NewTransaction {
        owner_id,
        amount,
        description,
        kind: input.kind,
        category: Some(category),
        is_recurring: input.is_recurring,
        payment_method: input.payment_method,
        card_id,
        created_at: input.created_at,
    })
}

/// Re-checks the stored invariants on an already built entry, in the same
/// order as [`validate_and_build_transaction`].
pub fn check_new_transaction(
    transaction: &NewTransaction,
    max_amount: Decimal,
) -> Result<(), ValidationError> {
    if transaction.owner_id.trim().is_empty() {
        return Err(ValidationError::OwnerRequired);
    }
    let amount = transaction.amount;
    if amount.scale() > AMOUNT_DECIMAL_PRECISION {
        return Err(ValidationError::InvalidAmount(amount.to_string()));
    }
    if amount <= Decimal::ZERO || amount > max_amount {
        return Err(ValidationError::AmountOutOfRange(amount.to_string()));
    }
    if transaction.category.as_deref().and_then(non_blank).is_none() {
        return Err(ValidationError::CategoryRequired);
    }
    if transaction.description.trim().is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    match (transaction.payment_method, transaction.card_id.as_deref()) {
        (PaymentMethod::CreditCard, None) => Err(ValidationError::CardRequired),
        (PaymentMethod::CreditCard, Some(card_id)) if card_id.trim().is_empty() => {
            Err(ValidationError::CardRequired)
        }
        _ => Ok(()),
    }
}
