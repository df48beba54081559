use rust_decimal::Decimal;

use super::cards_model::{CardInvoice, CreditCard};
use crate::transactions::Transaction;
use crate::utils::YearMonth;

/// Sums the card's charges dated inside the calendar month.
///
/// The statement closing day is not consulted: the invoice period is the
/// calendar month, first through last day.
pub fn calculate_invoice(
    card: &CreditCard,
    transactions: &[Transaction],
    month: YearMonth,
) -> CardInvoice {
    let charges: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_charged_to(&card.id))
        .filter(|t| t.created_at.as_ref().is_some_and(|at| month.contains(at)))
        .collect();

    let total: Decimal = charges.iter().map(|t| t.amount).sum();

    CardInvoice {
        card_id: card.id.clone(),
        card_name: card.name.clone(),
        color: card.color.clone(),
        month,
        total,
        limit_amount: card.limit_amount,
        available_limit: card.limit_amount - total,
        transaction_count: charges.len(),
    }
}
