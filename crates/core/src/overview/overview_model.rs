use serde::Serialize;

use crate::budgets::BudgetStatus;
use crate::cards::CardInvoice;
use crate::summary::MonthlySummary;
use crate::transactions::SynthesisReport;
use crate::utils::YearMonth;

/// Everything the month screen shows, computed from one ledger read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOverview {
    pub month: YearMonth,
    pub summary: MonthlySummary,
    pub budgets: Vec<BudgetStatus>,
    pub card_invoices: Vec<CardInvoice>,
    pub synthesis: SynthesisReport,
}
