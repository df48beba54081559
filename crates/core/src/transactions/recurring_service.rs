use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error, info};

use super::recurring_model::{RecurringSignature, SynthesisError, SynthesisReport};
use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{LedgerRepositoryTrait, RecurringServiceTrait};
use crate::errors::Result;
use crate::utils::{Clock, YearMonth};

/// Carries recurring obligations forward into the current month.
///
/// Runs once per refresh for a single owner. The only duplicate guard is the
/// month comparison against each group's latest occurrence, so two runs that
/// overlap before either insert lands can both synthesize.
pub struct RecurringTransactionService {
    ledger: Arc<dyn LedgerRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

/// What to do with one recurring group.
#[derive(Debug, PartialEq)]
enum GroupDecision<'a> {
    Synthesize(&'a Transaction),
    UpToDate,
    Undated,
}

impl RecurringTransactionService {
    pub fn new(ledger: Arc<dyn LedgerRepositoryTrait>, clock: Arc<dyn Clock>) -> Self {
        Self { ledger, clock }
    }

    /// Partitions entries by signature, keeping first-seen group order.
    fn group_by_signature(transactions: Vec<Transaction>) -> Vec<Vec<Transaction>> {
        let mut index: HashMap<RecurringSignature, usize> = HashMap::new();
        let mut groups: Vec<Vec<Transaction>> = Vec::new();

        for transaction in transactions {
            let signature = RecurringSignature::of(&transaction);
            match index.get(&signature) {
                Some(&position) => groups[position].push(transaction),
                None => {
                    index.insert(signature, groups.len());
                    groups.push(vec![transaction]);
                }
            }
        }
        groups
    }

    fn decide<'a>(group: &'a mut [Transaction], current: YearMonth) -> GroupDecision<'a> {
        // Newest first; undated entries sort last.
        group.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let Some(latest) = group.first() else {
            return GroupDecision::Undated;
        };
        match latest.created_at.as_ref() {
            None => GroupDecision::Undated,
            Some(at) if YearMonth::from_datetime(at) < current => GroupDecision::Synthesize(latest),
            Some(_) => GroupDecision::UpToDate,
        }
    }
}

#[async_trait]
impl RecurringServiceTrait for RecurringTransactionService {
    async fn process_recurring(&self, owner_id: &str) -> Result<SynthesisReport> {
        self.process_recurring_at(owner_id, self.clock.now()).await
    }

    async fn process_recurring_at(
        &self,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SynthesisReport> {
        let recurring = self.ledger.list_recurring(owner_id).await?;
        let mut report = SynthesisReport::default();
        if recurring.is_empty() {
            return Ok(report);
        }

        let current = YearMonth::from_datetime(&now);
        debug!(
            "Checking {} recurring entries for owner {} against {}",
            recurring.len(),
            owner_id,
            current
        );

        for mut group in Self::group_by_signature(recurring) {
            let latest = match Self::decide(&mut group, current) {
                GroupDecision::Synthesize(latest) => latest,
                GroupDecision::UpToDate => {
                    report.up_to_date += 1;
                    continue;
                }
                GroupDecision::Undated => {
                    report.undated += 1;
                    continue;
                }
            };

            let mut next = NewTransaction::recurrence_of(latest, now);
            next.owner_id = owner_id.to_string();
            let description = next.description.clone();

            match self.ledger.add(next).await {
                Ok(id) => {
                    info!("Generated recurring entry '{}' ({})", description, id);
                    report.generated.push(id);
                }
                Err(e) => {
                    let failure = SynthesisError {
                        description,
                        reason: e.to_string(),
                    };
                    error!("{}", failure);
                    report.failures.push(failure);
                }
            }
        }

        Ok(report)
    }
}
