//! In-memory repository fakes shared by the service tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use crate::cards::{CreditCard, CreditCardRepositoryTrait, NewCreditCard};
use crate::categories::{Category, CategoryRepositoryTrait, NewCategory};
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::payables::{NewPayable, Payable, PayableRepositoryTrait, PayableStatus};
use crate::transactions::{
    LedgerRepositoryTrait, NewTransaction, PaymentMethod, Transaction, TransactionKind,
};
use crate::utils::YearMonth;

pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn entry(
    id: &str,
    description: &str,
    amount: Decimal,
    kind: TransactionKind,
    category: Option<&str>,
    created_at: Option<DateTime<Utc>>,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        owner_id: "user-1".to_string(),
        amount,
        description: description.to_string(),
        kind,
        category: category.map(str::to_string),
        is_recurring: false,
        payment_method: PaymentMethod::Cash,
        card_id: None,
        created_at,
    }
}

pub fn recurring(
    id: &str,
    description: &str,
    amount: Decimal,
    kind: TransactionKind,
    category: Option<&str>,
    created_at: Option<DateTime<Utc>>,
) -> Transaction {
    Transaction {
        is_recurring: true,
        ..entry(id, description, amount, kind, category, created_at)
    }
}

fn rejected(what: &str) -> Error {
    Error::Database(DatabaseError::QueryFailed(format!("{} rejected", what)))
}

// ============== Ledger ==============

#[derive(Default)]
pub struct MockLedger {
    transactions: Mutex<Vec<Transaction>>,
    next_id: AtomicUsize,
    add_calls: AtomicUsize,
    fail_all_adds: AtomicBool,
    fail_list: AtomicBool,
    failing_descriptions: Mutex<HashSet<String>>,
    count_override: Mutex<Option<usize>>,
}

impl MockLedger {
    pub fn with(transactions: Vec<Transaction>) -> Self {
        let ledger = Self::default();
        *ledger.transactions.lock().unwrap() = transactions;
        ledger
    }

    pub fn all(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }

    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub fn fail_all_adds(&self) {
        self.fail_all_adds.store(true, Ordering::SeqCst);
    }

    pub fn fail_reads(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }

    pub fn fail_add_for(&self, description: &str) {
        self.failing_descriptions
            .lock()
            .unwrap()
            .insert(description.to_string());
    }

    pub fn set_count(&self, count: usize) {
        *self.count_override.lock().unwrap() = Some(count);
    }
}

#[async_trait]
impl LedgerRepositoryTrait for MockLedger {
    async fn add(&self, transaction: NewTransaction) -> Result<String> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all_adds.load(Ordering::SeqCst)
            || self
                .failing_descriptions
                .lock()
                .unwrap()
                .contains(&transaction.description)
        {
            return Err(rejected("insert"));
        }

        let id = format!("new-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let mut stored = Transaction::from_new(id.clone(), transaction);
        stored.created_at = stored.created_at.or_else(|| Some(Utc::now()));
        self.transactions.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn update(&self, transaction: Transaction) -> Result<()> {
        let mut all = self.transactions.lock().unwrap();
        match all
            .iter_mut()
            .find(|t| t.id == transaction.id && t.owner_id == transaction.owner_id)
        {
            Some(existing) => {
                *existing = transaction;
                Ok(())
            }
            None => Err(Error::NotFound(format!("Transaction {}", transaction.id))),
        }
    }

    async fn delete(&self, transaction_id: &str) -> Result<()> {
        let mut all = self.transactions.lock().unwrap();
        let before = all.len();
        all.retain(|t| t.id != transaction_id);
        if all.len() == before {
            return Err(Error::NotFound(format!("Transaction {}", transaction_id)));
        }
        Ok(())
    }

    async fn list_by_month(&self, owner_id: &str, month: YearMonth) -> Result<Vec<Transaction>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(rejected("list"));
        }
        Ok(self
            .all()
            .into_iter()
            .filter(|t| t.owner_id == owner_id)
            .filter(|t| t.created_at.as_ref().is_some_and(|at| month.contains(at)))
            .collect())
    }

    async fn list_recurring(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(rejected("list"));
        }
        Ok(self
            .all()
            .into_iter()
            .filter(|t| t.owner_id == owner_id && t.is_recurring)
            .collect())
    }

    async fn count_by_month(&self, owner_id: &str, month: YearMonth) -> Result<usize> {
        let count_override = *self.count_override.lock().unwrap();
        if let Some(count) = count_override {
            return Ok(count);
        }
        Ok(self.list_by_month(owner_id, month).await?.len())
    }
}

// ============== Cards ==============

#[derive(Default)]
pub struct MockCards {
    cards: Mutex<Vec<CreditCard>>,
    charged: Mutex<HashSet<String>>,
}

impl MockCards {
    pub fn with(cards: Vec<CreditCard>) -> Self {
        Self {
            cards: Mutex::new(cards),
            ..Self::default()
        }
    }

    /// Marks the card as still having ledger charges.
    pub fn mark_charged(&self, card_id: &str) {
        self.charged.lock().unwrap().insert(card_id.to_string());
    }
}

pub fn card(id: &str, name: &str, limit: Decimal) -> CreditCard {
    CreditCard {
        id: id.to_string(),
        owner_id: "user-1".to_string(),
        name: name.to_string(),
        limit_amount: limit,
        closing_day: 5,
        due_day: 15,
        color: "#4CAF50".to_string(),
        created_at: None,
    }
}

#[async_trait]
impl CreditCardRepositoryTrait for MockCards {
    async fn get_cards(&self, owner_id: &str) -> Result<Vec<CreditCard>> {
        let mut cards: Vec<CreditCard> = self
            .cards
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect();
        cards.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cards)
    }

    async fn add_card(&self, new_card: NewCreditCard) -> Result<CreditCard> {
        let mut cards = self.cards.lock().unwrap();
        let stored = CreditCard {
            id: format!("card-{}", cards.len() + 1),
            owner_id: new_card.owner_id,
            name: new_card.name,
            limit_amount: new_card.limit_amount,
            closing_day: new_card.closing_day,
            due_day: new_card.due_day,
            color: new_card.color,
            created_at: None,
        };
        cards.push(stored.clone());
        Ok(stored)
    }

    async fn delete_card(&self, card_id: &str) -> Result<()> {
        if self.charged.lock().unwrap().contains(card_id) {
            return Err(ValidationError::CardInUse(card_id.to_string()).into());
        }
        let mut cards = self.cards.lock().unwrap();
        let before = cards.len();
        cards.retain(|c| c.id != card_id);
        if cards.len() == before {
            return Err(Error::NotFound(format!("Card {}", card_id)));
        }
        Ok(())
    }
}

// ============== Budgets ==============

#[derive(Default)]
pub struct MockBudgets {
    budgets: Mutex<Vec<Budget>>,
}

impl MockBudgets {
    pub fn all(&self) -> Vec<Budget> {
        self.budgets.lock().unwrap().clone()
    }
}

#[async_trait]
impl BudgetRepositoryTrait for MockBudgets {
    async fn upsert_budget(&self, budget: NewBudget) -> Result<Budget> {
        let mut budgets = self.budgets.lock().unwrap();
        if let Some(existing) = budgets.iter_mut().find(|b| {
            b.owner_id == budget.owner_id && b.category == budget.category && b.month == budget.month
        }) {
            existing.amount = budget.amount;
            return Ok(existing.clone());
        }
        let stored = Budget {
            id: format!("budget-{}", budgets.len() + 1),
            owner_id: budget.owner_id,
            category: budget.category,
            month: budget.month,
            amount: budget.amount,
        };
        budgets.push(stored.clone());
        Ok(stored)
    }

    async fn get_budgets(&self, owner_id: &str, month: YearMonth) -> Result<Vec<Budget>> {
        Ok(self
            .all()
            .into_iter()
            .filter(|b| b.owner_id == owner_id && b.month == month)
            .collect())
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<()> {
        let mut budgets = self.budgets.lock().unwrap();
        let before = budgets.len();
        budgets.retain(|b| b.id != budget_id);
        if budgets.len() == before {
            return Err(Error::NotFound(format!("Budget {}", budget_id)));
        }
        Ok(())
    }
}

// ============== Payables ==============

#[derive(Default)]
pub struct MockPayables {
    payables: Mutex<Vec<Payable>>,
    status_updates: Mutex<Vec<(String, PayableStatus)>>,
    failing_status: Mutex<Option<PayableStatus>>,
}

impl MockPayables {
    pub fn with(payables: Vec<Payable>) -> Self {
        Self {
            payables: Mutex::new(payables),
            ..Self::default()
        }
    }

    pub fn get(&self, payable_id: &str) -> Option<Payable> {
        self.payables
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == payable_id)
            .cloned()
    }

    pub fn status_updates(&self) -> Vec<(String, PayableStatus)> {
        self.status_updates.lock().unwrap().clone()
    }

    /// Makes every update to `status` fail.
    pub fn fail_updates_to(&self, status: PayableStatus) {
        *self.failing_status.lock().unwrap() = Some(status);
    }
}

#[async_trait]
impl PayableRepositoryTrait for MockPayables {
    async fn add(&self, payable: NewPayable) -> Result<Payable> {
        let mut payables = self.payables.lock().unwrap();
        let stored = Payable {
            id: format!("payable-{}", payables.len() + 1),
            owner_id: payable.owner_id,
            description: payable.description,
            amount: payable.amount,
            due_date: payable.due_date,
            status: PayableStatus::Pending,
            created_at: None,
        };
        payables.push(stored.clone());
        Ok(stored)
    }

    async fn get_pending(&self, owner_id: &str) -> Result<Vec<Payable>> {
        let mut pending: Vec<Payable> = self
            .payables
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.owner_id == owner_id && p.status == PayableStatus::Pending)
            .cloned()
            .collect();
        pending.sort_by_key(|p| p.due_date);
        Ok(pending)
    }

    async fn update_status(&self, payable_id: &str, status: PayableStatus) -> Result<()> {
        if *self.failing_status.lock().unwrap() == Some(status) {
            return Err(rejected("status update"));
        }
        let mut payables = self.payables.lock().unwrap();
        let payable = payables
            .iter_mut()
            .find(|p| p.id == payable_id)
            .ok_or_else(|| Error::NotFound(format!("Payable {}", payable_id)))?;
        payable.status = status;
        self.status_updates
            .lock()
            .unwrap()
            .push((payable_id.to_string(), status));
        Ok(())
    }

    async fn delete(&self, payable_id: &str) -> Result<()> {
        let mut payables = self.payables.lock().unwrap();
        let before = payables.len();
        payables.retain(|p| p.id != payable_id);
        if payables.len() == before {
            return Err(Error::NotFound(format!("Payable {}", payable_id)));
        }
        Ok(())
    }
}

// ============== Categories ==============

#[derive(Default)]
pub struct MockCategories {
    categories: Mutex<Vec<Category>>,
    fail_reads: AtomicBool,
}

impl MockCategories {
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<Category> {
        self.categories.lock().unwrap().clone()
    }
}

#[async_trait]
impl CategoryRepositoryTrait for MockCategories {
    async fn get_custom(&self, owner_id: &str) -> Result<Vec<Category>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(rejected("category read"));
        }
        Ok(self
            .all()
            .into_iter()
            .filter(|c| c.owner_id.as_deref() == Some(owner_id))
            .collect())
    }

    async fn add(&self, category: NewCategory) -> Result<Category> {
        let mut categories = self.categories.lock().unwrap();
        let stored = Category {
            id: Some(format!("cat-{}", categories.len() + 1)),
            name: category.name,
            icon: category.icon,
            color: category.color,
            is_custom: true,
            owner_id: Some(category.owner_id),
        };
        categories.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, category_id: &str) -> Result<()> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id.as_deref() != Some(category_id));
        if categories.len() == before {
            return Err(Error::NotFound(format!("Category {}", category_id)));
        }
        Ok(())
    }
}
