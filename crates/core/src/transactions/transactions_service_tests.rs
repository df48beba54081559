#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::errors::{Error, ValidationError};
    use crate::settings::Settings;
    use crate::test_utils::{card, entry, utc, MockCards, MockLedger};
    use crate::transactions::{
        NewTransaction, PaymentMethod, TransactionInput, TransactionKind, TransactionService,
        TransactionServiceTrait,
    };
    use crate::utils::{FixedClock, YearMonth};

    fn service_with(ledger: Arc<MockLedger>, cards: Arc<MockCards>) -> TransactionService {
        TransactionService::new(
            ledger,
            cards,
            Arc::new(FixedClock(utc(2026, 10, 18))),
            Settings::default(),
        )
    }

    fn service(ledger: Arc<MockLedger>) -> TransactionService {
        service_with(ledger, Arc::new(MockCards::default()))
    }

    fn october() -> YearMonth {
        YearMonth::new(2026, 10).unwrap()
    }

    #[tokio::test]
    async fn test_create_transaction_stores_normalized_entry() {
        let ledger = Arc::new(MockLedger::default());
        let input = TransactionInput::new(" 12,345 ", "  Groceries ", "Food", TransactionKind::Expense);

        let id = service(ledger.clone())
            .create_transaction("user-1", &input)
            .await
            .unwrap();

        let stored = ledger.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].amount, dec!(12.35));
        assert_eq!(stored[0].description, "Groceries");
        assert_eq!(stored[0].category.as_deref(), Some("Food"));
        assert_eq!(stored[0].payment_method, PaymentMethod::Cash);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_ledger() {
        let ledger = Arc::new(MockLedger::default());
        let input = TransactionInput::new("abc", "Lunch", "Food", TransactionKind::Expense);

        let err = service(ledger.clone())
            .create_transaction("user-1", &input)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidAmount(_))
        ));
        assert_eq!(ledger.add_calls(), 0);
    }

    #[tokio::test]
    async fn test_monthly_limit_rejects_add() {
        let ledger = Arc::new(MockLedger::default());
        ledger.set_count(200);
        let input = TransactionInput::new("10", "Coffee", "Food", TransactionKind::Expense);

        let err = service(ledger.clone())
            .create_transaction("user-1", &input)
            .await
            .unwrap_err();

        match err {
            Error::MonthlyLimitExceeded { limit, month } => {
                assert_eq!(limit, 200);
                assert_eq!(month, october());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(ledger.add_calls(), 0);
    }

    #[tokio::test]
    async fn test_one_below_limit_is_admitted() {
        let ledger = Arc::new(MockLedger::default());
        ledger.set_count(199);
        let input = TransactionInput::new("10", "Coffee", "Food", TransactionKind::Expense);

        service(ledger.clone())
            .create_transaction("user-1", &input)
            .await
            .unwrap();

        assert_eq!(ledger.add_calls(), 1);
    }

    #[tokio::test]
    async fn test_limit_counts_target_month_of_backdated_entry() {
        // October is full but September only holds one entry.
        let mut existing: Vec<_> = (0..3)
            .map(|i| {
                entry(
                    &format!("t{i}"),
                    "Coffee",
                    dec!(5),
                    TransactionKind::Expense,
                    Some("Food"),
                    Some(utc(2026, 10, 1)),
                )
            })
            .collect();
        existing.push(entry(
            "t9",
            "Rent",
            dec!(900),
            TransactionKind::Expense,
            Some("Housing"),
            Some(utc(2026, 9, 1)),
        ));
        let ledger = Arc::new(MockLedger::with(existing));
        let service = TransactionService::new(
            ledger.clone(),
            Arc::new(MockCards::default()),
            Arc::new(FixedClock(utc(2026, 10, 18))),
            Settings {
                monthly_transaction_limit: 3,
                ..Settings::default()
            },
        );

        let backdated = TransactionInput::new("8", "Snack", "Food", TransactionKind::Expense)
            .dated(utc(2026, 9, 20));
        service.create_transaction("user-1", &backdated).await.unwrap();

        let current = TransactionInput::new("8", "Snack", "Food", TransactionKind::Expense);
        let err = service
            .create_transaction("user-1", &current)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MonthlyLimitExceeded { .. }));
    }

    #[tokio::test]
    async fn test_card_charge_requires_known_card() {
        let ledger = Arc::new(MockLedger::default());
        let cards = Arc::new(MockCards::with(vec![card("card-1", "Visa", dec!(1000))]));
        let service = service_with(ledger.clone(), cards);

        let unknown = TransactionInput::new("50", "Shoes", "Leisure", TransactionKind::Expense)
            .on_card("card-404");
        let err = service
            .create_transaction("user-1", &unknown)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::UnknownCard(ref id)) if id == "card-404"
        ));
        assert_eq!(ledger.add_calls(), 0);

        let known = TransactionInput::new("50", "Shoes", "Leisure", TransactionKind::Expense)
            .on_card("card-1");
        service.create_transaction("user-1", &known).await.unwrap();
        assert_eq!(ledger.all()[0].card_id.as_deref(), Some("card-1"));
    }

    #[tokio::test]
    async fn test_add_transaction_requires_owner() {
        let ledger = Arc::new(MockLedger::default());
        let service = service(ledger.clone());
        let input = TransactionInput::new("10", "Coffee", "Food", TransactionKind::Expense);
        let mut transaction = service
            .validate_and_build_transaction("user-1", &input)
            .unwrap();
        transaction.owner_id = " ".to_string();

        let err = service.add_transaction(transaction).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::OwnerRequired)
        ));
    }

    fn hand_built(amount: rust_decimal::Decimal, description: &str) -> NewTransaction {
        NewTransaction {
            owner_id: "user-1".to_string(),
            amount,
            description: description.to_string(),
            kind: TransactionKind::Expense,
            category: Some("Food".to_string()),
            is_recurring: false,
            payment_method: PaymentMethod::Cash,
            card_id: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_add_transaction_rechecks_built_entry() {
        let ledger = Arc::new(MockLedger::default());
        let service = service(ledger.clone());

        for amount in [dec!(0), dec!(-5), dec!(1000000.00)] {
            let err = service
                .add_transaction(hand_built(amount, "Coffee"))
                .await
                .unwrap_err();
            assert!(
                matches!(err, Error::Validation(ValidationError::AmountOutOfRange(_))),
                "admitted {amount}"
            );
        }
        let err = service
            .add_transaction(hand_built(dec!(1.23456), "Coffee"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidAmount(_))));
        let err = service
            .add_transaction(hand_built(dec!(4.50), ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DescriptionRequired)
        ));

        assert_eq!(ledger.add_calls(), 0);
        assert!(ledger.all().is_empty());
    }

    #[tokio::test]
    async fn test_add_transaction_drops_card_on_cash_entry() {
        let ledger = Arc::new(MockLedger::default());
        let mut transaction = hand_built(dec!(4.50), "Coffee");
        transaction.card_id = Some("card-1".to_string());

        service(ledger.clone()).add_transaction(transaction).await.unwrap();

        assert_eq!(ledger.all()[0].card_id, None);
    }

    #[tokio::test]
    async fn test_update_replaces_entry() {
        let ledger = Arc::new(MockLedger::with(vec![entry(
            "t1",
            "Lunch",
            dec!(20),
            TransactionKind::Expense,
            Some("Food"),
            Some(utc(2026, 10, 3)),
        )]));
        let input = TransactionInput::new("25.5", "Dinner", "Food", TransactionKind::Expense)
            .dated(utc(2026, 10, 3));

        let updated = service(ledger.clone())
            .update_transaction("t1", "user-1", &input)
            .await
            .unwrap();

        assert_eq!(updated.id, "t1");
        let stored = ledger.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].description, "Dinner");
        assert_eq!(stored[0].amount, dec!(25.50));
    }

    #[tokio::test]
    async fn test_update_unknown_entry_is_not_found() {
        let ledger = Arc::new(MockLedger::default());
        let input = TransactionInput::new("1", "Lunch", "Food", TransactionKind::Expense);
        let service = service(ledger);

        let missing = service
            .update_transaction("nope", "user-1", &input)
            .await
            .unwrap_err();
        assert!(missing.is_not_found());

        let blank = service
            .update_transaction("", "user-1", &input)
            .await
            .unwrap_err();
        assert!(blank.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_transaction() {
        let ledger = Arc::new(MockLedger::with(vec![entry(
            "t1",
            "Lunch",
            dec!(20),
            TransactionKind::Expense,
            Some("Food"),
            Some(utc(2026, 10, 3)),
        )]));
        let service = service(ledger.clone());

        service.delete_transaction("t1").await.unwrap();

        assert!(ledger.all().is_empty());
        assert!(service.delete_transaction("t1").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_get_transactions_by_month_filters_month() {
        let ledger = Arc::new(MockLedger::with(vec![
            entry("t1", "Lunch", dec!(20), TransactionKind::Expense, Some("Food"), Some(utc(2026, 10, 3))),
            entry("t2", "Salary", dec!(3000), TransactionKind::Income, Some("Salary"), Some(utc(2026, 9, 30))),
        ]));

        let october = service(ledger)
            .get_transactions_by_month("user-1", october())
            .await
            .unwrap();

        assert_eq!(october.len(), 1);
        assert_eq!(october[0].id, "t1");
    }
}
