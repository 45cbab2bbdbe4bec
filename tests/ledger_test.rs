mod common;

use anyhow::Result;
use common::{date, expense, income, test_service};
use kwenta::application::LedgerService;
use kwenta::domain::BalanceTrend;

#[tokio::test]
async fn test_summary_for_the_two_entry_scenario() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service
        .add_transaction(income("01-01-2024", "Salary", "1000.00"))
        .await?;
    service
        .add_transaction(expense("01-02-2024", "Food", "150.50"))
        .await?;

    let summary = service.summary().await?;
    assert_eq!(summary.balance_cents, 84950); // 849.50
    assert_eq!(summary.tracked_since, Some(date("01-01-2024")));
    assert_eq!(summary.trend(), BalanceTrend::Up);

    Ok(())
}

#[tokio::test]
async fn test_summary_of_empty_ledger() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let summary = service.summary().await?;
    assert_eq!(summary.balance_cents, 0);
    assert_eq!(summary.tracked_since, None);
    assert_eq!(summary.trend(), BalanceTrend::Flat);

    Ok(())
}

#[tokio::test]
async fn test_summary_follows_every_mutation() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let salary = service
        .add_transaction(income("02-01-2024", "Salary", "500"))
        .await?;
    let rent = service
        .add_transaction(expense("02-02-2024", "Rent", "300"))
        .await?;
    assert_eq!(service.summary().await?.balance_cents, 20_000);

    // Update swings the balance; the earliest date moves with the edit.
    service
        .update_transaction(salary.id, income("02-05-2024", "Salary", "200"))
        .await?;
    let summary = service.summary().await?;
    assert_eq!(summary.balance_cents, -10_000);
    assert_eq!(summary.tracked_since, Some(date("02-02-2024")));
    assert_eq!(summary.trend(), BalanceTrend::Down);

    service.delete_transaction(rent.id).await?;
    assert_eq!(service.summary().await?.balance_cents, 20_000);

    service.delete_transaction(salary.id).await?;
    let summary = service.summary().await?;
    assert_eq!(summary.balance_cents, 0);
    assert_eq!(summary.tracked_since, None);

    Ok(())
}

#[tokio::test]
async fn test_tracked_since_matches_first_listed_row() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service.add_transaction(income("06-10-2024", "Salary", "10")).await?;
    service.add_transaction(expense("03-04-2024", "Food", "5")).await?;

    let rows = service.list_transactions().await?;
    let summary = service.summary().await?;
    assert_eq!(summary.tracked_since, Some(rows[0].date));
    assert_eq!(summary.tracked_since, Some(date("03-04-2024")));

    Ok(())
}

#[tokio::test]
async fn test_filter_over_fetched_rows() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service
        .add_transaction(income("01-01-2024", "Salary", "1000.00"))
        .await?;
    service
        .add_transaction(expense("01-02-2024", "Food", "150.50").with_note("team lunch"))
        .await?;

    let rows = service.list_transactions().await?;

    // Empty query keeps every row unchanged.
    assert_eq!(LedgerService::filter(&rows, ""), rows);

    // Case-insensitive, matching any rendered field.
    assert_eq!(LedgerService::filter(&rows, "SALARY").len(), 1);
    assert_eq!(LedgerService::filter(&rows, "income").len(), 1);
    assert_eq!(LedgerService::filter(&rows, "150.50").len(), 1);
    assert_eq!(LedgerService::filter(&rows, "01-02-2024").len(), 1);
    assert_eq!(LedgerService::filter(&rows, "lunch").len(), 1);
    assert_eq!(LedgerService::filter(&rows, "2024").len(), 2);
    assert!(LedgerService::filter(&rows, "utilities").is_empty());

    Ok(())
}
