use serde_json::json;
use spark_client::prelude::*;

const ACCOUNT_KEY: &str = "ACC_080-123456";

fn seeded_gateway() -> MockGateway {
    MockGateway::new()
        .with_static_data(json!({
            "data": [
                {
                    "b": "ACC",
                    "a": [
                        { "_k": ACCOUNT_KEY, "a": { "e": "Israel Israeli", "b": "123456" } }
                    ]
                }
            ]
        }))
        .with_holdings(
            ACCOUNT_KEY,
            json!({
                "data": [
                    { "c": 5100, "j": "Government bonds", "bd": 120.0, "be": 400.0, "bk": 40.0 },
                    { "c": 5200, "j": "Equity index", "bd": 10.0, "be": 400.0, "bk": 40.0 }
                ]
            }),
        )
        .with_holdings_summary(ACCOUNT_KEY, json!({ "data": { "b": 1000.0, "g": 200.0 } }))
        .with_securities(ACCOUNT_KEY, json!({ "data": { "a": { "o": 1000.0 } } }))
}

async fn first_account(service: &AccountService<MockGateway>) -> Account {
    service.get_accounts().await.unwrap().into_iter().next().unwrap()
}

#[tokio::test]
async fn accounts_flow_from_gateway_to_typed_entities() {
    let service = AccountService::new(Arc::new(seeded_gateway()));

    let accounts = service.get_accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name, "Israel Israeli");
    assert_eq!(accounts[0].number, "123456");
}

#[tokio::test]
async fn holdings_and_summary_flow_through_the_normalizers() {
    let service = AccountService::new(Arc::new(seeded_gateway()));
    let account = first_account(&service).await;

    let holdings = service.get_account_holdings(&account).await.unwrap();
    assert_eq!(holdings.len(), 2);
    assert_eq!(holdings[0].fund_number, Some(5100));

    let summary = service.get_account_holdings_summary(&account).await.unwrap();
    assert_eq!(summary.total_worth, 1000.0);
    assert_eq!(summary.cash_worth, 200.0);

    let balance = service.get_account_balance(&account).await.unwrap();
    assert_eq!(balance, 1000.0);
}

#[tokio::test]
async fn balancing_an_account_end_to_end() {
    let service = AccountService::new(Arc::new(seeded_gateway()));
    let account = first_account(&service).await;

    let desired = [
        DesiredAllocationEntry {
            fund_number: 5100,
            percent: 60.0,
        },
        DesiredAllocationEntry {
            fund_number: 9999,
            percent: 40.0,
        },
    ];
    let results = service
        .balance_account(&account, &desired, &BalanceStrategy::default())
        .await
        .unwrap();

    // one slot per target, unheld fund skipped
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().amount_to_balance, "80.00");
    assert!(results[1].is_none());

    let report = BalanceReport::new(results);
    assert_eq!(report.matched(), 1);
    let rendered = report.to_string();
    assert!(rendered.contains("Government bonds"));
    assert!(rendered.contains("80.00"));
    assert!(rendered.contains("(not held)"));
}

#[tokio::test]
async fn percent_basis_balancing_end_to_end() {
    let service = AccountService::new(Arc::new(seeded_gateway()));
    let account = first_account(&service).await;

    let desired = [DesiredAllocationEntry {
        fund_number: 5100,
        percent: 70.0,
    }];
    let results = service
        .balance_account(&account, &desired, &BalanceStrategy::PercentBasis)
        .await
        .unwrap();

    // reported percentages are 40/40 -> currently 50% of the 800 worth
    assert_eq!(results[0].as_ref().unwrap().amount_to_balance, "160.00");
}

#[tokio::test]
async fn summary_shape_drift_surfaces_as_schema_mismatch() {
    let gateway = seeded_gateway()
        .with_holdings_summary(ACCOUNT_KEY, json!({ "data": { "totals": 1.0 } }));
    let service = AccountService::new(Arc::new(gateway));
    let account = first_account(&service).await;

    let err = service
        .get_account_holdings_summary(&account)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::SchemaMismatch { .. }));
}

#[tokio::test]
async fn unknown_account_key_is_a_gateway_error() {
    let service = AccountService::new(Arc::new(seeded_gateway()));
    let stranger = Account {
        key: "ACC_099-000001".to_string(),
        name: "Stranger".to_string(),
        number: "000001".to_string(),
    };

    let err = service.get_account_holdings(&stranger).await.unwrap_err();
    assert!(matches!(err, AppError::Gateway(_)));
}
