use ledgerly_api::errors::AppError;
use serde_json::json;

mod common;
use common::{dec, decimal, timestamp, TestApp};

fn expense(amount: &str) -> serde_json::Value {
    json!({
        "type": "expense",
        "amount": amount,
        "category": "PAD",
        "transactionDate": "2024-03-01T08:00:00Z"
    })
}

#[actix_rt::test]
async fn test_create_transaction() {
    let app = TestApp::registered().await;

    let response = app
        .post(
            "/transactions",
            &json!({
                "type": "income",
                "amount": "1000.50",
                "category": "DD",
                "description": "Disbursement",
                "transactionDate": "2024-03-01T08:00:00Z"
            }),
        )
        .await;

    assert_eq!(response.status(), 201);
    let body = response.json();
    assert!(body["id"].is_i64());
    assert_eq!(body["type"], "income");
    assert_eq!(body["category"], "DD");
    assert_eq!(decimal(&body["amount"]), dec("1000.50"));
    assert_eq!(body["description"], "Disbursement");
    assert_eq!(body["userId"], app.user_id.as_str());
}

#[actix_rt::test]
async fn test_create_transaction_requires_user() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/transactions",
            &json!({
                "type": "expense",
                "amount": "5.00",
                "category": "PAD",
                "transactionDate": "2024-03-01T08:00:00Z"
            }),
        )
        .await;

    assert_eq!(response.status(), 404);
    assert_eq!(response.json()["message"], "User not found");
}

#[actix_rt::test]
async fn test_create_transaction_rejects_non_positive_amount() {
    let app = TestApp::registered().await;

    for amount in ["0", "-12.00"] {
        let response = app
            .post(
                "/transactions",
                &json!({
                    "type": "expense",
                    "amount": amount,
                    "category": "PAD",
                    "transactionDate": "2024-03-01T08:00:00Z"
                }),
            )
            .await;
        assert_eq!(response.status(), 400);
        assert_eq!(response.json()["error"], "VALIDATION_ERROR");
    }
}

#[actix_rt::test]
async fn test_create_transaction_rejects_amount_beyond_column_range() {
    let app = TestApp::registered().await;

    let response = app.post("/transactions", &expense("99999999999.00")).await;

    assert_eq!(response.status(), 400);
    assert_eq!(response.json()["error"], "VALIDATION_ERROR");

    let response = app.post("/transactions", &expense("9999999999.99")).await;
    assert_eq!(response.status(), 201);
    assert_eq!(decimal(&response.json()["amount"]), dec("9999999999.99"));
}

#[actix_rt::test]
async fn test_create_transaction_rejects_sub_cent_amounts() {
    let app = TestApp::registered().await;

    for amount in ["1.005", "0.001"] {
        let response = app.post("/transactions", &expense(amount)).await;
        assert_eq!(response.status(), 400, "{amount}");
        let body = response.json();
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(
            body["message"].as_str().unwrap().contains("two decimal places"),
            "{body}"
        );
    }

    let body = app.get("/transactions").await.json();
    assert_eq!(body["total"], 0);
}

#[actix_rt::test]
async fn test_amount_check_violation_hides_constraint_name() {
    let app = TestApp::registered().await;

    let err = sqlx::query(
        r#"
        INSERT INTO transactions (user_id, transaction_type, amount, category, transaction_date)
        VALUES ($1, 'expense', -1, 'PAD', NOW())
        "#,
    )
    .bind(&app.user_id)
    .execute(&app.pool)
    .await
    .unwrap_err();

    match AppError::from(err) {
        AppError::ValidationError(message) => assert_eq!(message, "Amount must be positive"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[actix_rt::test]
async fn test_create_transaction_rejects_unknown_category() {
    let app = TestApp::registered().await;

    let response = app
        .post(
            "/transactions",
            &json!({
                "type": "expense",
                "amount": "5.00",
                "category": "GROCERIES",
                "transactionDate": "2024-03-01T08:00:00Z"
            }),
        )
        .await;

    assert_eq!(response.status(), 400);
    assert_eq!(response.json()["error"], "VALIDATION_ERROR");
}

#[actix_rt::test]
async fn test_list_filters_and_pagination() {
    let app = TestApp::registered().await;
    app.add_transaction("income", "100.00", "DD", "2024-01-10T00:00:00Z").await;
    app.add_transaction("expense", "20.00", "PAD", "2024-01-12T00:00:00Z").await;
    app.add_transaction("expense", "30.00", "PAD", "2024-01-14T00:00:00Z").await;
    app.add_transaction("expense", "40.00", "PBH", "2024-01-16T00:00:00Z").await;

    let response = app.get("/transactions").await;
    assert_eq!(response.status(), 200);
    let body = response.json();
    assert_eq!(body["total"], 4);
    let dates: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| timestamp(&t["transactionDate"]))
        .collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]), "newest first: {dates:?}");

    let response = app.get("/transactions?type=expense&category=PAD").await;
    let body = response.json();
    assert_eq!(body["total"], 2);
    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["category"] == "PAD" && t["type"] == "expense"));

    let response = app.get("/transactions?limit=2&offset=1").await;
    let body = response.json();
    assert_eq!(body["total"], 4);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["offset"], 1);
    let page = body["data"].as_array().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(decimal(&page[0]["amount"]), dec("30.00"));
}

#[actix_rt::test]
async fn test_list_same_date_keeps_insertion_order() {
    let app = TestApp::registered().await;
    let first = app
        .add_transaction("expense", "1.00", "PAD", "2024-01-20T00:00:00Z")
        .await;
    let second = app
        .add_transaction("income", "2.00", "DD", "2024-01-20T00:00:00Z")
        .await;
    let newer = app
        .add_transaction("expense", "3.00", "PBH", "2024-01-21T00:00:00Z")
        .await;

    let body = app.get("/transactions").await.json();

    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![newer, first, second]);
}

#[actix_rt::test]
async fn test_list_date_filters_are_inclusive() {
    let app = TestApp::registered().await;
    let at_start = app
        .add_transaction("income", "10.00", "DD", "2024-02-01T00:00:00Z")
        .await;
    let at_end = app
        .add_transaction("expense", "20.00", "PAD", "2024-02-29T23:59:59Z")
        .await;
    app.add_transaction("expense", "30.00", "PAD", "2024-03-01T00:00:00Z")
        .await;
    app.add_transaction("income", "40.00", "DD", "2024-01-31T23:59:59Z")
        .await;

    let response = app
        .get("/transactions?startDate=2024-02-01T00:00:00Z&endDate=2024-02-29T23:59:59Z")
        .await;

    assert_eq!(response.status(), 200);
    let body = response.json();
    assert_eq!(body["total"], 2);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![at_end, at_start]);

    let body = app
        .get("/transactions?endDate=2024-02-29T23:59:59Z")
        .await
        .json();
    assert_eq!(body["total"], 3);
}

#[actix_rt::test]
async fn test_list_rejects_out_of_range_limit() {
    let app = TestApp::registered().await;

    let response = app.get("/transactions?limit=500").await;

    assert_eq!(response.status(), 400);
}

#[actix_rt::test]
async fn test_list_only_returns_own_transactions() {
    let app = TestApp::registered().await;
    let other = app.other_user().await;
    other.add_transaction("income", "1.00", "ADD", "2024-01-10T00:00:00Z").await;

    let body = app.get("/transactions").await.json();

    assert_eq!(body["total"], 0);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_partial_update_changes_only_supplied_fields() {
    let app = TestApp::registered().await;
    let id = app
        .add_transaction("expense", "250.25", "PBH", "2024-02-02T00:00:00Z")
        .await;
    let before = app.get(&format!("/transactions/{id}")).await.json();

    let response = app
        .patch(&format!("/transactions/{id}"), &json!({ "amount": "300.00" }))
        .await;

    assert_eq!(response.status(), 200);
    let after = response.json();
    assert_eq!(decimal(&after["amount"]), dec("300.00"));
    assert_eq!(after["category"], "PBH");
    assert_eq!(after["type"], "expense");
    assert_eq!(
        timestamp(&after["transactionDate"]),
        timestamp(&before["transactionDate"])
    );
    assert!(timestamp(&after["updatedAt"]) > timestamp(&before["updatedAt"]));
}

#[actix_rt::test]
async fn test_update_rejects_non_positive_amount() {
    let app = TestApp::registered().await;
    let id = app
        .add_transaction("expense", "10.00", "PBH", "2024-02-02T00:00:00Z")
        .await;

    let response = app
        .patch(&format!("/transactions/{id}"), &json!({ "amount": "-1" }))
        .await;

    assert_eq!(response.status(), 400);
}

#[actix_rt::test]
async fn test_update_rejects_out_of_range_or_sub_cent_amount() {
    let app = TestApp::registered().await;
    let id = app
        .add_transaction("expense", "10.00", "PBH", "2024-02-02T00:00:00Z")
        .await;

    for amount in ["99999999999.00", "1.005"] {
        let response = app
            .patch(&format!("/transactions/{id}"), &json!({ "amount": amount }))
            .await;
        assert_eq!(response.status(), 400, "{amount}");
        assert_eq!(response.json()["error"], "VALIDATION_ERROR");
    }

    let body = app.get(&format!("/transactions/{id}")).await.json();
    assert_eq!(decimal(&body["amount"]), dec("10.00"));
}

#[actix_rt::test]
async fn test_update_null_description_clears_it() {
    let app = TestApp::registered().await;
    let response = app
        .post(
            "/transactions",
            &json!({
                "type": "expense",
                "amount": "12.00",
                "category": "ADD",
                "description": "Fuel",
                "transactionDate": "2024-02-02T00:00:00Z"
            }),
        )
        .await;
    let id = response.json()["id"].as_i64().unwrap();

    // Absent field keeps the description
    let body = app
        .patch(&format!("/transactions/{id}"), &json!({ "amount": "13.00" }))
        .await
        .json();
    assert_eq!(body["description"], "Fuel");

    let response = app
        .patch(&format!("/transactions/{id}"), &json!({ "description": null }))
        .await;
    assert_eq!(response.status(), 200);
    assert!(response.json()["description"].is_null());
    assert_eq!(decimal(&response.json()["amount"]), dec("13.00"));
}

#[actix_rt::test]
async fn test_update_missing_transaction() {
    let app = TestApp::registered().await;

    let response = app
        .patch("/transactions/999999999", &json!({ "amount": "1.00" }))
        .await;

    assert_eq!(response.status(), 404);
}

#[actix_rt::test]
async fn test_other_user_cannot_read_or_update() {
    let app = TestApp::registered().await;
    let other = app.other_user().await;
    let id = app
        .add_transaction("income", "50.00", "DD", "2024-02-02T00:00:00Z")
        .await;

    assert_eq!(other.get(&format!("/transactions/{id}")).await.status(), 404);
    let response = other
        .patch(&format!("/transactions/{id}"), &json!({ "amount": "1.00" }))
        .await;
    assert_eq!(response.status(), 404);
}

#[actix_rt::test]
async fn test_delete_requires_matching_owner() {
    let app = TestApp::registered().await;
    let other = app.other_user().await;
    let id = app
        .add_transaction("income", "50.00", "DD", "2024-02-02T00:00:00Z")
        .await;

    let response = other.delete(&format!("/transactions/{id}")).await;
    assert_eq!(response.status(), 404);
    assert_eq!(response.json()["success"], false);

    // Still there for its owner
    assert_eq!(app.get(&format!("/transactions/{id}")).await.status(), 200);

    let response = app.delete(&format!("/transactions/{id}")).await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.json()["success"], true);

    let response = app.delete(&format!("/transactions/{id}")).await;
    assert_eq!(response.status(), 404);
    assert_eq!(response.json()["success"], false);
}
