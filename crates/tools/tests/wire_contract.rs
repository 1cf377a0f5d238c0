//! The JSON bodies these tools emit are a drop-in contract for existing
//! callers; these tests pin the exact field names and error strings.

use std::sync::Arc;

use serde_json::json;

use lotwise_core::config::EngineConfig;
use lotwise_core::inventory::catalog::CatalogStore;
use lotwise_tools::{tool_registry, CustomerDirectory, ToolRegistry};

fn registry() -> ToolRegistry {
    tool_registry(
        Arc::new(CatalogStore::sample()),
        Arc::new(CustomerDirectory::with_demo_customers()),
        EngineConfig::default(),
    )
}

#[tokio::test]
async fn the_four_backend_tools_are_registered() {
    let registry = registry();
    assert_eq!(
        registry.names(),
        vec![
            "calculate_loan_details",
            "check_loan_qualification",
            "get_customer_profile",
            "search_cars",
        ]
    );
}

#[tokio::test]
async fn search_cars_returns_the_chosen_vehicle_shape() {
    let output = registry()
        .execute(
            "search_cars",
            json!({
                "car_type": "SUV",
                "min_price": 20000,
                "max_price": 30000,
                "new_or_used": "new",
                "car_model": "kamiq"
            }),
        )
        .await
        .expect("tool runs");

    assert_eq!(
        output,
        json!({
            "chosen_car_model": "Skoda Kamiq",
            "chosen_car_price": 27500,
            "dealer_location": "Riverside Skoda",
            "features": ["adaptive cruise control", "lane assist", "heated seats"]
        })
    );
}

#[tokio::test]
async fn search_cars_not_found_body_is_canonical() {
    let output = registry()
        .execute(
            "search_cars",
            json!({
                "car_type": "convertible",
                "min_price": 1000,
                "max_price": 2000,
                "new_or_used": "new"
            }),
        )
        .await
        .expect("tool runs");

    assert_eq!(output, json!({ "error": "No car found matching your criteria." }));
}

#[tokio::test]
async fn unknown_condition_string_can_never_match() {
    let output = registry()
        .execute(
            "search_cars",
            json!({
                "car_type": "sedan",
                "min_price": 0,
                "max_price": 100000,
                "new_or_used": "refurbished"
            }),
        )
        .await
        .expect("tool runs");

    assert_eq!(output, json!({ "error": "No car found matching your criteria." }));
}

#[tokio::test]
async fn financing_success_body_carries_all_four_fields() {
    let output = registry()
        .execute(
            "calculate_loan_details",
            json!({
                "purchase_amount": 28000.0,
                "loan_term_months": 60,
                "down_payment": 1000.0
            }),
        )
        .await
        .expect("tool runs");

    assert_eq!(
        output,
        json!({
            "error": null,
            "monthly_payment_estimate": 515.73,
            "total_interest_paid": 3943.88,
            "principal_financed": 27000.0
        })
    );
}

#[tokio::test]
async fn financing_invalid_term_keeps_the_zeroed_estimates() {
    let output = registry()
        .execute(
            "calculate_loan_details",
            json!({
                "purchase_amount": 28000.0,
                "loan_term_months": 99
            }),
        )
        .await
        .expect("tool runs");

    assert_eq!(
        output,
        json!({
            "error": "Invalid loan term. Supported terms: [36, 48, 60, 72] months.",
            "monthly_payment_estimate": 0.0,
            "total_interest_paid": 0.0,
            "principal_financed": 28000.0
        })
    );
}

#[tokio::test]
async fn financing_rejects_a_down_payment_above_the_purchase_amount() {
    let output = registry()
        .execute(
            "calculate_loan_details",
            json!({
                "purchase_amount": 28000.0,
                "loan_term_months": 60,
                "down_payment": 30000.0
            }),
        )
        .await
        .expect("tool runs");

    assert_eq!(output["error"], json!("Down payment cannot exceed purchase amount."));
}

#[tokio::test]
async fn qualification_approval_body_matches_the_contract() {
    let output = registry()
        .execute(
            "check_loan_qualification",
            json!({
                "vehicle_price": 28000,
                "customer_profile": {
                    "customer_id": "CUST_12345",
                    "credit_score": 720,
                    "annual_income": 85000,
                    "monthly_debt_payments": 1200,
                    "account_balance": 15000
                }
            }),
        )
        .await
        .expect("tool runs");

    assert_eq!(output["approved"], json!(true));
    assert_eq!(output["credit_tier"], json!("good"));
    assert_eq!(output["credit_score"], json!(720));
    assert_eq!(output["current_debt_to_income"], json!(0.169));
    assert_eq!(output["denial_reason"], json!(null));
    assert_eq!(output["suggested_down_payment"], json!(5600.0));

    let options = output["loan_options"].as_array().expect("loan options array");
    assert_eq!(options.len(), 4);
    assert_eq!(options[3]["term_months"], json!(72));
    assert_eq!(options[3]["interest_rate"], json!(4.1));
    assert_eq!(options[3]["monthly_payment"], json!(439.34));
}

#[tokio::test]
async fn qualification_denial_over_the_affordability_ceiling() {
    let output = registry()
        .execute(
            "check_loan_qualification",
            json!({
                "vehicle_price": 60000,
                "customer_profile": {
                    "credit_score": 720,
                    "annual_income": 85000,
                    "monthly_debt_payments": 1200,
                    "account_balance": 15000
                }
            }),
        )
        .await
        .expect("tool runs");

    assert_eq!(output["approved"], json!(false));
    assert_eq!(output["loan_options"], json!([]));
    assert_eq!(
        output["denial_reason"],
        json!("Requested loan amount ($60,000) exceeds maximum based on income ($32,300)")
    );
    assert!(output.get("suggested_down_payment").is_none());
}

#[tokio::test]
async fn qualification_names_the_missing_profile_field() {
    let output = registry()
        .execute(
            "check_loan_qualification",
            json!({
                "vehicle_price": 28000,
                "customer_profile": {
                    "annual_income": 85000,
                    "monthly_debt_payments": 1200,
                    "account_balance": 15000
                }
            }),
        )
        .await
        .expect("tool runs");

    assert_eq!(
        output,
        json!({
            "error": "Missing required customer data: 'credit_score'",
            "approved": false
        })
    );
}

#[tokio::test]
async fn customer_lookup_defaults_to_the_logged_in_demo_user() {
    let output = registry()
        .execute("get_customer_profile", json!({}))
        .await
        .expect("tool runs");

    assert_eq!(output["customer_id"], json!("CUST_12345"));
    assert_eq!(output["credit_score"], json!(720));
    assert_eq!(output["annual_income"], json!(85000.0));
}

#[tokio::test]
async fn unknown_customer_is_a_structured_miss() {
    let output = registry()
        .execute("get_customer_profile", json!({ "customer_id": "CUST_99999" }))
        .await
        .expect("tool runs");

    assert_eq!(output, json!({ "error": "Customer CUST_99999 not found" }));
}

#[tokio::test]
async fn an_empty_catalog_serves_no_inventory_rather_than_failing() {
    let registry = tool_registry(
        Arc::new(CatalogStore::load_or_empty("/nonexistent/cars.json")),
        Arc::new(CustomerDirectory::with_demo_customers()),
        EngineConfig::default(),
    );

    let output = registry
        .execute(
            "search_cars",
            json!({
                "car_type": "sedan",
                "min_price": 0,
                "max_price": 100000,
                "new_or_used": "any"
            }),
        )
        .await
        .expect("tool runs");

    assert_eq!(output, json!({ "error": "No car found matching your criteria." }));
}
