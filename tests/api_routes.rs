//! Integration tests for the HTTP routes.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; no
//! socket is opened.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use finance_advisor::api::create_router;
use finance_advisor::config::ServerConfig;
use finance_advisor::FinanceAdvisor;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn router() -> Router {
    create_router(Arc::new(FinanceAdvisor::new()), &ServerConfig::default())
}

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn sample_expenses() -> Value {
    json!({
        "rent": 1200,
        "food": 400,
        "transportation": 300,
        "utilities": 150,
        "entertainment": 200,
        "shopping": 150
    })
}

// =============================================================================
// Info Endpoints
// =============================================================================

#[tokio::test]
async fn root_and_health_report_running() {
    let (status, body) = send(Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");

    let (status, body) = send(Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

// =============================================================================
// NLU
// =============================================================================

#[tokio::test]
async fn nlu_returns_analysis_and_echoes_text() {
    let (status, body) = send(
        Method::POST,
        "/api/v1/nlu",
        Some(json!({"text": "I spend $100 a month"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["text"], "I spend $100 a month");
    assert_eq!(
        body["data"]["analysis"]["entities"],
        json!([{"text": "month", "type": "TIME"}, {"text": "dollar", "type": "MONEY"}])
    );
    assert_eq!(body["data"]["analysis"]["keywords"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn nlu_rejects_blank_text() {
    let (status, body) = send(Method::POST, "/api/v1/nlu", Some(json!({"text": "  "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

// =============================================================================
// Advice
// =============================================================================

#[tokio::test]
async fn generate_with_and_without_nlu() {
    let (status, body) = send(
        Method::POST,
        "/api/v1/generate",
        Some(json!({"question": "How do I handle student loans?", "persona": "Student"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["persona"], "student");
    assert!(body["data"]["nlu_analysis"].is_object());
    assert!(body["data"]["response"]
        .as_str()
        .unwrap()
        .starts_with("Here's my advice for your financial question"));

    let (status, body) = send(
        Method::POST,
        "/api/v1/generate",
        Some(json!({"question": "How do I handle student loans?", "use_nlu": false})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].get("nlu_analysis").is_none());
}

// =============================================================================
// Budget Summary
// =============================================================================

#[tokio::test]
async fn budget_summary_returns_metrics() {
    let (status, body) = send(
        Method::POST,
        "/api/v1/budget-summary",
        Some(json!({
            "income": 4000,
            "expenses": sample_expenses(),
            "savings_goal": 500,
            "currency": "$",
            "user_type": "professional"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user_type"], "professional");

    let metrics = &body["data"]["summary"]["metrics"];
    assert_eq!(metrics["total_expenses"], 2400.0);
    assert_eq!(metrics["annual_income"], 48000.0);
    assert_eq!(metrics["annual_expenses"], 28800.0);
    assert_eq!(metrics["monthly_disposable"], 1600.0);
    assert_eq!(metrics["savings_potential"], 1100.0);
    assert!(body["data"]["summary"]["prompt"]
        .as_str()
        .unwrap()
        .contains("EXPENSE ALLOCATION:"));
}

#[tokio::test]
async fn budget_summary_error_statuses() {
    let (status, _) = send(
        Method::POST,
        "/api/v1/budget-summary",
        Some(json!({"income": -1, "expenses": sample_expenses(), "savings_goal": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        Method::POST,
        "/api/v1/budget-summary",
        Some(json!({"income": 3000, "expenses": {}, "savings_goal": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("Division by zero"));
}

#[tokio::test]
async fn budget_summary_missing_field_is_bad_request() {
    let (status, body) = send(
        Method::POST,
        "/api/v1/budget-summary",
        Some(json!({"income": 4000, "expenses": {"rent": 1200}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert!(body["error"].as_str().unwrap().contains("savings_goal"));
}

#[tokio::test]
async fn budget_summary_overflowing_figures_are_bad_request() {
    let (status, body) = send(
        Method::POST,
        "/api/v1/budget-summary",
        Some(json!({"income": 1e308, "expenses": {"a": 1e308, "b": 1e308}, "savings_goal": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn malformed_json_is_enveloped_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"question\": "))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["timestamp"].is_string());
}

// =============================================================================
// Spending Insights
// =============================================================================

#[tokio::test]
async fn spending_insights_reports_goal_feasibility() {
    let (status, body) = send(
        Method::POST,
        "/api/v1/spending-insights",
        Some(json!({
            "income": 5000,
            "expenses": {
                "rent": 1500, "food": 600, "transportation": 400,
                "utilities": 200, "entertainment": 300, "insurance": 400
            },
            "goals": [
                {"name": "Emergency Fund", "amount": 10000, "months": 12},
                {"name": "Vacation", "amount": 3000, "months": 6}
            ],
            "user_type": "student"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let metrics = &body["data"]["insights"]["metrics"];
    assert_eq!(metrics["surplus"], 1600.0);
    assert_eq!(metrics["savings_rate"], 32.0);
    assert_eq!(metrics["goals_achievable"], true);
    assert_eq!(metrics["goals"][1]["monthly_required"], 500.0);
}

#[tokio::test]
async fn spending_insights_zero_income_is_unprocessable() {
    let (status, _) = send(
        Method::POST,
        "/api/v1/spending-insights",
        Some(json!({"income": 0, "expenses": sample_expenses(), "goals": []})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
