//! REST API server for the finance advisor
//!
//! Thin adapter over `FinanceAdvisor`: deserialize, call, wrap, map errors
//! to status codes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::advisor::FinanceAdvisor;
use crate::config::ServerConfig;
use crate::error::AdvisorError;
use crate::models::{FinancialProfile, Persona, SpendingProfile};

pub const SERVICE_NAME: &str = "Personal Finance Advisor API";

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct NluRequest {
    pub text: String,
}

fn default_enrich() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub question: String,
    #[serde(default)]
    pub persona: Persona,
    /// Run NLU on the question before building the prompt.
    #[serde(default = "default_enrich")]
    pub use_nlu: bool,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

type ApiResult = (StatusCode, Json<ApiResponse>);

fn status_for(error: &AdvisorError) -> StatusCode {
    match error {
        AdvisorError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AdvisorError::DivisionByZero(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond<T: Serialize>(context: &str, result: crate::Result<T>) -> ApiResult {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::success(data))),
        Err(e) => {
            if e.is_client_error() {
                warn!("{} rejected: {}", context, e);
            } else {
                error!("{} failed: {}", context, e);
            }
            (
                status_for(&e),
                Json(ApiResponse::error(format!("{} failed: {}", context, e))),
            )
        }
    }
}

/// Unwraps an extracted body, turning a rejected one into `InvalidInput`.
fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> crate::Result<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AdvisorError::InvalidInput(rejection.body_text()))
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub advisor: Arc<FinanceAdvisor>,
}

/// =============================
/// Info Endpoints
/// =============================

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": SERVICE_NAME,
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Advisor Endpoints
/// =============================

async fn analyze_text(
    State(state): State<ApiState>,
    body: Result<Json<NluRequest>, JsonRejection>,
) -> ApiResult {
    let req = match parse_body(body) {
        Ok(req) => req,
        Err(e) => return respond::<()>("NLU analysis", Err(e)),
    };
    info!("Received NLU request ({} chars)", req.text.len());

    let result = state.advisor.analyze_text(&req.text).map(|analysis| {
        serde_json::json!({
            "analysis": analysis,
            "text": req.text,
        })
    });
    respond("NLU analysis", result)
}

async fn generate_advice(
    State(state): State<ApiState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResult {
    let req = match parse_body(body) {
        Ok(req) => req,
        Err(e) => return respond::<()>("Response generation", Err(e)),
    };
    info!(
        persona = %req.persona,
        use_nlu = req.use_nlu,
        "Received advice request"
    );

    respond(
        "Response generation",
        state
            .advisor
            .generate_advice(&req.question, req.persona, req.use_nlu),
    )
}

async fn budget_summary(
    State(state): State<ApiState>,
    body: Result<Json<FinancialProfile>, JsonRejection>,
) -> ApiResult {
    let profile = match parse_body(body) {
        Ok(profile) => profile,
        Err(e) => return respond::<()>("Budget summary generation", Err(e)),
    };
    info!(
        persona = %profile.persona,
        categories = profile.expenses.len(),
        "Received budget summary request"
    );

    let result = state.advisor.build_budget_summary(&profile).map(|summary| {
        serde_json::json!({
            "summary": summary,
            "user_type": profile.persona,
        })
    });
    respond("Budget summary generation", result)
}

async fn spending_insights(
    State(state): State<ApiState>,
    body: Result<Json<SpendingProfile>, JsonRejection>,
) -> ApiResult {
    let profile = match parse_body(body) {
        Ok(profile) => profile,
        Err(e) => return respond::<()>("Spending analysis", Err(e)),
    };
    info!(
        persona = %profile.persona,
        goals = profile.goals.len(),
        "Received spending insights request"
    );

    let result = state.advisor.build_spending_insights(&profile).map(|insights| {
        serde_json::json!({
            "insights": insights,
            "user_type": profile.persona,
        })
    });
    respond("Spending analysis", result)
}

/// =============================
/// Router
/// =============================

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_router(advisor: Arc<FinanceAdvisor>, config: &ServerConfig) -> Router {
    let state = ApiState { advisor };

    let api = Router::new()
        .route("/nlu", post(analyze_text))
        .route("/generate", post(generate_advice))
        .route("/budget-summary", post(budget_summary))
        .route("/spending-insights", post(spending_insights))
        .route("/health", get(health));

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(advisor: Arc<FinanceAdvisor>, config: ServerConfig) -> crate::Result<()> {
    let router = create_router(advisor, &config);
    let address = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("API Server listening on http://{}", address);
    info!("Local: http://127.0.0.1:{}", config.port);

    axum::serve(listener, router).await?;

    Ok(())
}
