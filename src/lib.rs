//! Personal Finance Advisor
//!
//! A small backend that turns financial figures and questions into
//! structured prompts and answers them with a mock generator:
//! - Deterministic metrics (totals, shares, ratios, goal feasibility)
//! - Mock NLU analysis with an injectable random source
//! - Persona-aware prompt templates
//! - Keyword-dispatched canned narratives behind a load-once model
//!
//! FLOW:
//! INPUT → VALIDATE → METRICS / NLU → PROMPT → GENERATE → RESPOND

pub mod advisor;
pub mod api;
pub mod config;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod nlu;
pub mod prompts;

pub use error::Result;

// Re-export common types
pub use advisor::FinanceAdvisor;
pub use models::*;
