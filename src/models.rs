//! Core data models for the finance advisor

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::AdvisorError;
use crate::Result;

//
// ================= Persona =================
//

/// Audience profile controlling tone and structure of generated text.
///
/// Parsing is case-insensitive; anything unrecognised falls back to
/// `General`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Persona {
    Student,
    Professional,
    #[default]
    General,
}

impl Persona {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "student" => Persona::Student,
            "professional" => Persona::Professional,
            _ => Persona::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Student => "student",
            Persona::Professional => "professional",
            Persona::General => "general",
        }
    }
}

impl From<String> for Persona {
    fn from(value: String) -> Self {
        Persona::parse(&value)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//
// ================= Expenses =================
//

/// Expense amounts keyed by category, in the order the caller supplied them.
///
/// Serialized as a JSON object. Key order survives a round trip, which the
/// prompt templates rely on for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseBreakdown {
    entries: Vec<(String, f64)>,
}

impl ExpenseBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a category. Replacing keeps the earlier position.
    pub fn insert(&mut self, category: impl Into<String>, amount: f64) {
        let category = category.into();
        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some(entry) => entry.1 = amount,
            None => self.entries.push((category, amount)),
        }
    }

    /// Exact-name lookup.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        for (category, amount) in self.iter() {
            if category.trim().is_empty() {
                return Err(AdvisorError::InvalidInput(
                    "expense category names must not be blank".to_string(),
                ));
            }
            ensure_non_negative(&format!("expense '{}'", category), amount)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ExpenseBreakdown {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut breakdown = ExpenseBreakdown::new();
        for (category, amount) in iter {
            breakdown.insert(category, amount);
        }
        breakdown
    }
}

impl Serialize for ExpenseBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, amount) in &self.entries {
            map.serialize_entry(category, amount)?;
        }
        map.end()
    }
}

struct ExpenseBreakdownVisitor;

impl<'de> Visitor<'de> for ExpenseBreakdownVisitor {
    type Value = ExpenseBreakdown;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of expense category to amount")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut breakdown = ExpenseBreakdown::new();
        while let Some((category, amount)) = access.next_entry::<String, f64>()? {
            breakdown.insert(category, amount);
        }
        Ok(breakdown)
    }
}

impl<'de> Deserialize<'de> for ExpenseBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(ExpenseBreakdownVisitor)
    }
}

//
// ================= Profiles =================
//

fn default_currency() -> String {
    "$".to_string()
}

/// Input of the budget-summary call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub income: f64,
    pub expenses: ExpenseBreakdown,
    pub savings_goal: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default, rename = "user_type", alias = "persona_type")]
    pub persona: Persona,
}

impl FinancialProfile {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("income", self.income)?;
        ensure_non_negative("savings_goal", self.savings_goal)?;
        self.expenses.validate()
    }
}

/// A savings target to be reached over a number of months.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub amount: f64,
    pub months: u32,
}

impl Goal {
    pub fn new(name: impl Into<String>, amount: f64, months: u32) -> Self {
        Self {
            name: name.into(),
            amount,
            months,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AdvisorError::InvalidInput(
                "goal name must not be blank".to_string(),
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(AdvisorError::InvalidInput(format!(
                "goal '{}' amount must be greater than zero",
                self.name
            )));
        }
        if self.months == 0 {
            return Err(AdvisorError::InvalidInput(format!(
                "goal '{}' must span at least one month",
                self.name
            )));
        }
        Ok(())
    }

    pub fn monthly_required(&self) -> f64 {
        self.amount / f64::from(self.months)
    }
}

/// Input of the spending-insights call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingProfile {
    pub income: f64,
    pub expenses: ExpenseBreakdown,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default, rename = "user_type", alias = "persona_type")]
    pub persona: Persona,
}

impl SpendingProfile {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("income", self.income)?;
        self.expenses.validate()?;
        self.goals.iter().try_for_each(Goal::validate)
    }
}

fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AdvisorError::InvalidInput(format!(
            "{} must be a finite number",
            field
        )));
    }
    if value < 0.0 {
        return Err(AdvisorError::InvalidInput(format!(
            "{} must not be negative",
            field
        )));
    }
    Ok(())
}

//
// ================= NLU =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn score(&self) -> f64 {
        match self {
            SentimentLabel::Positive => 0.8,
            SentimentLabel::Negative => 0.2,
            SentimentLabel::Neutral => 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Keyword {
    pub text: String,
    pub relevance: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    Time,
    Money,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub text: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

/// Output of the mock analyzer. Structurally valid, not a real signal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NluAnalysis {
    pub sentiment: Sentiment,
    pub keywords: Vec<Keyword>,
    pub entities: Vec<Entity>,
}

//
// ================= Derived Metrics =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetMetrics {
    pub total_expenses: f64,
    pub annual_income: f64,
    pub annual_expenses: f64,
    pub monthly_disposable: f64,
    pub savings_potential: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalFeasibility {
    pub name: String,
    pub amount: f64,
    pub months: u32,
    pub monthly_required: f64,
    pub achievable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkRatio {
    pub label: String,
    pub category: String,
    pub percent_of_income: f64,
    pub recommended_max: f64,
}

impl BenchmarkRatio {
    pub fn within_recommendation(&self) -> bool {
        self.percent_of_income < self.recommended_max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingAnalysis {
    pub total_expenses: f64,
    pub surplus: f64,
    pub savings_rate: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub goals: Vec<GoalFeasibility>,
    pub goals_achievable: bool,
    pub benchmarks: Vec<BenchmarkRatio>,
}

//
// ================= Results =================
//

/// Prompt, canned response and the figures derived along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedNarrative<M> {
    pub prompt: String,
    pub response: String,
    pub metrics: M,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResult {
    pub prompt: String,
    pub response: String,
    pub persona: Persona,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nlu_analysis: Option<NluAnalysis>,
}
