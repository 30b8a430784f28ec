//! Financial metrics calculator
//!
//! Pure arithmetic over income, expenses and goals. Nothing here logs or
//! allocates beyond its return value. Every ratio with a zero denominator is
//! reported as `DivisionByZero`, and a figure that overflows to infinity is
//! reported as `InvalidInput`.

use crate::error::AdvisorError;
use crate::models::{
    BenchmarkRatio, BudgetMetrics, ExpenseBreakdown, FinancialProfile, Goal, GoalFeasibility,
    SpendingAnalysis, SpendingProfile,
};
use crate::Result;

pub const TOP_EXPENSE_LIMIT: usize = 5;

/// Categories classified as fixed costs (compared lowercased).
const FIXED_CATEGORIES: &[&str] = &["rent", "insurance", "loan_payment"];

/// (label, category, recommended max % of income)
const BENCHMARKS: &[(&str, &str, f64)] = &[
    ("Housing ratio", "rent", 30.0),
    ("Transportation", "transportation", 15.0),
    ("Food spending", "food", 12.0),
];

/// Share of total expenses held by one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percent: f64,
}

/// Expenses split into fixed and variable costs, each in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseSplit {
    pub fixed: Vec<(String, f64)>,
    pub variable: Vec<(String, f64)>,
}

impl ExpenseSplit {
    pub fn fixed_total(&self) -> f64 {
        self.fixed.iter().map(|(_, amount)| amount).sum()
    }

    pub fn variable_total(&self) -> f64 {
        self.variable.iter().map(|(_, amount)| amount).sum()
    }
}

pub fn total_expenses(expenses: &ExpenseBreakdown) -> f64 {
    expenses.iter().map(|(_, amount)| amount).sum()
}

/// Passes `value` through, failing when it is infinite or NaN.
pub fn ensure_finite(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AdvisorError::InvalidInput(format!(
            "{} is out of range",
            what
        )))
    }
}

/// [`total_expenses`], failing when the sum overflows.
pub fn checked_total_expenses(expenses: &ExpenseBreakdown) -> Result<f64> {
    ensure_finite("total expenses", total_expenses(expenses))
}

/// `part / whole × 100`, failing when `whole` is zero.
pub fn percent_of(part: f64, whole: f64, what: &str) -> Result<f64> {
    if whole == 0.0 {
        return Err(AdvisorError::DivisionByZero(format!(
            "{} is zero, cannot compute a percentage",
            what
        )));
    }
    ensure_finite("percentage", part / whole * 100.0)
}

impl BudgetMetrics {
    /// Fails with `InvalidInput` when a total or annual figure overflows.
    pub fn from_profile(profile: &FinancialProfile) -> Result<Self> {
        let total_expenses = checked_total_expenses(&profile.expenses)?;
        let disposable = ensure_finite("monthly disposable", profile.income - total_expenses)?;

        Ok(Self {
            total_expenses,
            annual_income: ensure_finite("annual income", profile.income * 12.0)?,
            annual_expenses: ensure_finite("annual expenses", total_expenses * 12.0)?,
            monthly_disposable: disposable,
            savings_potential: (disposable - profile.savings_goal).max(0.0),
        })
    }
}

impl SpendingAnalysis {
    /// Fails with `DivisionByZero` when income is zero and with
    /// `InvalidInput` when a total overflows.
    pub fn from_profile(profile: &SpendingProfile) -> Result<Self> {
        let total_expenses = checked_total_expenses(&profile.expenses)?;
        let surplus = ensure_finite("surplus", profile.income - total_expenses)?;
        let split = split_fixed_variable(&profile.expenses);
        let goals = goal_feasibility(surplus, &profile.goals);

        Ok(Self {
            total_expenses,
            surplus,
            savings_rate: savings_rate(profile.income, surplus)?,
            fixed_expenses: split.fixed_total(),
            variable_expenses: split.variable_total(),
            goals_achievable: goals_achievable(&goals),
            goals,
            benchmarks: benchmark_ratios(profile.income, &profile.expenses)?,
        })
    }
}

/// Percentage of total expenses per category, in input order.
pub fn expense_shares(expenses: &ExpenseBreakdown) -> Result<Vec<CategoryShare>> {
    let total = checked_total_expenses(expenses)?;
    if total == 0.0 {
        return Err(AdvisorError::DivisionByZero(
            "total expenses is zero, cannot compute category shares".to_string(),
        ));
    }

    Ok(expenses
        .iter()
        .map(|(category, amount)| CategoryShare {
            category: category.to_string(),
            amount,
            percent: amount / total * 100.0,
        })
        .collect())
}

/// The `limit` largest categories, largest first. Ties keep input order.
pub fn top_expenses(expenses: &ExpenseBreakdown, limit: usize) -> Result<Vec<CategoryShare>> {
    let mut shares = expense_shares(expenses)?;
    // sort_by is stable
    shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    shares.truncate(limit);
    Ok(shares)
}

pub fn is_fixed_category(category: &str) -> bool {
    let lowered = category.to_lowercase();
    FIXED_CATEGORIES.contains(&lowered.as_str())
}

pub fn split_fixed_variable(expenses: &ExpenseBreakdown) -> ExpenseSplit {
    let mut split = ExpenseSplit::default();

    for (category, amount) in expenses.iter() {
        let bucket = if is_fixed_category(category) {
            &mut split.fixed
        } else {
            &mut split.variable
        };
        bucket.push((category.to_string(), amount));
    }

    split
}

/// Rent, transportation and food as a percentage of income.
/// A missing category counts as zero.
pub fn benchmark_ratios(income: f64, expenses: &ExpenseBreakdown) -> Result<Vec<BenchmarkRatio>> {
    BENCHMARKS
        .iter()
        .map(|(label, category, recommended_max)| {
            let amount = expenses.get(category).unwrap_or(0.0);
            Ok(BenchmarkRatio {
                label: label.to_string(),
                category: category.to_string(),
                percent_of_income: percent_of(amount, income, "income")?,
                recommended_max: *recommended_max,
            })
        })
        .collect()
}

pub fn savings_rate(income: f64, surplus: f64) -> Result<f64> {
    percent_of(surplus, income, "income")
}

pub fn goal_feasibility(surplus: f64, goals: &[Goal]) -> Vec<GoalFeasibility> {
    goals
        .iter()
        .map(|goal| {
            let monthly_required = goal.monthly_required();
            GoalFeasibility {
                name: goal.name.clone(),
                amount: goal.amount,
                months: goal.months,
                monthly_required,
                achievable: surplus >= monthly_required,
            }
        })
        .collect()
}

/// AND across all goals; true when there are none.
pub fn goals_achievable(feasibility: &[GoalFeasibility]) -> bool {
    feasibility.iter().all(|goal| goal.achievable)
}
