use finance_advisor::{
    models::{ExpenseBreakdown, FinancialProfile, Goal, Persona, SpendingProfile},
    FinanceAdvisor,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_section<T: Serialize>(title: &str, value: &T) -> finance_advisor::Result<()> {
    println!("\n=== {} ===", title);
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn sample_expenses() -> ExpenseBreakdown {
    [
        ("rent", 1200.0),
        ("food", 400.0),
        ("transportation", 300.0),
        ("utilities", 150.0),
        ("entertainment", 200.0),
        ("shopping", 150.0),
    ]
    .into_iter()
    .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    info!("Personal Finance Advisor demo starting");

    let advisor = FinanceAdvisor::new();

    let analysis = advisor.analyze_text("I spend $100 a month on coffee and worry about next year")?;
    print_section("NLU ANALYSIS", &analysis)?;

    let advice = advisor.generate_advice(
        "How can I save money while paying off student loans?",
        Persona::Student,
        true,
    )?;
    print_section("ADVICE", &advice)?;

    let profile = FinancialProfile {
        income: 4000.0,
        expenses: sample_expenses(),
        savings_goal: 500.0,
        currency: "$".to_string(),
        persona: Persona::Student,
    };
    let summary = advisor.build_budget_summary(&profile)?;
    print_section("BUDGET SUMMARY", &summary)?;

    let mut expenses = sample_expenses();
    expenses.insert("insurance", 1000.0);
    let spending = SpendingProfile {
        income: 5000.0,
        expenses,
        goals: vec![
            Goal::new("Emergency Fund", 10000.0, 12),
            Goal::new("Vacation", 3000.0, 6),
        ],
        persona: Persona::Professional,
    };
    let insights = advisor.build_spending_insights(&spending)?;
    print_section("SPENDING INSIGHTS", &insights)?;

    Ok(())
}
