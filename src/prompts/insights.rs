//! Spending insight prompt

use super::format::{amount, percent};
use crate::metrics::split_fixed_variable;
use crate::models::{SpendingAnalysis, SpendingProfile};

pub const INSIGHT_SECTIONS: [(&str, &str); 8] = [
    ("Spending Pattern Analysis", "Fixed vs Variable breakdown"),
    ("Category Deep Dive", "Needs vs Wants classification"),
    ("Benchmark Comparison", "How expenses compare to recommended percentages"),
    ("Goal Feasibility", "Analysis of financial goals achievability"),
    ("Risk Assessment", "Identify concerning spending ratios"),
    ("Optimization Opportunities", "Specific areas for improvement"),
    ("Action Plan", "3-4 concrete next steps"),
    ("Long-term Strategy", "Forward-looking recommendations"),
];

fn dollars(value: f64) -> String {
    format!("${}", amount(value))
}

fn push_category_lines(prompt: &mut String, entries: &[(String, f64)]) {
    if entries.is_empty() {
        prompt.push_str("  - None\n");
    }
    for (category, value) in entries {
        prompt.push_str(&format!("  - {}: {}\n", category, dollars(*value)));
    }
}

/// Renders the figures in `analysis`, which must have been derived from
/// `profile`.
pub fn build_spending_insight_prompt(profile: &SpendingProfile, analysis: &SpendingAnalysis) -> String {
    let split = split_fixed_variable(&profile.expenses);
    let mut prompt = format!(
        "Generate comprehensive spending insights for a {}:\n\n# FINANCIAL DATA ANALYSIS\n\n",
        profile.persona
    );

    prompt.push_str("## Income & Expense Overview\n");
    prompt.push_str(&format!("- Monthly Income: {}\n", dollars(profile.income)));
    prompt.push_str(&format!(
        "- Total Monthly Expenses: {}\n",
        dollars(analysis.total_expenses)
    ));
    prompt.push_str(&format!("- Monthly Surplus: {}\n", dollars(analysis.surplus)));
    prompt.push_str(&format!("- Savings Rate: {}%\n\n", percent(analysis.savings_rate)));

    prompt.push_str("## Expense Breakdown\n");
    prompt.push_str(&format!(
        "Fixed Expenses ({}):\n",
        dollars(analysis.fixed_expenses)
    ));
    push_category_lines(&mut prompt, &split.fixed);
    prompt.push_str(&format!(
        "\nVariable Expenses ({}):\n",
        dollars(analysis.variable_expenses)
    ));
    push_category_lines(&mut prompt, &split.variable);
    prompt.push('\n');

    prompt.push_str("## Financial Goals\n");
    if analysis.goals.is_empty() {
        prompt.push_str("- No specific goals provided\n");
    }
    for goal in &analysis.goals {
        prompt.push_str(&format!(
            "- {}: ${} in {} months (${:.2}/month) - Achievable: {}\n",
            goal.name,
            goal.amount,
            goal.months,
            goal.monthly_required,
            if goal.achievable { "Yes" } else { "No" }
        ));
    }
    prompt.push('\n');

    prompt.push_str("## Benchmarks & Risk Analysis\n");
    for ratio in &analysis.benchmarks {
        prompt.push_str(&format!(
            "- {}: {}% (recommended: <{:.0}%)\n",
            ratio.label,
            percent(ratio.percent_of_income),
            ratio.recommended_max
        ));
    }
    prompt.push('\n');

    prompt.push_str("Provide detailed analysis in these 8 structured sections:\n\n");
    for (i, (title, focus)) in INSIGHT_SECTIONS.iter().enumerate() {
        prompt.push_str(&format!("{}. **{}** - {}\n", i + 1, title, focus));
    }
    prompt.push_str("\nUse specific numbers from the data and provide actionable insights.\n");

    prompt
}
