//! Persona-specific budget summary prompts
//!
//! Students get a simple, encouraging layout; every other persona gets the
//! professional one. Both render the same figures and differ only in wording
//! and in the narrative sections requested.

use super::format::{money, percent};
use crate::metrics::{ensure_finite, top_expenses, TOP_EXPENSE_LIMIT};
use crate::models::{BudgetMetrics, FinancialProfile, Persona};
use crate::Result;

/// A requested narrative section: title and what it should contain.
pub type Section = (&'static str, &'static str);

pub const STUDENT_SECTIONS: [Section; 5] = [
    ("Top Spending Categories", "list the 2 highest"),
    ("Money-Saving Tips", "3-4 practical suggestions"),
    ("Summary", "2-3 sentences about their financial situation"),
    ("Tips", "2-3 actionable next steps"),
    ("Conclusion", "encouraging closing statement"),
];

pub const PROFESSIONAL_SECTIONS: [Section; 5] = [
    ("Top 3 Spending Categories", "with strategic insights"),
    ("Optimization Strategies", "3-4 professional recommendations"),
    ("Financial Health Summary", "analytical overview"),
    ("Strategic Recommendations", "growth-focused advice"),
    ("Professional Takeaway", "key actionable insight"),
];

struct BudgetTemplate {
    heading: &'static str,
    snapshot_title: &'static str,
    disposable_label: &'static str,
    savings_label: &'static str,
    surplus_label: &'static str,
    allocation_title: &'static str,
    share_suffix: &'static str,
    sections_intro: &'static str,
    sections: &'static [Section],
    closing: &'static str,
}

const STUDENT_TEMPLATE: BudgetTemplate = BudgetTemplate {
    heading: "Create a student-friendly budget summary:",
    snapshot_title: "FINANCIAL SNAPSHOT:",
    disposable_label: "After Expenses",
    savings_label: "Savings Goal",
    surplus_label: "Surplus After Savings",
    allocation_title: "TOP SPENDING CATEGORIES:",
    share_suffix: "of expenses",
    sections_intro: "Please provide a summary with these 5 sections in order:",
    sections: &STUDENT_SECTIONS,
    closing: "Keep the language simple and encouraging for a student audience.",
};

const PROFESSIONAL_TEMPLATE: BudgetTemplate = BudgetTemplate {
    heading: "Create a professional budget summary with strategic analysis:",
    snapshot_title: "EXECUTIVE SUMMARY:",
    disposable_label: "Net Disposable Income",
    savings_label: "Target Savings",
    surplus_label: "Available Surplus",
    allocation_title: "EXPENSE ALLOCATION:",
    share_suffix: "of total expenses",
    sections_intro: "Provide analysis with these sections:",
    sections: &PROFESSIONAL_SECTIONS,
    closing: "Use professional language and focus on strategic financial planning.",
};

fn template_for(persona: Persona) -> &'static BudgetTemplate {
    match persona {
        Persona::Student => &STUDENT_TEMPLATE,
        Persona::Professional | Persona::General => &PROFESSIONAL_TEMPLATE,
    }
}

/// Section titles requested for a persona, in order.
pub fn sections_for(persona: Persona) -> Vec<&'static str> {
    template_for(persona).sections.iter().map(|(title, _)| *title).collect()
}

/// Fails with `DivisionByZero` when total expenses are zero.
pub fn build_budget_prompt(profile: &FinancialProfile) -> Result<String> {
    let metrics = BudgetMetrics::from_profile(profile)?;
    build_budget_prompt_with(profile, &metrics)
}

/// Renders the prompt from metrics the caller already computed.
pub fn build_budget_prompt_with(profile: &FinancialProfile, metrics: &BudgetMetrics) -> Result<String> {
    let template = template_for(profile.persona);
    let top = top_expenses(&profile.expenses, TOP_EXPENSE_LIMIT)?;
    let surplus = ensure_finite(
        "surplus after savings",
        metrics.monthly_disposable - profile.savings_goal,
    )?;
    let currency = profile.currency.as_str();

    let mut prompt = String::new();
    prompt.push_str(template.heading);
    prompt.push_str("\n\n");

    prompt.push_str(template.snapshot_title);
    prompt.push('\n');
    let snapshot = [
        ("Monthly Income", profile.income),
        ("Annual Income", metrics.annual_income),
        ("Total Monthly Expenses", metrics.total_expenses),
        (template.disposable_label, metrics.monthly_disposable),
        (template.savings_label, profile.savings_goal),
        (template.surplus_label, surplus),
    ];
    for (label, value) in snapshot {
        prompt.push_str(&format!("- {}: {}\n", label, money(currency, value)));
    }
    prompt.push('\n');

    prompt.push_str(template.allocation_title);
    prompt.push('\n');
    for share in &top {
        prompt.push_str(&format!(
            "- {}: {} ({}% {})\n",
            share.category,
            money(currency, share.amount),
            percent(share.percent),
            template.share_suffix
        ));
    }
    prompt.push('\n');

    prompt.push_str(template.sections_intro);
    prompt.push('\n');
    for (i, (title, guidance)) in template.sections.iter().enumerate() {
        prompt.push_str(&format!("{}. **{}** ({})\n", i + 1, title, guidance));
    }
    prompt.push('\n');

    prompt.push_str(template.closing);
    prompt.push('\n');

    Ok(prompt)
}
