//! Finance advisor service
//!
//! The four calls the HTTP layer exposes:
//! ANALYZE TEXT · GENERATE ADVICE · BUDGET SUMMARY · SPENDING INSIGHTS
//!
//! Input is validated up front and failures are returned, never logged here.

use rand::Rng;

use crate::error::AdvisorError;
use crate::generator::MockGenerator;
use crate::models::{
    AdviceResult, BudgetMetrics, FinancialProfile, GeneratedNarrative, NluAnalysis, Persona,
    SpendingAnalysis, SpendingProfile,
};
use crate::nlu::MockNluAnalyzer;
use crate::prompts::{
    build_budget_prompt_with, build_prompt_with_nlu, build_simple_prompt, build_spending_insight_prompt,
};
use crate::Result;

pub type BudgetSummary = GeneratedNarrative<BudgetMetrics>;
pub type SpendingInsights = GeneratedNarrative<SpendingAnalysis>;

#[derive(Debug, Clone, Default)]
pub struct FinanceAdvisor {
    analyzer: MockNluAnalyzer,
    generator: MockGenerator,
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdvisorError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

impl FinanceAdvisor {
    pub fn new() -> Self {
        Self {
            analyzer: MockNluAnalyzer::new(),
            generator: MockGenerator::new(),
        }
    }

    pub fn analyze_text(&self, text: &str) -> Result<NluAnalysis> {
        self.analyze_text_with(text, &mut rand::thread_rng())
    }

    pub fn analyze_text_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<NluAnalysis> {
        require_text("text", text)?;
        Ok(self.analyzer.analyze_with(text, rng))
    }

    /// Answer a free-form question. With `enrich` the question is analyzed
    /// first and the analysis both shapes the prompt and is returned.
    pub fn generate_advice(&self, question: &str, persona: Persona, enrich: bool) -> Result<AdviceResult> {
        self.generate_advice_with(question, persona, enrich, &mut rand::thread_rng())
    }

    pub fn generate_advice_with<R: Rng + ?Sized>(
        &self,
        question: &str,
        persona: Persona,
        enrich: bool,
        rng: &mut R,
    ) -> Result<AdviceResult> {
        require_text("question", question)?;

        let (prompt, nlu_analysis) = if enrich {
            let analysis = self.analyzer.analyze_with(question, rng);
            (build_prompt_with_nlu(question, persona, &analysis), Some(analysis))
        } else {
            (build_simple_prompt(question, persona), None)
        };

        let response = self.generator.generate(&prompt);

        Ok(AdviceResult {
            prompt,
            response,
            persona,
            nlu_analysis,
        })
    }

    pub fn build_budget_summary(&self, profile: &FinancialProfile) -> Result<BudgetSummary> {
        profile.validate()?;

        let metrics = BudgetMetrics::from_profile(profile)?;
        let prompt = build_budget_prompt_with(profile, &metrics)?;
        let response = self.generator.generate(&prompt);

        Ok(GeneratedNarrative {
            prompt,
            response,
            metrics,
        })
    }

    pub fn build_spending_insights(&self, profile: &SpendingProfile) -> Result<SpendingInsights> {
        profile.validate()?;

        let analysis = SpendingAnalysis::from_profile(profile)?;
        let prompt = build_spending_insight_prompt(profile, &analysis);
        let response = self.generator.generate(&prompt);

        Ok(GeneratedNarrative {
            prompt,
            response,
            metrics: analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::NarrativeKind;
    use crate::models::{ExpenseBreakdown, Goal};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn expenses() -> ExpenseBreakdown {
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

    fn budget_profile(persona: Persona) -> FinancialProfile {
        FinancialProfile {
            income: 4000.0,
            expenses: expenses(),
            savings_goal: 500.0,
            currency: "$".to_string(),
            persona,
        }
    }

    #[test]
    fn test_enriched_advice_returns_analysis_used_in_prompt() {
        let advisor = FinanceAdvisor::new();
        let mut rng = StdRng::seed_from_u64(99);
        let result = advisor
            .generate_advice_with("How do I save $100 each month?", Persona::Student, true, &mut rng)
            .unwrap();

        let analysis = result.nlu_analysis.expect("enriched advice carries analysis");
        for keyword in &analysis.keywords {
            assert!(result.prompt.contains(&keyword.text));
        }
        assert!(result.prompt.contains("Important details: month, dollar"));
        assert_eq!(result.response, NarrativeKind::FinancialQuestion.text());
    }

    #[test]
    fn test_simple_advice_has_no_analysis() {
        let advisor = FinanceAdvisor::new();
        let result = advisor
            .generate_advice("Should I pay off debt first?", Persona::Professional, false)
            .unwrap();

        assert!(result.nlu_analysis.is_none());
        assert!(result.prompt.starts_with("You are a financial advisor for working professionals."));
        assert_eq!(result.response, NarrativeKind::FinancialQuestion.text());
    }

    #[test]
    fn test_blank_input_rejected() {
        let advisor = FinanceAdvisor::new();

        assert!(matches!(advisor.analyze_text("   "), Err(AdvisorError::InvalidInput(_))));
        assert!(matches!(
            advisor.generate_advice("", Persona::General, true),
            Err(AdvisorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_budget_summary_for_each_persona_dispatches_to_budget_narrative() {
        let advisor = FinanceAdvisor::new();

        for persona in [Persona::Student, Persona::Professional, Persona::General] {
            let summary = advisor.build_budget_summary(&budget_profile(persona)).unwrap();
            assert_eq!(summary.response, NarrativeKind::BudgetSummary.text());
            assert_eq!(summary.metrics.annual_income, 48000.0);
            assert_eq!(summary.metrics.monthly_disposable, 1600.0);
            assert_eq!(summary.metrics.savings_potential, 1100.0);
        }
    }

    #[test]
    fn test_budget_summary_response_independent_of_figures() {
        let advisor = FinanceAdvisor::new();
        let mut richer = budget_profile(Persona::Student);
        richer.income = 12000.0;

        let a = advisor.build_budget_summary(&budget_profile(Persona::Student)).unwrap();
        let b = advisor.build_budget_summary(&richer).unwrap();

        assert_ne!(a.prompt, b.prompt);
        assert_eq!(a.response, b.response);
    }

    #[test]
    fn test_budget_summary_validation() {
        let advisor = FinanceAdvisor::new();

        let mut negative = budget_profile(Persona::General);
        negative.savings_goal = -10.0;
        assert!(matches!(
            advisor.build_budget_summary(&negative),
            Err(AdvisorError::InvalidInput(_))
        ));

        let mut empty = budget_profile(Persona::General);
        empty.expenses = ExpenseBreakdown::new();
        assert!(matches!(
            advisor.build_budget_summary(&empty),
            Err(AdvisorError::DivisionByZero(_))
        ));

        let mut huge = budget_profile(Persona::General);
        huge.income = 1e308;
        huge.expenses = [("a", 1e308), ("b", 1e308)].into_iter().collect();
        assert!(matches!(
            advisor.build_budget_summary(&huge),
            Err(AdvisorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_spending_insights() {
        let advisor = FinanceAdvisor::new();
        let mut expenses = expenses();
        expenses.insert("insurance", 1000.0);
        let profile = SpendingProfile {
            income: 5000.0,
            expenses,
            goals: vec![
                Goal::new("Emergency Fund", 10000.0, 12),
                Goal::new("Vacation", 3000.0, 6),
            ],
            persona: Persona::Professional,
        };

        let insights = advisor.build_spending_insights(&profile).unwrap();

        assert_eq!(insights.response, NarrativeKind::SpendingInsights.text());
        assert_eq!(insights.metrics.surplus, 1600.0);
        assert!(insights.metrics.goals_achievable);
        assert!(insights.prompt.contains("- Vacation: $3000 in 6 months ($500.00/month) - Achievable: Yes"));
    }

    #[test]
    fn test_spending_insights_rejects_bad_goal() {
        let advisor = FinanceAdvisor::new();
        let profile = SpendingProfile {
            income: 5000.0,
            expenses: expenses(),
            goals: vec![Goal::new("Car", 8000.0, 0)],
            persona: Persona::General,
        };

        assert!(matches!(
            advisor.build_spending_insights(&profile),
            Err(AdvisorError::InvalidInput(_))
        ));
    }
}
