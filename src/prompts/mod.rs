//! Prompt construction
//!
//! Turns questions and financial figures into the prompt text handed to the
//! generator. Everything here is plain string assembly: identical inputs give
//! identical prompts. The only randomness enters through an `NluAnalysis`
//! the caller has already drawn.
//!
//! Each prompt carries the phrase the generator dispatches on
//! ("Financial Question", "budget summary", "spending insights").

pub mod budget;
pub mod format;
pub mod insights;

pub use budget::{build_budget_prompt, build_budget_prompt_with};
pub use insights::build_spending_insight_prompt;

use crate::models::{NluAnalysis, Persona, SentimentLabel};

const SAFETY_INSTRUCTION: &str = "Provide clear, actionable financial advice. Focus only on personal finance topics and avoid medical, legal, or therapeutic advice.";

const SIMPLE_CLOSING: &str = "Please respond clearly and concisely with actionable financial advice. Keep your response focused on personal finance topics only.";

/// Opening sentence for simple-mode prompts.
fn persona_context(persona: Persona) -> &'static str {
    match persona {
        Persona::Student => "You are a helpful financial advisor speaking to a college student. Use simple language and focus on practical, low-cost solutions.",
        Persona::Professional => "You are a financial advisor for working professionals. Provide strategic advice and consider more complex financial instruments.",
        Persona::General => "You are a helpful personal finance assistant. Provide clear, actionable advice.",
    }
}

/// Audience line for NLU-enriched prompts.
fn persona_instruction(persona: Persona) -> &'static str {
    match persona {
        Persona::Student => "Tailor your advice for a college student with limited income and simple financial needs.",
        Persona::Professional => "Provide advice suitable for a working professional with more complex financial goals.",
        Persona::General => "Provide advice suitable for the general population.",
    }
}

fn sentiment_guidance(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Negative => "The user seems concerned or stressed about their financial situation. Provide reassuring and supportive advice.",
        SentimentLabel::Positive => "The user appears optimistic about their financial situation. Provide encouraging guidance to maintain their momentum.",
        SentimentLabel::Neutral => "Provide balanced and objective financial advice.",
    }
}

/// Prompt without NLU enrichment.
pub fn build_simple_prompt(question: &str, persona: Persona) -> String {
    format!(
        "{}\n\nUser Financial Question: {}\n\n{}\n",
        persona_context(persona),
        question,
        SIMPLE_CLOSING
    )
}

/// Everything an NLU-enriched prompt is rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptContext {
    pub persona_instruction: &'static str,
    pub sentiment_guidance: &'static str,
    pub keyword_summary: String,
    pub entity_summary: Option<String>,
    pub question: String,
}

impl PromptContext {
    pub fn new(question: &str, persona: Persona, analysis: &NluAnalysis) -> Self {
        let keyword_summary = if analysis.keywords.is_empty() {
            "General financial inquiry".to_string()
        } else {
            let keywords: Vec<&str> = analysis.keywords.iter().map(|k| k.text.as_str()).collect();
            format!("Key topics mentioned: {}", keywords.join(", "))
        };

        let entity_summary = if analysis.entities.is_empty() {
            None
        } else {
            let entities: Vec<&str> = analysis.entities.iter().map(|e| e.text.as_str()).collect();
            Some(format!("Important details: {}", entities.join(", ")))
        };

        Self {
            persona_instruction: persona_instruction(persona),
            sentiment_guidance: sentiment_guidance(analysis.sentiment.label),
            keyword_summary,
            entity_summary,
            question: question.to_string(),
        }
    }

    pub fn render(self) -> String {
        let mut prompt = format!(
            "You are a personal finance assistant. {}\n\n{}\n\nContext: {}\n",
            self.sentiment_guidance, self.persona_instruction, self.keyword_summary
        );
        if let Some(entities) = &self.entity_summary {
            prompt.push_str(entities);
            prompt.push('\n');
        }
        prompt.push_str(&format!(
            "\nUser Financial Question: {}\n\n{}\n",
            self.question, SAFETY_INSTRUCTION
        ));
        prompt
    }
}

/// Prompt shaped by a prior NLU analysis of the question.
pub fn build_prompt_with_nlu(question: &str, persona: Persona, analysis: &NluAnalysis) -> String {
    PromptContext::new(question, persona, analysis).render()
}
