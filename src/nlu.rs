//! Mock natural-language analysis
//!
//! Stands in for a hosted NLU service. Sentiment and keywords are drawn at
//! random and carry no information about the text; only the entity checks
//! look at the input. Callers should treat the output as structurally valid
//! filler for prompt assembly and UI demos, nothing more.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Entity, EntityType, Keyword, NluAnalysis, Sentiment, SentimentLabel};

/// Fixed pool the keyword sample is drawn from.
pub const FINANCE_KEYWORDS: &[&str] = &[
    "money",
    "savings",
    "budget",
    "expenses",
    "income",
    "investment",
    "debt",
    "loan",
    "financial",
    "spending",
];

const KEYWORD_SAMPLE_SIZE: usize = 3;
const MAX_ENTITIES: usize = 3;

/// Mock analyzer. Randomness is supplied by the caller so tests can seed it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockNluAnalyzer;

impl MockNluAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze using the thread-local generator.
    pub fn analyze(&self, text: &str) -> NluAnalysis {
        self.analyze_with(text, &mut rand::thread_rng())
    }

    pub fn analyze_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> NluAnalysis {
        NluAnalysis {
            sentiment: random_sentiment(rng),
            keywords: random_keywords(rng),
            entities: extract_entities(text),
        }
    }
}

fn random_sentiment<R: Rng + ?Sized>(rng: &mut R) -> Sentiment {
    let label = SentimentLabel::ALL[rng.gen_range(0..SentimentLabel::ALL.len())];
    Sentiment {
        label,
        score: label.score(),
    }
}

fn random_keywords<R: Rng + ?Sized>(rng: &mut R) -> Vec<Keyword> {
    let picked: Vec<&str> = FINANCE_KEYWORDS
        .choose_multiple(rng, KEYWORD_SAMPLE_SIZE)
        .copied()
        .collect();

    picked
        .into_iter()
        .map(|text| Keyword {
            text: text.to_string(),
            relevance: round_to_cents(rng.gen_range(0.5..=1.0)),
        })
        .collect()
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Substring checks in fixed order: month, year, then money.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    let lowered = text.to_lowercase();
    let mut entities = Vec::with_capacity(MAX_ENTITIES);

    if lowered.contains("month") {
        entities.push(entity("month", EntityType::Time));
    }
    if lowered.contains("year") {
        entities.push(entity("year", EntityType::Time));
    }
    if text.contains('$') || lowered.contains("dollar") {
        entities.push(entity("dollar", EntityType::Money));
    }

    entities.truncate(MAX_ENTITIES);
    entities
}

fn entity(text: &str, entity_type: EntityType) -> Entity {
    Entity {
        text: text.to_string(),
        entity_type,
    }
}
