//! Keyword dispatch for messages the criteria pipeline does not claim.
//!
//! Rules are an explicit ordered table evaluated top to bottom with early
//! return. Jokes and greetings outrank criteria extraction; everything else
//! only fires when no criteria were found. Reordering the table changes
//! user-visible behaviour, so the precedence is pinned by tests.

use crate::catalog;
use crate::extractor;
use crate::models::{ChatReply, Criteria};
use crate::recommend::{self, Recommendation};
use rand::seq::SliceRandom;

/// Canonical category tags produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Joke,
    Greeting,
    FilteredMatch,
    FilteredNoMatch,
    Budget,
    Location,
    MoreRecommendations,
    GeneralKnowledge,
    General,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Joke => "joke",
            Category::Greeting => "greeting",
            Category::FilteredMatch => "filtered_match",
            Category::FilteredNoMatch => "filtered_no_match",
            Category::Budget => "budget",
            Category::Location => "location",
            Category::MoreRecommendations => "more_recommendations",
            Category::GeneralKnowledge => "general_knowledge",
            Category::General => "general",
        }
    }
}

const JOKES: [&str; 5] = [
    "Why did the real estate agent go to therapy? Because they had too many property issues! 🏠😄",
    "What do you call a real estate agent who's also a magician? A property wizard! ✨🏡",
    "Why don't houses ever get lonely? Because they always have great neighbors! 🏘️😊",
    "What's a real estate agent's favorite type of music? House music! 🎵🏠",
    "Why did the apartment break up with the house? Because it needed more space! 🏠💔",
];

const GREETING: &str = "Hi there! I'm your realestate.com.au AI assistant powered by Parlant. I'm here to help you find the perfect property! What are you looking for in your next home?";

const BUDGET_PROMPT: &str = "I'd be happy to help you find properties within your budget! What's your price range? I can show you everything from affordable apartments to luxury homes.";

const LOCATION_PROMPT: &str = "Great! Location is key when finding your perfect home. Which suburbs or areas are you interested in? I can show you properties in Melbourne, Sydney, Brisbane, and other major cities.";

const MORE_LISTINGS: &str = "Here are some additional properties that might interest you:";

const STREAM_PROCESSING_ANSWER: &str = "Apache Flink is a distributed stream processing framework for stateful computations over unbounded and bounded data streams. It's commonly used for real-time analytics, event-driven applications, and data pipelines. While I'm primarily a real estate assistant, I can help with general questions too! Is there anything about properties I can help you with?";

const REDIRECT: &str = "I'm primarily a real estate assistant, but I can help with general questions! However, my main expertise is helping you find the perfect property. What kind of home are you looking for?";

const SELF_DESCRIPTION: &str = "I'm doing great! I'm an AI assistant powered by Parlant's advanced property matching algorithms. I can help you find properties based on your budget, location, bedroom count, and property type. Just tell me what you're looking for!";

const DEFAULT_PROMPT: &str = "I understand you're looking for properties on realestate.com.au! I'm here to help you find the perfect home. Tell me about your preferences - what's your budget, how many bedrooms do you need, and what type of property interests you?";

#[derive(Debug, Clone, Copy)]
enum RuleAction {
    Joke,
    Greeting,
    BudgetPrompt,
    LocationPrompt,
    MoreListings,
    StreamProcessing,
    Redirect,
    SelfDescription,
}

struct Rule {
    keywords: &'static [&'static str],
    action: RuleAction,
}

impl Rule {
    fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|k| lower.contains(k))
    }
}

// Checked before criteria extraction.
const EARLY_RULES: &[Rule] = &[
    Rule {
        keywords: &["joke", "funny", "laugh"],
        action: RuleAction::Joke,
    },
    Rule {
        keywords: &["hello", "hi", "hey"],
        action: RuleAction::Greeting,
    },
];

// Checked only when the message carries no criteria.
const LATE_RULES: &[Rule] = &[
    Rule {
        keywords: &["budget", "price", "cost"],
        action: RuleAction::BudgetPrompt,
    },
    Rule {
        keywords: &["location", "suburb", "area"],
        action: RuleAction::LocationPrompt,
    },
    Rule {
        keywords: &["more", "recommend", "suggest"],
        action: RuleAction::MoreListings,
    },
    Rule {
        keywords: &["flink", "apache", "stream processing"],
        action: RuleAction::StreamProcessing,
    },
    Rule {
        keywords: &["what is", "tell me about", "explain"],
        action: RuleAction::Redirect,
    },
    Rule {
        keywords: &["how are you", "how do you work"],
        action: RuleAction::SelfDescription,
    },
];

/// Classify a message and produce the local (non-AI) reply.
pub fn respond(message: &str) -> ChatReply {
    let lower = message.to_lowercase();

    if let Some(rule) = EARLY_RULES.iter().find(|r| r.matches(&lower)) {
        return rule.action.run();
    }

    let criteria = extractor::extract(message);
    if !criteria.is_empty() {
        return recommendation_reply(&criteria);
    }

    if let Some(rule) = LATE_RULES.iter().find(|r| r.matches(&lower)) {
        return rule.action.run();
    }

    ChatReply {
        response: DEFAULT_PROMPT.to_string(),
        recommendations: catalog::listings()[..2].to_vec(),
        category: Category::General.label().to_string(),
    }
}

impl RuleAction {
    fn run(self) -> ChatReply {
        match self {
            RuleAction::Joke => {
                let joke = JOKES
                    .choose(&mut rand::thread_rng())
                    .copied()
                    .unwrap_or(JOKES[0]);
                text_reply(joke, Category::Joke)
            }
            RuleAction::Greeting => text_reply(GREETING, Category::Greeting),
            RuleAction::BudgetPrompt => text_reply(BUDGET_PROMPT, Category::Budget),
            RuleAction::LocationPrompt => text_reply(LOCATION_PROMPT, Category::Location),
            RuleAction::MoreListings => ChatReply {
                response: MORE_LISTINGS.to_string(),
                recommendations: catalog::listings()[..3].to_vec(),
                category: Category::MoreRecommendations.label().to_string(),
            },
            RuleAction::StreamProcessing => {
                text_reply(STREAM_PROCESSING_ANSWER, Category::GeneralKnowledge)
            }
            RuleAction::Redirect => text_reply(REDIRECT, Category::GeneralKnowledge),
            RuleAction::SelfDescription => text_reply(SELF_DESCRIPTION, Category::General),
        }
    }
}

fn text_reply(text: &str, category: Category) -> ChatReply {
    ChatReply {
        response: text.to_string(),
        recommendations: Vec::new(),
        category: category.label().to_string(),
    }
}

fn recommendation_reply(criteria: &Criteria) -> ChatReply {
    // The summary always describes the strict criteria, even when the
    // relaxed retry produced the listings.
    let summary = criteria_summary(criteria);
    match recommend::recommend(catalog::listings(), criteria) {
        Recommendation::Matches(found) => ChatReply {
            response: format!(
                "Perfect! I found properties that match your criteria:{}. Here are the best options:",
                summary
            ),
            recommendations: found,
            category: Category::FilteredMatch.label().to_string(),
        },
        Recommendation::Alternatives(alternatives) => ChatReply {
            response: format!(
                "I couldn't find any properties matching your criteria:{}. Let me show you some similar options:",
                summary
            ),
            recommendations: alternatives,
            category: Category::FilteredNoMatch.label().to_string(),
        },
    }
}

fn criteria_summary(criteria: &Criteria) -> String {
    let mut summary = String::new();
    if let Some(budget) = criteria.budget {
        summary.push_str(&format!(" under ${}", format_price(budget)));
    }
    if let Some(bedrooms) = criteria.bedrooms {
        let plural = if bedrooms > 1 { "s" } else { "" };
        summary.push_str(&format!(" with {} bedroom{}", bedrooms, plural));
    }
    if let Some(kind) = criteria.property_type {
        summary.push_str(&format!(" ({}s)", kind.label()));
    }
    summary
}

/// "1200000" -> "1,200,000"
fn format_price(amount: i64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
