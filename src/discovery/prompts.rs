//! Fixed instructions sent to the completion endpoint, one per stage.

use crate::discovery::models::UserIntentCategory;

pub const CLASSIFY_TEMPERATURE: f32 = 0.3;
pub const RECOMMEND_TEMPERATURE: f32 = 0.4;
pub const CARDS_TEMPERATURE: f32 = 0.6;

pub const CLASSIFY_SYSTEM_PROMPT: &str = "\
You are an expert at analyzing search queries for content (books, podcasts, hosts, articles). Your task is to:
1. Determine if the query is about a SPECIFIC item or GENERAL
2. If GENERAL, categorize the user intent into one of these categories:
   - problem_solving: User has a specific problem and believes content can provide solutions
   - exploration_discovery: User wants to explore within specific parameters
   - quote_concept_memory: User is touched by a specific concept/quote
   - plot_fragment_memory: User wants to relive a specific story fragment
   - character_scene_description: User has strong resonance with characters/worlds
   - emotional_theme: User seeks specific emotional experiences related to current life situation
   - comparative_search: User likes specific aspects of a work and wants similar variants

You MUST respond with valid JSON only. No other text.
Return a JSON object with:
- query_type: \"specific_item\" or \"general\"
- user_intent_category: (only if general) one of the categories above
- confidence_score: float between 0-1
- reasoning: explanation of your analysis";

pub const RECOMMEND_SYSTEM_PROMPT: &str = "\
You are a knowledgeable content curator. The user is asking about specific content (books, podcasts, etc.).
Provide a recommendation with title, creator, and detailed reasoning.

You MUST respond with valid JSON only. No other text.
Return JSON with: title, creator, reason, relevance_score (0-1)";

const GENERIC_FRAMING: &str = "Generate general content recommendations";

/// Category-specific framing phrase embedded in the card generation prompt.
/// `None` falls back to the generic phrase.
pub fn card_framing(category: Option<UserIntentCategory>) -> &'static str {
    let Some(category) = category else {
        return GENERIC_FRAMING;
    };
    match category {
        UserIntentCategory::ProblemSolving => {
            "Generate practical content recommendations (books, podcasts, articles) that solve real problems"
        }
        UserIntentCategory::ExplorationDiscovery => {
            "Generate content that offers new perspectives and discoveries"
        }
        UserIntentCategory::QuoteConceptMemory => {
            "Generate content cards with memorable quotes and concepts"
        }
        UserIntentCategory::PlotFragmentMemory => {
            "Generate cards focusing on specific story elements and plot points"
        }
        UserIntentCategory::CharacterSceneDescription => {
            "Generate cards highlighting character development and vivid scenes"
        }
        UserIntentCategory::EmotionalTheme => {
            "Generate emotionally resonant content that matches the user's current state"
        }
        UserIntentCategory::ComparativeSearch => {
            "Generate recommendations similar to what the user already likes"
        }
    }
}

pub fn card_system_prompt(category: Option<UserIntentCategory>) -> String {
    format!(
        "\
You are creating content cards for a search system.
Focus on: {}

Generate 1-5 content cards that form a COHESIVE PROGRESSION and are logically related to each other.
The cards should build upon each other or explore different aspects of the same topic.

Decision criteria for number of cards:
- 1 card: Very specific query with one clear answer
- 2-3 cards: Query with a few complementary perspectives
- 4-5 cards: Complex topic that benefits from multiple angles

Include diverse content types (books, podcasts, audiobooks, articles) when multiple cards are warranted.

You MUST respond with valid JSON only. No other text.
Return an array of objects with:
- type: EXACTLY one of: \"quote\", \"summary\", \"recommendation\", \"theme\"
- title: engaging title that relates to the overall theme
- description: compelling description (max 100 words) showing how this fits the progression
- source_title: (if applicable) content title - for podcasts use format \"Podcast Name\" or \"Episode Title\"
- source_creator: (if applicable) creator name - for podcasts use host names
- quoted_text: (only if type is \"quote\") the actual quote text
- location_label: (optional) string like \"Page 143\" or \"23:45\" for timestamps
- link: always use \"#\"

Important:
- Each card should logically connect to or build upon the others
- For podcasts, include words like \"Podcast\", \"Episode\", \"Interview\", \"Talk\" in the source_title
- location_label should be a string, not a number
- Ensure cards form a coherent learning journey or exploration path",
        card_framing(category)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const CATEGORIES: [UserIntentCategory; 7] = [
        UserIntentCategory::ProblemSolving,
        UserIntentCategory::ExplorationDiscovery,
        UserIntentCategory::QuoteConceptMemory,
        UserIntentCategory::PlotFragmentMemory,
        UserIntentCategory::CharacterSceneDescription,
        UserIntentCategory::EmotionalTheme,
        UserIntentCategory::ComparativeSearch,
    ];

    #[test]
    fn each_category_has_a_distinct_framing() {
        let framings: HashSet<&str> = CATEGORIES
            .iter()
            .map(|c| card_framing(Some(*c)))
            .collect();
        assert_eq!(framings.len(), CATEGORIES.len());
        assert!(!framings.contains(GENERIC_FRAMING));
    }

    #[test]
    fn missing_category_uses_generic_framing() {
        assert_eq!(card_framing(None), GENERIC_FRAMING);
    }

    #[test]
    fn card_prompt_embeds_the_framing() {
        let prompt = card_system_prompt(Some(UserIntentCategory::EmotionalTheme));
        assert!(prompt.contains(card_framing(Some(UserIntentCategory::EmotionalTheme))));
        assert!(prompt.contains("1-5 content cards"));
    }
}
