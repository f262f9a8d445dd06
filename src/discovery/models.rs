use serde::{Deserialize, Serialize};

/// Non-actionable link returned on every generated card.
pub const PLACEHOLDER_LINK: &str = "#";

/// Words in a title that mark a card as playable audio content.
const AUDIO_CUES: [&str; 5] = ["podcast", "episode", "interview", "talk", "audio"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    SpecificItem,
    General,
}

impl QueryType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "specific_item" => Some(Self::SpecificItem),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserIntentCategory {
    ProblemSolving,
    ExplorationDiscovery,
    QuoteConceptMemory,
    PlotFragmentMemory,
    CharacterSceneDescription,
    EmotionalTheme,
    ComparativeSearch,
}

impl UserIntentCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "problem_solving" => Some(Self::ProblemSolving),
            "exploration_discovery" => Some(Self::ExplorationDiscovery),
            "quote_concept_memory" => Some(Self::QuoteConceptMemory),
            "plot_fragment_memory" => Some(Self::PlotFragmentMemory),
            "character_scene_description" => Some(Self::CharacterSceneDescription),
            "emotional_theme" => Some(Self::EmotionalTheme),
            "comparative_search" => Some(Self::ComparativeSearch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProblemSolving => "problem_solving",
            Self::ExplorationDiscovery => "exploration_discovery",
            Self::QuoteConceptMemory => "quote_concept_memory",
            Self::PlotFragmentMemory => "plot_fragment_memory",
            Self::CharacterSceneDescription => "character_scene_description",
            Self::EmotionalTheme => "emotional_theme",
            Self::ComparativeSearch => "comparative_search",
        }
    }
}

/// Card kinds the generation prompt asks for, plus `podcast` and `error`,
/// which only the rendering style map produces today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Quote,
    Summary,
    Recommendation,
    Theme,
    Podcast,
    Error,
}

impl CardKind {
    pub const ALL: [CardKind; 6] = [
        Self::Quote,
        Self::Summary,
        Self::Recommendation,
        Self::Theme,
        Self::Podcast,
        Self::Error,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "quote" => Some(Self::Quote),
            "summary" => Some(Self::Summary),
            "recommendation" => Some(Self::Recommendation),
            "theme" => Some(Self::Theme),
            "podcast" => Some(Self::Podcast),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Summary => "summary",
            Self::Recommendation => "recommendation",
            Self::Theme => "theme",
            Self::Podcast => "podcast",
            Self::Error => "error",
        }
    }

    /// Rendering metadata for this kind. The match is exhaustive, so every
    /// kind the parser can produce has a defined style.
    pub fn style(&self) -> CardStyle {
        match self {
            Self::Quote => CardStyle {
                icon: "💬",
                accent: "#2383e2",
                label: "Quote",
            },
            Self::Summary => CardStyle {
                icon: "📄",
                accent: "#10b981",
                label: "Summary",
            },
            Self::Recommendation => CardStyle {
                icon: "⭐",
                accent: "#8b5cf6",
                label: "Recommendation",
            },
            Self::Theme => CardStyle {
                icon: "🎭",
                accent: "#f59e0b",
                label: "Theme",
            },
            Self::Podcast => CardStyle {
                icon: "🎧",
                accent: "#e74c3c",
                label: "Podcast",
            },
            Self::Error => CardStyle {
                icon: "⚠️",
                accent: "#ef4444",
                label: "Error",
            },
        }
    }
}

/// Display hints for one card kind, served read-only to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CardStyle {
    pub icon: &'static str,
    pub accent: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnalysis {
    pub query_type: QueryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_category: Option<UserIntentCategory>,
    pub confidence_score: f32,
    pub reasoning: String,
}

impl QueryAnalysis {
    /// Fixed result used when classification fails for any reason.
    pub fn fallback(reason: &str) -> Self {
        Self {
            query_type: QueryType::General,
            intent_category: Some(UserIntentCategory::ExplorationDiscovery),
            confidence_score: 0.5,
            reasoning: format!("Error in analysis: {}", reason),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecommendation {
    pub title: String,
    pub creator: String,
    pub reason: String,
    pub relevance_score: f32,
}

impl ItemRecommendation {
    /// Sentinel returned when the recommendation stage fails.
    pub fn fallback(reason: &str) -> Self {
        Self {
            title: "Content Analysis Error".to_string(),
            creator: "System".to_string(),
            reason: format!("Unable to analyze: {}", reason),
            relevance_score: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCard {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_label: Option<String>,
    #[serde(default = "default_link")]
    pub link: String,
}

fn default_link() -> String {
    PLACEHOLDER_LINK.to_string()
}

impl ContentCard {
    /// Single card returned when generation fails for any reason.
    pub fn fallback() -> Self {
        Self {
            kind: CardKind::Recommendation,
            title: "Content Discovery".to_string(),
            description: "We're finding the best content for your query. \
                Please try again or refine your search."
                .to_string(),
            source_title: None,
            source_creator: None,
            quoted_text: None,
            location_label: None,
            link: PLACEHOLDER_LINK.to_string(),
        }
    }

    /// True when the title or source title carries an audio medium cue, so
    /// the presentation layer can offer playback.
    pub fn is_playable(&self) -> bool {
        let haystacks = [Some(self.title.as_str()), self.source_title.as_deref()];
        haystacks.into_iter().flatten().any(|text| {
            let lower = text.to_lowercase();
            AUDIO_CUES.iter().any(|cue| lower.contains(cue))
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub analysis: QueryAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<ItemRecommendation>,
    pub cards: Vec<ContentCard>,
}

/// Descriptive record for the not-yet-built semantic search capability.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderFeature {
    pub name: String,
    pub description: String,
    pub status: String,
    pub estimated_completion: String,
    pub preview: FeaturePreview,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturePreview {
    pub similarity_threshold: f32,
    pub embedding_dimensions: u32,
    pub indexed_titles: u32,
    pub search_modes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_kind_uses_type_on_the_wire() {
        let card: ContentCard =
            serde_json::from_str(r#"{"type": "quote", "title": "T", "description": "D", "quoted_text": "Q"}"#)
                .expect("card should parse");
        assert_eq!(card.kind, CardKind::Quote);
        assert_eq!(card.link, PLACEHOLDER_LINK);
        assert!(card.source_title.is_none());
    }

    #[test]
    fn enum_parse_matches_serde_names() {
        for kind in CardKind::ALL {
            assert_eq!(CardKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(CardKind::parse("banana"), None);
        assert_eq!(QueryType::parse("specific_item"), Some(QueryType::SpecificItem));
        assert_eq!(QueryType::parse("specific_book"), None);
        assert_eq!(
            UserIntentCategory::parse("emotional_theme"),
            Some(UserIntentCategory::EmotionalTheme)
        );
    }

    #[test]
    fn every_card_kind_has_a_style() {
        for kind in CardKind::ALL {
            let style = kind.style();
            assert!(!style.icon.is_empty());
            assert!(style.accent.starts_with('#'));
            assert!(!style.label.is_empty());
        }
    }

    #[test]
    fn audio_cues_mark_cards_playable() {
        let mut card = ContentCard::fallback();
        assert!(!card.is_playable());

        card.title = "The Tim Ferriss Show — Episode 512".to_string();
        assert!(card.is_playable());

        card.title = "Deep Work".to_string();
        card.source_title = Some("Hidden Brain Podcast".to_string());
        assert!(card.is_playable());
    }

    #[test]
    fn fallback_values_are_deterministic() {
        let analysis = QueryAnalysis::fallback("boom");
        assert_eq!(analysis.query_type, QueryType::General);
        assert_eq!(
            analysis.intent_category,
            Some(UserIntentCategory::ExplorationDiscovery)
        );
        assert_eq!(analysis.confidence_score, 0.5);
        assert!(analysis.reasoning.contains("boom"));

        let recommendation = ItemRecommendation::fallback("boom");
        assert_eq!(recommendation.title, "Content Analysis Error");
        assert_eq!(recommendation.creator, "System");
        assert_eq!(recommendation.relevance_score, 0.0);

        let card = ContentCard::fallback();
        assert_eq!(card.kind, CardKind::Recommendation);
        assert!(!card.description.is_empty());
        assert_eq!(card.link, PLACEHOLDER_LINK);
    }
}
