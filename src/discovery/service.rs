//! Two-stage discovery workflow: classify the query, then generate either a
//! single recommendation or an ordered card set. Every stage catches its own
//! errors and substitutes the fixed fallback value, so callers always get a
//! fully-typed result.

use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::discovery::models::{
    CardKind, ContentCard, FeaturePreview, ItemRecommendation, PlaceholderFeature, QueryAnalysis,
    QueryType, SearchResponse, UserIntentCategory, PLACEHOLDER_LINK,
};
use crate::discovery::prompts;
use crate::llm::{strip_code_fence, ChatClient, LlmError};

pub const MAX_CARDS: usize = 5;

#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("malformed model reply: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unknown {field} value '{value}'")]
    UnknownValue { field: &'static str, value: String },
    #[error("missing or empty field '{0}'")]
    MissingField(&'static str),
    #[error("model returned no cards")]
    EmptyCardSet,
}

/// Raw classification reply before enum validation.
#[derive(Deserialize)]
struct AnalysisReply {
    query_type: String,
    #[serde(default)]
    user_intent_category: Option<String>,
    confidence_score: f32,
    reasoning: String,
}

#[derive(Deserialize)]
struct RecommendationReply {
    title: String,
    creator: String,
    reason: String,
    relevance_score: f32,
}

#[derive(Deserialize)]
struct CardReply {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    description: String,
    #[serde(default)]
    source_title: Option<String>,
    #[serde(default)]
    source_creator: Option<String>,
    #[serde(default)]
    quoted_text: Option<String>,
    #[serde(default)]
    location_label: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

pub struct DiscoveryService {
    llm: ChatClient,
}

impl DiscoveryService {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            llm: ChatClient::new(config)?,
        })
    }

    /// Process a search query end-to-end: classify, then branch on the
    /// query type. Exactly one of recommendation/cards is populated.
    pub async fn process_query(&self, query: &str) -> SearchResponse {
        let analysis = self.analyze_query(query).await;

        match analysis.query_type {
            QueryType::SpecificItem => {
                let recommendation = self.recommend_item(query).await;
                SearchResponse {
                    analysis,
                    recommendation: Some(recommendation),
                    cards: Vec::new(),
                }
            }
            QueryType::General => {
                let cards = self.generate_cards(query, analysis.intent_category).await;
                SearchResponse {
                    analysis,
                    recommendation: None,
                    cards,
                }
            }
        }
    }

    /// Classify a query. Never fails: any error becomes the fixed fallback
    /// analysis (general / exploration_discovery / 0.5).
    pub async fn analyze_query(&self, query: &str) -> QueryAnalysis {
        match self.try_analyze(query).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!("query analysis failed: {}", e);
                QueryAnalysis::fallback(&e.to_string())
            }
        }
    }

    async fn try_analyze(&self, query: &str) -> Result<QueryAnalysis, StageError> {
        let user = format!("Analyze this query: '{}'", query);
        let reply = self
            .llm
            .complete(
                prompts::CLASSIFY_SYSTEM_PROMPT,
                &user,
                prompts::CLASSIFY_TEMPERATURE,
            )
            .await?;

        let raw: AnalysisReply = serde_json::from_str(strip_code_fence(&reply))?;
        validate_analysis(raw)
    }

    /// Produce one recommendation for a specific-item query. Never fails:
    /// any error becomes the sentinel recommendation.
    pub async fn recommend_item(&self, query: &str) -> ItemRecommendation {
        match self.try_recommend(query).await {
            Ok(recommendation) => recommendation,
            Err(e) => {
                tracing::warn!("recommendation generation failed: {}", e);
                ItemRecommendation::fallback(&e.to_string())
            }
        }
    }

    async fn try_recommend(&self, query: &str) -> Result<ItemRecommendation, StageError> {
        let reply = self
            .llm
            .complete(
                prompts::RECOMMEND_SYSTEM_PROMPT,
                query,
                prompts::RECOMMEND_TEMPERATURE,
            )
            .await?;

        let raw: RecommendationReply = serde_json::from_str(strip_code_fence(&reply))?;
        Ok(ItemRecommendation {
            title: raw.title,
            creator: raw.creator,
            reason: raw.reason,
            relevance_score: raw.relevance_score.clamp(0.0, 1.0),
        })
    }

    /// Generate an ordered card set for a general query. Never fails: any
    /// error becomes a single fallback card.
    pub async fn generate_cards(
        &self,
        query: &str,
        category: Option<UserIntentCategory>,
    ) -> Vec<ContentCard> {
        match self.try_generate_cards(query, category).await {
            Ok(cards) => cards,
            Err(e) => {
                tracing::warn!("content card generation failed: {}", e);
                vec![ContentCard::fallback()]
            }
        }
    }

    async fn try_generate_cards(
        &self,
        query: &str,
        category: Option<UserIntentCategory>,
    ) -> Result<Vec<ContentCard>, StageError> {
        let system = prompts::card_system_prompt(category);
        let user = match category {
            Some(category) => format!("Query: '{}' | Category: {}", query, category.as_str()),
            None => format!("Query: '{}'", query),
        };

        let reply = self
            .llm
            .complete(&system, &user, prompts::CARDS_TEMPERATURE)
            .await?;

        let raw: Vec<CardReply> = serde_json::from_str(strip_code_fence(&reply))?;
        if raw.is_empty() {
            return Err(StageError::EmptyCardSet);
        }

        // Order carries the narrative progression; keep it, drop any extras
        // past the contract maximum.
        raw.into_iter()
            .take(MAX_CARDS)
            .map(validate_card)
            .collect()
    }

    /// Descriptive stub for the unimplemented semantic search capability.
    pub fn placeholder_feature(&self) -> PlaceholderFeature {
        PlaceholderFeature {
            name: "Semantic Vector Search".to_string(),
            description: "Advanced semantic matching using embeddings to find content \
                with similar themes, writing styles, and emotional resonance."
                .to_string(),
            status: "In Development".to_string(),
            estimated_completion: "Next Sprint".to_string(),
            preview: FeaturePreview {
                similarity_threshold: 0.85,
                embedding_dimensions: 1536,
                indexed_titles: 15000,
                search_modes: vec![
                    "semantic".to_string(),
                    "hybrid".to_string(),
                    "contextual".to_string(),
                ],
            },
        }
    }
}

fn validate_analysis(raw: AnalysisReply) -> Result<QueryAnalysis, StageError> {
    let query_type =
        QueryType::parse(&raw.query_type).ok_or_else(|| StageError::UnknownValue {
            field: "query_type",
            value: raw.query_type.clone(),
        })?;

    let intent_category = match (query_type, raw.user_intent_category) {
        // A stray category on a specific-item reply is dropped so that the
        // category is populated iff the query is general.
        (QueryType::SpecificItem, _) => None,
        (QueryType::General, Some(value)) => Some(
            UserIntentCategory::parse(&value).ok_or(StageError::UnknownValue {
                field: "user_intent_category",
                value,
            })?,
        ),
        (QueryType::General, None) => Some(UserIntentCategory::ExplorationDiscovery),
    };

    Ok(QueryAnalysis {
        query_type,
        intent_category,
        confidence_score: raw.confidence_score.clamp(0.0, 1.0),
        reasoning: raw.reasoning,
    })
}

fn validate_card(raw: CardReply) -> Result<ContentCard, StageError> {
    let kind = CardKind::parse(&raw.kind).ok_or_else(|| StageError::UnknownValue {
        field: "type",
        value: raw.kind.clone(),
    })?;

    if raw.title.trim().is_empty() {
        return Err(StageError::MissingField("title"));
    }
    if raw.description.trim().is_empty() {
        return Err(StageError::MissingField("description"));
    }
    if kind == CardKind::Quote
        && raw
            .quoted_text
            .as_deref()
            .is_none_or(|quote| quote.trim().is_empty())
    {
        return Err(StageError::MissingField("quoted_text"));
    }

    Ok(ContentCard {
        kind,
        title: raw.title,
        description: raw.description,
        source_title: raw.source_title,
        source_creator: raw.source_creator,
        quoted_text: raw.quoted_text,
        location_label: raw.location_label,
        link: raw.link.unwrap_or_else(|| PLACEHOLDER_LINK.to_string()),
    })
}
