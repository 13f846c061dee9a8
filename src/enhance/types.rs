//! Enhancement result types

use serde::{Deserialize, Serialize};

/// Confidence reported on the fallback path
pub const FALLBACK_CONFIDENCE: f64 = 1.0;

/// Confidence used when the service omits a usable score
pub const DEFAULT_SERVICE_CONFIDENCE: f64 = 0.8;

/// How the service classified and rewrote the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnhancementType {
    /// Keyword search expanded with semantically related terms
    Semantic,
    /// Natural-language question rewritten into search terms
    NaturalLanguage,
    /// No rewrite applied
    #[default]
    Standard,
}

impl EnhancementType {
    /// Parse the wire name. Unknown names yield `None`.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "semantic" => Some(Self::Semantic),
            "natural-language" | "natural_language" => Some(Self::NaturalLanguage),
            "standard" => Some(Self::Standard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::NaturalLanguage => "natural-language",
            Self::Standard => "standard",
        }
    }
}

impl std::fmt::Display for EnhancementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnhancementOrigin {
    /// Decoded from a completion service response
    Enhanced,
    /// Default result; no usable response from the service
    #[default]
    Fallback,
}

/// Output of a single enhancement attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementResult {
    /// Query to run against the data API
    pub enhanced_query: String,

    /// Additional keywords to broaden the search
    pub related_terms: Vec<String>,

    pub enhancement_type: EnhancementType,

    /// Self-reported certainty, always within [0, 1]
    pub confidence_score: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_context: Option<String>,

    /// Not part of the wire format
    #[serde(skip)]
    pub origin: EnhancementOrigin,
}

impl EnhancementResult {
    /// The deterministic result used whenever enhancement cannot complete
    pub fn fallback(original_query: &str) -> Self {
        Self {
            enhanced_query: original_query.to_string(),
            related_terms: Vec::new(),
            enhancement_type: EnhancementType::Standard,
            confidence_score: FALLBACK_CONFIDENCE,
            query_context: None,
            origin: EnhancementOrigin::Fallback,
        }
    }

    /// True when the service did not supply this result
    pub fn is_fallback(&self) -> bool {
        self.origin == EnhancementOrigin::Fallback
    }
}

/// Clamp a score into [0, 1]
pub fn clamp_confidence(score: f64) -> f64 {
    if score.is_nan() {
        return DEFAULT_SERVICE_CONFIDENCE;
    }
    score.clamp(0.0, 1.0)
}
