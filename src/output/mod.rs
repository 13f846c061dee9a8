//! Output formatting

pub mod human;
pub mod json;

use crate::enhance::EnhancementResult;
use crate::search::SearchResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Human
        }
    }
}

/// Format search results for output
pub fn format_results(results: &SearchResponse, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format(results),
        OutputFormat::Json => json::format(results),
    }
}

/// Format a single enhancement for output
pub fn format_enhancement(result: &EnhancementResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format_enhancement(result),
        OutputFormat::Json => json::format(result),
    }
}
