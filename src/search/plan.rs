//! Turns an enhancement into the list of terms sent to the data API

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::enhance::EnhancementResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPlan {
    /// Enhanced query, searched first
    pub primary: String,
    /// Related terms, in the order the service suggested them
    pub related: Vec<String>,
}

impl SearchPlan {
    pub fn from_enhancement(enhancement: &EnhancementResult, max_related: usize) -> Self {
        let primary = enhancement.enhanced_query.trim().to_string();

        let mut seen = HashSet::new();
        seen.insert(primary.to_lowercase());

        let related = enhancement
            .related_terms
            .iter()
            .map(|term| term.trim())
            .filter(|term| !term.is_empty())
            .filter(|term| seen.insert(term.to_lowercase()))
            .take(max_related)
            .map(str::to_string)
            .collect();

        Self { primary, related }
    }

    /// All terms, primary first
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.related.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::{EnhancementOrigin, EnhancementType};

    fn enhancement(query: &str, related: &[&str]) -> EnhancementResult {
        EnhancementResult {
            enhanced_query: query.to_string(),
            related_terms: related.iter().map(|s| s.to_string()).collect(),
            enhancement_type: EnhancementType::Semantic,
            confidence_score: 0.9,
            query_context: None,
            origin: EnhancementOrigin::Enhanced,
        }
    }

    #[test]
    fn test_plan_dedups_and_caps() {
        let e = enhancement(
            "port congestion",
            &["Port Congestion", "supply chain", "", "SUPPLY CHAIN", "shipping delays", "tariffs"],
        );
        let plan = SearchPlan::from_enhancement(&e, 2);

        assert_eq!(plan.primary, "port congestion");
        assert_eq!(plan.related, vec!["supply chain", "shipping delays"]);
        assert_eq!(
            plan.terms().collect::<Vec<_>>(),
            vec!["port congestion", "supply chain", "shipping delays"]
        );
    }

    #[test]
    fn test_fallback_plan_is_single_term() {
        let plan = SearchPlan::from_enhancement(&EnhancementResult::fallback("rail strike"), 3);
        assert_eq!(plan.terms().count(), 1);
        assert_eq!(plan.primary, "rail strike");
    }
}
