//! Human-readable output formatting

use crate::enhance::EnhancementResult;
use crate::search::SearchResponse;

const EXCERPT_WIDTH: usize = 100;

/// Format an enhancement for human consumption
pub fn format_enhancement(result: &EnhancementResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Query:       {}\n", result.enhanced_query));
    output.push_str(&format!(
        "Type:        {} ({:.2})\n",
        result.enhancement_type, result.confidence_score
    ));

    if !result.related_terms.is_empty() {
        output.push_str(&format!("Related:     {}\n", result.related_terms.join(", ")));
    }

    if let Some(context) = &result.query_context {
        output.push_str(&format!("Context:     {}\n", context));
    }

    if result.is_fallback() {
        output.push_str("(not enhanced)\n");
    }

    output
}

/// Format results for human consumption
pub fn format(results: &SearchResponse) -> String {
    let mut output = String::new();

    let searched = &results.enhancement.enhanced_query;
    let via = if searched != &results.query {
        format!(" (searched as '{}')", searched)
    } else {
        String::new()
    };

    if results.results.is_empty() {
        output.push_str(&format!(
            "No articles found for '{}'{} ({:.1}ms)\n",
            results.query, via, results.elapsed_ms
        ));
        return output;
    }

    output.push_str(&format!(
        "Found {} articles for '{}'{} ({:.1}ms)\n",
        results.results.len(),
        results.query,
        via,
        results.elapsed_ms
    ));

    if !results.enhancement.related_terms.is_empty() {
        output.push_str(&format!(
            "Related terms: {}\n",
            results.enhancement.related_terms.join(", ")
        ));
    }
    output.push('\n');

    for (i, hit) in results.results.iter().enumerate() {
        let article = &hit.article;
        output.push_str(&format!("{}. {}", i + 1, article.title));

        if let Some(category) = &article.category {
            output.push_str(&format!(" [{}]", category));
        }
        if let Some(published) = &article.published_at {
            output.push_str(&format!(" {}", published.format("%Y-%m-%d")));
        }
        output.push('\n');

        if let Some(excerpt) = &article.excerpt {
            output.push_str(&format!("   {}\n", truncate(excerpt, EXCERPT_WIDTH)));
        }

        if hit.matched_term != *searched {
            output.push_str(&format!("   via '{}'\n", hit.matched_term));
        }

        output.push('\n');
    }

    output
}

fn truncate(text: &str, width: usize) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > width {
        let cut: String = line.chars().take(width - 3).collect();
        format!("{}...", cut)
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Article, SearchHit};

    #[test]
    fn test_fallback_enhancement_marked() {
        let text = format_enhancement(&EnhancementResult::fallback("rail strike"));
        assert!(text.contains("rail strike"));
        assert!(text.contains("standard"));
        assert!(text.contains("(not enhanced)"));
    }

    #[test]
    fn test_untyped_rewrite_not_marked() {
        let result = crate::enhance::decode_enhancement(
            r#"{"enhancedQuery":"freight rates","confidenceScore":0.6}"#,
            "shipping costs",
        )
        .unwrap();
        let text = format_enhancement(&result);
        assert!(text.contains("Query:       freight rates"));
        assert!(text.contains("standard (0.60)"));
        assert!(!text.contains("(not enhanced)"));
    }

    #[test]
    fn test_results_listing() {
        let response = SearchResponse {
            query: "why are ports backed up".to_string(),
            enhancement: EnhancementResult {
                enhanced_query: "port congestion".to_string(),
                related_terms: vec!["supply chain".to_string()],
                enhancement_type: crate::enhance::EnhancementType::NaturalLanguage,
                confidence_score: 0.9,
                query_context: None,
                origin: crate::enhance::EnhancementOrigin::Enhanced,
            },
            results: vec![SearchHit {
                article: Article {
                    id: 3,
                    title: "Chip supply tightens".to_string(),
                    slug: None,
                    excerpt: Some("Foundries report long lead times".to_string()),
                    category: Some("Tech".to_string()),
                    published_at: None,
                },
                matched_term: "supply chain".to_string(),
            }],
            elapsed_ms: 12.0,
        };

        let text = format(&response);
        assert!(text.contains("Found 1 articles"));
        assert!(text.contains("searched as 'port congestion'"));
        assert!(text.contains("1. Chip supply tightens [Tech]"));
        assert!(text.contains("via 'supply chain'"));
    }

    #[test]
    fn test_truncate_long_excerpt() {
        let long = "x".repeat(150);
        assert_eq!(truncate(&long, 20).chars().count(), 20);
    }
}
