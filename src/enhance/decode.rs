//! Schema decode of the service's enhancement payload
//!
//! The payload is untrusted model output. Decoding happens in two steps:
//! the text must parse as a JSON object (otherwise the whole payload is
//! rejected), then each field is validated on its own and replaced by a safe
//! default when it is missing or has the wrong shape.

use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::debug;

use super::types::{
    clamp_confidence, EnhancementOrigin, EnhancementResult, EnhancementType,
    DEFAULT_SERVICE_CONFIDENCE,
};
use crate::core::error::{Error, Result};

/// `{` positions tried before giving up on finding an object
const MAX_OBJECT_CANDIDATES: usize = 16;

/// Stand-in for number literals that overflow f64
const SATURATED_MAX: &str = "1.7976931348623157e308";
const SATURATED_MIN: &str = "-1.7976931348623157e308";

/// Payload as received, before per-field validation
#[derive(Debug, Default)]
pub struct RawEnhancement {
    pub enhanced_query: Option<Value>,
    pub related_terms: Option<Value>,
    pub enhancement_type: Option<Value>,
    pub confidence_score: Option<Value>,
    pub query_context: Option<Value>,
}

impl RawEnhancement {
    /// Parse model output into a raw payload. Fails only if no JSON object
    /// can be recovered from the text.
    pub fn parse(content: &str) -> Result<Self> {
        find_json_object(content)
            .map(Self::from_map)
            .ok_or_else(|| Error::Decode {
                message: "no JSON object found in model output".to_string(),
                raw: content.to_string(),
            })
    }

    /// Pick the five fields out of a decoded object. camelCase keys win over
    /// their snake_case spellings when both are present.
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        Self {
            enhanced_query: take_field(&mut map, "enhancedQuery", "enhanced_query"),
            related_terms: take_field(&mut map, "relatedTerms", "related_terms"),
            enhancement_type: take_field(&mut map, "enhancementType", "enhancement_type"),
            confidence_score: take_field(&mut map, "confidenceScore", "confidence_score"),
            query_context: take_field(&mut map, "queryContext", "query_context"),
        }
    }

    /// Apply per-field defaults and produce a valid result
    pub fn into_result(self, original_query: &str) -> EnhancementResult {
        let enhanced_query = match self.enhanced_query {
            Some(Value::String(q)) if !q.trim().is_empty() => q.trim().to_string(),
            other => {
                debug!("enhancedQuery unusable ({:?}), keeping original", other);
                original_query.to_string()
            }
        };

        let related_terms = match self.related_terms {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(term) if !term.trim().is_empty() => {
                        Some(term.trim().to_string())
                    }
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };

        let enhancement_type = match &self.enhancement_type {
            Some(Value::String(name)) => EnhancementType::from_wire(name).unwrap_or_else(|| {
                debug!("Unknown enhancementType '{}', using standard", name);
                EnhancementType::Standard
            }),
            _ => EnhancementType::Standard,
        };

        let confidence_score = match self.confidence_score {
            Some(Value::Number(n)) => n
                .as_f64()
                .map(clamp_confidence)
                .unwrap_or(DEFAULT_SERVICE_CONFIDENCE),
            _ => DEFAULT_SERVICE_CONFIDENCE,
        };

        let query_context = match self.query_context {
            Some(Value::String(ctx)) if !ctx.trim().is_empty() => Some(ctx),
            _ => None,
        };

        EnhancementResult {
            enhanced_query,
            related_terms,
            enhancement_type,
            confidence_score,
            query_context,
            origin: EnhancementOrigin::Enhanced,
        }
    }
}

/// Decode model output into an `EnhancementResult`
pub fn decode_enhancement(content: &str, original_query: &str) -> Result<EnhancementResult> {
    RawEnhancement::parse(content).map(|raw| raw.into_result(original_query))
}

fn take_field(map: &mut Map<String, Value>, camel: &str, snake: &str) -> Option<Value> {
    match map.remove(camel) {
        None | Some(Value::Null) => map.remove(snake),
        found => found,
    }
}

/// First decodable JSON object embedded in model output. Handles bare JSON,
/// markdown fences and surrounding prose; braces inside string literals are
/// not counted.
fn find_json_object(text: &str) -> Option<Map<String, Value>> {
    text.match_indices('{')
        .take(MAX_OBJECT_CANDIDATES)
        .filter_map(|(start, _)| balanced_object(text, start))
        .find_map(|candidate| {
            serde_json::from_str::<Map<String, Value>>(&saturate_numbers(candidate)).ok()
        })
}

/// The `{...}` span opening at `start`, or `None` if it never closes
fn balanced_object(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in text.as_bytes()[start..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Replace number literals that overflow f64 (e.g. `1e400`) with the
/// largest finite value of the same sign, so one oversized field cannot
/// fail the whole document.
fn saturate_numbers(json: &str) -> Cow<'_, str> {
    let bytes = json.as_bytes();
    let mut rewritten: Option<String> = None;
    let mut copied = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];

        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        match byte {
            b'"' => {
                in_string = true;
                i += 1;
            }
            b'-' | b'0'..=b'9' => {
                let start = i;
                while i < bytes.len()
                    && matches!(bytes[i], b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')
                {
                    i += 1;
                }

                if let Ok(n) = json[start..i].parse::<f64>() {
                    if n.is_infinite() {
                        let out =
                            rewritten.get_or_insert_with(|| String::with_capacity(json.len()));
                        out.push_str(&json[copied..start]);
                        out.push_str(if n > 0.0 { SATURATED_MAX } else { SATURATED_MIN });
                        copied = i;
                    }
                }
            }
            _ => i += 1,
        }
    }

    match rewritten {
        Some(mut out) => {
            out.push_str(&json[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(json),
    }
}
