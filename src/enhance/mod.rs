//! AI-assisted search query enhancement
//!
//! Sends the reader's raw query to a chat-completions service, decodes the
//! rewrite, and degrades to the unmodified query whenever anything fails.

mod client;
mod decode;
mod enhancer;
mod prompt;
mod types;

pub use client::CompletionClient;
pub use decode::{decode_enhancement, RawEnhancement};
pub use enhancer::{Availability, QueryEnhancer};
pub use prompt::SYSTEM_PROMPT;
pub use types::{
    clamp_confidence, EnhancementOrigin, EnhancementResult, EnhancementType,
    DEFAULT_SERVICE_CONFIDENCE, FALLBACK_CONFIDENCE,
};
