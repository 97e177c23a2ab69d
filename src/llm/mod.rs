//! Generation backend integration
//! Single-shot text completion against a hosted large-language model

pub mod gemini;

use crate::error::Result;

/// One synchronous call per run: fully substituted prompt in, generated
/// text out. No streaming, no multi-turn state, no retries.
pub trait GenerationBackend {
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}
