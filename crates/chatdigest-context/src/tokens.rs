use tiktoken_rs::CoreBPE;

use crate::error::{ContextError, Result};

/// Model-specific token counting
pub trait TokenCounter: Send + Sync {
    fn count_text(&self, text: &str) -> usize;

    /// Sum of the independent counts of each text
    fn count_texts(&self, texts: &[&str]) -> usize {
        texts.iter().map(|text| self.count_text(text)).sum()
    }
}

/// Token counter backed by the tiktoken BPE of an OpenAI model
pub struct TiktokenCounter {
    bpe: CoreBPE,
    model: String,
}

impl TiktokenCounter {
    pub fn for_model(model: impl Into<String>) -> Result<Self> {
        let model = model.into();
        let bpe = tiktoken_rs::get_bpe_from_model(&model)
            .map_err(|e| ContextError::Tokenizer(format!("{}: {}", model, e)))?;
        Ok(Self { bpe, model })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TokenCounter for TiktokenCounter {
    fn count_text(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}
