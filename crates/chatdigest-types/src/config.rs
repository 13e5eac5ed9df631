use serde::{Deserialize, Serialize};

use crate::templates::{DEFAULT_GROUP_PROMPT, DEFAULT_MONTH_PROMPT};

/// Parameters of segmentation and coalescing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// A gap strictly above this many seconds closes a raw division
    pub time_gap_secs: i64,
    /// Token budget of a group
    pub max_tokens: usize,
    /// Emit the run/group still open at end of input instead of dropping it
    pub flush_trailing: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            time_gap_secs: 60,
            max_tokens: 1500,
            flush_trailing: false,
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_gap_secs(mut self, secs: i64) -> Self {
        self.time_gap_secs = secs;
        self
    }

    pub fn with_max_tokens(mut self, max: usize) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_flush_trailing(mut self, enabled: bool) -> Self {
        self.flush_trailing = enabled;
        self
    }
}

/// Prompts and limits of the LLM stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub group_prompt: String,
    pub month_prompt: String,
    /// Response ceiling passed with every completion
    pub max_response_tokens: u32,
    /// Above this many tokens a month is summarized in two halves first
    pub token_ceiling: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            group_prompt: DEFAULT_GROUP_PROMPT.to_string(),
            month_prompt: DEFAULT_MONTH_PROMPT.to_string(),
            max_response_tokens: 1500,
            token_ceiling: 3000,
        }
    }
}

impl SummaryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.group_prompt = prompt.into();
        self
    }

    pub fn with_month_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.month_prompt = prompt.into();
        self
    }

    pub fn with_max_response_tokens(mut self, tokens: u32) -> Self {
        self.max_response_tokens = tokens;
        self
    }

    pub fn with_token_ceiling(mut self, ceiling: usize) -> Self {
        self.token_ceiling = ceiling;
        self
    }
}
