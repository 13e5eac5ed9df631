use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use chatdigest_types::{BatchConfig, SummaryConfig, DEFAULT_GROUP_PROMPT, DEFAULT_MONTH_PROMPT};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub reduce: ReduceConfig,
    #[serde(default)]
    pub prompts: PromptsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,

    // Secret (from ENV only)
    #[serde(default)]
    pub openai_api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// JSON array of `{timestamp, text}` messages
    pub messages: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            messages: PathBuf::from("messages.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    /// Response ceiling sent with every completion
    pub max_response_tokens: u32,
    /// File holding the API key, used when OPENAI_API_KEY is unset
    pub key_file: PathBuf,
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            max_response_tokens: 1500,
            key_file: PathBuf::from("key.txt"),
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReduceConfig {
    pub token_ceiling: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self { token_ceiling: 3000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    pub group: String,
    pub month: String,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            group: DEFAULT_GROUP_PROMPT.to_string(),
            month: DEFAULT_MONTH_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory of per-month summary files
    pub summaries_dir: PathBuf,
    pub digest: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summaries_dir: PathBuf::from("summaries"),
            digest: PathBuf::from("digest.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. CHATDIGEST_* environment variables, `__` between nested keys
    ///    (e.g. CHATDIGEST_BATCH__MAX_TOKENS=2000)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(env_source());

        Self::finish(builder.build()?)
    }

    /// Load one explicit config file, still overridable from the environment
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source());

        Self::finish(builder.build()?)
    }

    fn finish(config: ConfigLoader) -> Result<Self, ConfigError> {
        let mut cfg: Config = config.try_deserialize()?;

        // Secrets come from ENV only, never from TOML
        cfg.openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(cfg)
    }

    pub fn summary_config(&self) -> SummaryConfig {
        SummaryConfig::new()
            .with_group_prompt(self.prompts.group.clone())
            .with_month_prompt(self.prompts.month.clone())
            .with_max_response_tokens(self.llm.max_response_tokens)
            .with_token_ceiling(self.reduce.token_ceiling)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("CHATDIGEST")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
