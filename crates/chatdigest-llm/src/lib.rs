pub mod types;
pub mod traits;
pub mod config;
pub mod completer;
pub mod openai;

pub use traits::{
    ChatClient,
    ChatRequest, ChatResponse, ChatOptions,
    TokenUsage,
};

pub use completer::{ChatCompleter, Completer};
pub use config::{ClientFactory, OpenAIConfig, ProviderConfig};
pub use openai::OpenAIClient;
pub use types::Message;
