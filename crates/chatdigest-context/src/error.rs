use chatdigest_persist::PersistError;
use chatdigest_types::YearMonth;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("Month has no representable first day: {0}")]
    InvalidPeriod(YearMonth),

    #[error("No messages to summarize")]
    NoMessages,

    #[error("Group has no messages")]
    EmptyGroup,

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Llm(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ContextError>;
