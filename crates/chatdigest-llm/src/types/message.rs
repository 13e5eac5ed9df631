use serde::{Deserialize, Serialize};

/// Chat message sent to a completion provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum Message {
    /// User/Human message
    #[serde(rename = "user")]
    Human {
        content: String,
    },
}

impl Message {
    pub fn human(content: impl Into<String>) -> Self {
        Self::Human {
            content: content.into(),
        }
    }

    /// Role as sent on the wire
    pub fn role(&self) -> &str {
        match self {
            Self::Human { .. } => "user",
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Human { content } => content,
        }
    }
}
