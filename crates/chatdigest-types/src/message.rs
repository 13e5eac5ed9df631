use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One chat message as exported from the source workspace.
///
/// Only `timestamp` and `text` are read; any other fields of the export are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unix seconds
    pub timestamp: i64,
    pub text: String,
}

impl ChatMessage {
    pub fn new(timestamp: i64, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }

    /// Calendar date of the message in UTC, `None` if the timestamp is out of range
    pub fn date(&self) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp(self.timestamp, 0).map(|dt| dt.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_utc() {
        // 2018-07-01T23:30:00Z
        let msg = ChatMessage::new(1_530_487_800, "hi");
        assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2018, 7, 1));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{"timestamp": 10, "text": "hello", "user": "U123", "type": "message"}"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg, ChatMessage::new(10, "hello"));
    }
}
