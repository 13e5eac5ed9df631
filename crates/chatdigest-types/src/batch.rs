use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;

/// Contiguous run of messages with no internal gap above the segmentation threshold
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawDivision {
    pub messages: Vec<ChatMessage>,
}

impl RawDivision {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.text.as_str()).collect()
    }
}

/// One or more consecutive raw divisions merged under a token budget.
///
/// `token_count` is the sum of the per-division counts, not a recount of the merged text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Group {
    pub messages: Vec<ChatMessage>,
    pub token_count: usize,
    pub division_count: usize,
}

impl Group {
    /// Start a group from a single division
    pub fn seed(division: RawDivision, token_count: usize) -> Self {
        Self {
            messages: division.messages,
            token_count,
            division_count: 1,
        }
    }

    pub fn push_division(&mut self, division: RawDivision, token_count: usize) {
        self.messages.extend(division.messages);
        self.token_count += token_count;
        self.division_count += 1;
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Timestamps of the first and last message
    pub fn span(&self) -> Option<(i64, i64)> {
        let first = self.messages.first()?;
        let last = self.messages.last()?;
        Some((first.timestamp, last.timestamp))
    }

    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_accumulates_divisions() {
        let mut group = Group::seed(RawDivision::new(vec![ChatMessage::new(1, "a")]), 5);
        group.push_division(RawDivision::new(vec![ChatMessage::new(2, "b"), ChatMessage::new(3, "c")]), 7);

        assert_eq!(group.len(), 3);
        assert_eq!(group.token_count, 12);
        assert_eq!(group.division_count, 2);
        assert_eq!(group.span(), Some((1, 3)));
        assert_eq!(group.texts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_group_has_no_span() {
        assert_eq!(Group::default().span(), None);
    }
}
