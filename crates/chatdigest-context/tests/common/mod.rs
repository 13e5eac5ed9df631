#![allow(dead_code)]

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chatdigest_context::TokenCounter;
use chatdigest_llm::Completer;
use chatdigest_types::{ChatMessage, RawDivision};
use chrono::NaiveDate;

/// Answers `S1`, `S2`, ... and keeps every prompt it was given
#[derive(Default)]
pub struct RecordingCompleter {
    pub prompts: Mutex<Vec<String>>,
    pub ceilings: Mutex<Vec<u32>>,
}

impl RecordingCompleter {
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl Completer for RecordingCompleter {
    async fn complete(&self, prompt: &str, max_response_tokens: u32) -> Result<String> {
        let mut prompts = self.prompts.lock().unwrap();
        prompts.push(prompt.to_string());
        self.ceilings.lock().unwrap().push(max_response_tokens);
        Ok(format!("S{}", prompts.len()))
    }
}

pub struct FailingCompleter;

#[async_trait]
impl Completer for FailingCompleter {
    async fn complete(&self, _prompt: &str, _max_response_tokens: u32) -> Result<String> {
        anyhow::bail!("OpenAI API error (401 Unauthorized): invalid api key")
    }
}

/// One token per whitespace-separated word
pub struct WordCounter;

impl TokenCounter for WordCounter {
    fn count_text(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

/// Unix seconds of a UTC wall-clock time
pub fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
        .and_utc()
        .timestamp()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn msg(timestamp: i64, text: &str) -> ChatMessage {
    ChatMessage::new(timestamp, text)
}

/// Single-message division whose text has `words` words
pub fn division_of(words: usize, start: i64) -> RawDivision {
    let text = vec!["w"; words].join(" ");
    RawDivision::new(vec![ChatMessage::new(start, text)])
}

pub fn texts(division: &RawDivision) -> Vec<&str> {
    division.messages.iter().map(|m| m.text.as_str()).collect()
}
