use chatdigest_types::{BatchConfig, ChatMessage, RawDivision};
use chrono::NaiveDate;

use crate::error::{ContextError, Result};

/// Split time-ordered messages into runs separated by gaps above `config.time_gap_secs`.
///
/// Scanning starts at the second message; each message is compared with its
/// predecessor. Messages dated on or before `window_start` are skipped. A gap
/// closes the current run (if it has messages) and the message after the gap
/// is not carried into the next run. A message dated after `window_end` that
/// closes a run ends the scan. The run still open at end of input is only
/// kept with `config.flush_trailing`.
pub fn segment(
    messages: &[ChatMessage],
    config: &BatchConfig,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Result<Vec<RawDivision>> {
    let mut divisions = Vec::new();
    let mut current: Vec<ChatMessage> = Vec::new();

    for pair in messages.windows(2) {
        let (previous, message) = (&pair[0], &pair[1]);
        let date = message
            .date()
            .ok_or(ContextError::InvalidTimestamp(message.timestamp))?;

        if date <= window_start {
            continue;
        }

        let gap = message.timestamp.saturating_sub(previous.timestamp);
        if gap > config.time_gap_secs && !current.is_empty() {
            divisions.push(RawDivision::new(std::mem::take(&mut current)));
            if date > window_end {
                return Ok(divisions);
            }
        } else {
            current.push(message.clone());
        }
    }

    if !current.is_empty() {
        if config.flush_trailing {
            divisions.push(RawDivision::new(current));
        } else {
            tracing::debug!(messages = current.len(), "dropping unterminated trailing run");
        }
    }

    Ok(divisions)
}
