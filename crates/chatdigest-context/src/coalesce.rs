use chatdigest_types::{BatchConfig, Group, RawDivision};

use crate::markup::unwrap_link_markup;
use crate::tokens::TokenCounter;

/// Merge consecutive divisions into groups below `config.max_tokens`, then
/// unwrap link markup in every message.
///
/// Each division is counted on its own. A group is in progress only while it
/// holds a non-zero token count, so a zero-token group is replaced by the next
/// seed. A division that would bring the group in progress to `max_tokens` or
/// more seals that group and is itself dropped. A first division over budget
/// still seeds a group on its own. The group in progress at end of input is
/// only kept with `config.flush_trailing`.
pub fn coalesce(
    divisions: Vec<RawDivision>,
    config: &BatchConfig,
    counter: &dyn TokenCounter,
) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut in_progress: Option<Group> = None;

    for division in divisions {
        let new_tokens = counter.count_texts(&division.texts());

        in_progress = match in_progress.take().filter(|group| group.token_count > 0) {
            None => Some(Group::seed(division, new_tokens)),
            Some(group) if group.token_count + new_tokens >= config.max_tokens => {
                tracing::debug!(
                    group_tokens = group.token_count,
                    dropped_messages = division.len(),
                    dropped_tokens = new_tokens,
                    "token budget reached, sealing group"
                );
                groups.push(group);
                None
            }
            Some(mut group) => {
                group.push_division(division, new_tokens);
                Some(group)
            }
        };
    }

    if let Some(group) = in_progress {
        if config.flush_trailing {
            groups.push(group);
        } else {
            tracing::debug!(messages = group.len(), "dropping unsealed trailing group");
        }
    }

    for group in &mut groups {
        for message in &mut group.messages {
            message.text = unwrap_link_markup(&message.text);
        }
    }

    groups
}
