/// Prefix for per-group prompts; the group's messages follow, one per line
pub const DEFAULT_GROUP_PROMPT: &str =
    "На русском языке напиши, какие темы обсуждаются в этих сообщениях: \n";

/// Prefix for month-level prompts; the joined group summaries follow
pub const DEFAULT_MONTH_PROMPT: &str =
    "На русском языке напиши, какие темы есть в этом тексте: ";
