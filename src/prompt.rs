//! Suggestion prompt construction

/// Sample chat text the suggestions should continue
pub const CONVERSATION_CONTEXT: &str =
    "Hey team, let's push to the extraction point. I see some enemies ahead.";

/// Build the suggestion prompt for a conversation context
///
/// The context is quoted verbatim; no escaping is applied.
pub fn build_suggestion_prompt(conversation: &str) -> String {
    format!(
        "Based on this conversation context: \"{conversation}\", \n\
provide exactly 3 brief and natural conversation suggestions to continue the dialogue. \n\
Format them as a numbered list (1., 2., 3.) and keep each suggestion under 10 words. \n\
Make suggestions friendly and relevant for gaming conversations, especially for Arc Raiders, \n\
a third-person extraction shooter where players team up to explore a post-apocalyptic Earth, \n\
fight against hostile robots called the 'ARC,' and collect loot, with the risk of losing \n\
everything if they are defeated, a player-versus-environment-versus-player (PvEvP) game.\n\
Focus on tactical communication, team coordination, or casual gaming chat."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_quotes_conversation() {
        let prompt = build_suggestion_prompt(CONVERSATION_CONTEXT);
        assert!(prompt.starts_with(
            "Based on this conversation context: \"Hey team, let's push to the extraction point."
        ));
        assert!(prompt.contains(&format!("\"{}\"", CONVERSATION_CONTEXT)));
    }

    #[test]
    fn test_prompt_asks_for_three_numbered_suggestions() {
        let prompt = build_suggestion_prompt("hi");
        assert!(prompt.contains("exactly 3"));
        assert!(prompt.contains("(1., 2., 3.)"));
        assert!(prompt.contains("under 10 words"));
    }

    #[test]
    fn test_prompt_line_structure() {
        let prompt = build_suggestion_prompt("hi");
        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Based on this conversation context: \"hi\", ");
        assert_eq!(
            lines[7],
            "Focus on tactical communication, team coordination, or casual gaming chat."
        );
    }

    #[test]
    fn test_prompt_does_not_mention_translation() {
        let prompt = build_suggestion_prompt(CONVERSATION_CONTEXT).to_lowercase();
        assert!(!prompt.contains("translat"));
    }
}
