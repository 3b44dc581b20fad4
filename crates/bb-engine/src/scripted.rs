//! The scripted responder "personality": a fixed ordered table of
//! (trigger, reply) pairs evaluated by exact-match lookup, plus a general
//! pool drawn from at random when nothing matches. No language
//! understanding beyond literal keyword equality.

use rand::Rng;

/// Display name of the scripted responder.
pub const RESPONDER_NAME: &str = "HealthBot";

/// Replies used when the trigger matches no keyword.
pub const GENERAL_POOL: [&str; 5] = [
    "That's an interesting point! Have you considered...",
    "Thank you for sharing your experience. It might help to...",
    "I understand your concern. Here's some helpful information...",
    "Great question! Many community members have found success with...",
    "Let me share some resources that might help...",
];

enum KeywordReply {
    Canned(&'static str),
    /// Parameterized by the asker's display name.
    Personalized(fn(&str) -> String),
}

fn greet(asker: &str) -> String {
    format!("Hello {asker}, what can I help you with?")
}

const KEYWORD_TABLE: [(&str, KeywordReply); 5] = [
    ("hello", KeywordReply::Personalized(greet)),
    (
        "how are you",
        KeywordReply::Canned("I'm doing great! How can I assist you today?"),
    ),
    ("bye", KeywordReply::Canned("Goodbye, have a great day!")),
    (
        "thank you",
        KeywordReply::Canned("You're welcome! Feel free to reach out anytime."),
    ),
    (
        "help",
        KeywordReply::Canned("Sure! What do you need help with? Feel free to ask."),
    ),
];

/// Resolves the reply for a user message. The trigger is lower-cased and
/// trimmed, then tested for exact equality against each table entry in
/// order; `asker` is the display name of the most recent non-automated
/// participant.
pub fn scripted_reply(trigger: &str, asker: &str) -> String {
    let normalized = trigger.trim().to_lowercase();
    for (keyword, reply) in &KEYWORD_TABLE {
        if normalized == *keyword {
            return match reply {
                KeywordReply::Canned(text) => (*text).to_string(),
                KeywordReply::Personalized(produce) => produce(asker),
            };
        }
    }
    let pick = rand::rng().random_range(0..GENERAL_POOL.len());
    GENERAL_POOL[pick].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_is_exact_not_substring() {
        // "hello there" must NOT hit the hello entry.
        let reply = scripted_reply("hello there", "Jane");
        assert!(GENERAL_POOL.contains(&reply.as_str()));
    }

    #[test]
    fn keyword_match_ignores_case_and_padding() {
        assert_eq!(
            scripted_reply("  HELLO ", "Jane"),
            "Hello Jane, what can I help you with?"
        );
        assert_eq!(scripted_reply("Thank You", "Jane"), "You're welcome! Feel free to reach out anytime.");
    }

    #[test]
    fn unmatched_trigger_draws_from_pool() {
        for _ in 0..20 {
            let reply = scripted_reply("is this covered by insurance?", "Jane");
            assert!(GENERAL_POOL.contains(&reply.as_str()));
        }
    }
}
