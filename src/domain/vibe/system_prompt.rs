//! System prompt value object

use super::era::Direction;
use super::profile::PromptProfile;

/// Base instruction shared by every profile
const BASE_INSTRUCTION: &str = "You are the Ultimate Slang Expert. Rewrite the user's text in the requested era and direction.";

const TO_SLANG_RULE: &str = "Transformation Rule: Break down long formal sentences into short, punchy slang blocks that look like they were typed on a phone in 2 seconds.";

const TO_NORMAL_RULE: &str = "Transformation Rule: Translate the slang into plain, polite English that anyone would understand. Keep the original meaning, facts, names, and numbers.";

/// Value object representing the complete system instruction for a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt {
    content: String,
}

impl SystemPrompt {
    /// Build the system instruction for a prompt profile
    pub fn build(profile: &PromptProfile) -> Self {
        let rule = match profile.direction {
            Direction::ToSlang => TO_SLANG_RULE,
            Direction::ToNormal => TO_NORMAL_RULE,
        };

        let mut content = format!(
            "{}\nEra: {}\nDirection: {}\n\nStyle: {}\nVocabulary: {}\n",
            BASE_INSTRUCTION,
            profile.era.label(),
            profile.direction,
            profile.style,
            profile.vocabulary,
        );
        if let Some(emoji) = profile.emoji_policy {
            content.push_str(&format!("Emoji Rules: {}\n", emoji));
        }
        content.push_str(&format!("Example:\n{}\n\n{}\n\n", profile.example, rule));

        content.push_str("Generate \"vibe statistics\" for the input as integers from 0 to 100:\n");
        for (i, stat) in profile.stat_labels.0.iter().enumerate() {
            content.push_str(&format!("- Stat {} ({}): {}\n", i + 1, stat.key, stat.label));
        }

        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Wrap user text as the single user turn of the request
pub fn user_turn(text: &str) -> String {
    format!("Translate this: \"{}\"", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vibe::era::Era;

    #[test]
    fn modern_slang_prompt_contains_profile() {
        let profile = PromptProfile::lookup(Era::Modern, Direction::ToSlang);
        let prompt = SystemPrompt::build(profile);
        assert!(prompt.content().contains("Ultimate Slang Expert"));
        assert!(prompt.content().contains("Emoji Rules"));
        assert!(prompt.content().contains("Stat 3 (brainRot): Brain Rot"));
        assert!(prompt.content().contains("punchy slang blocks"));
    }

    #[test]
    fn normal_prompt_has_no_emoji_rules() {
        let profile = PromptProfile::lookup(Era::Legacy2016, Direction::ToNormal);
        let prompt = SystemPrompt::build(profile);
        assert!(!prompt.content().contains("Emoji Rules"));
        assert!(prompt.content().contains("plain, polite English"));
        assert!(prompt.content().contains("Stat 1 (swag): Swag"));
    }

    #[test]
    fn different_profiles_different_prompts() {
        let a = SystemPrompt::build(PromptProfile::lookup(Era::Modern, Direction::ToSlang));
        let b = SystemPrompt::build(PromptProfile::lookup(Era::Legacy2016, Direction::ToSlang));
        assert_ne!(a, b);
    }

    #[test]
    fn user_turn_quotes_text() {
        assert_eq!(user_turn("hi"), "Translate this: \"hi\"");
    }
}
