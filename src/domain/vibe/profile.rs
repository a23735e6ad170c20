//! Prompt profiles keyed by era and direction

use super::era::{Direction, Era};
use super::stats::{StatLabel, StatLabels};

/// Immutable prompt configuration for one (era, direction) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptProfile {
    pub era: Era,
    pub direction: Direction,
    /// How the output should look and read
    pub style: &'static str,
    /// Vocabulary and register guide
    pub vocabulary: &'static str,
    /// Emoji usage policy; only slang output uses emoji
    pub emoji_policy: Option<&'static str>,
    /// Worked input/output example
    pub example: &'static str,
    /// Labels of the four vibe stat slots
    pub stat_labels: StatLabels,
}

pub const MODERN_LABELS: StatLabels = StatLabels([
    StatLabel { label: "Rizz", key: "rizz" },
    StatLabel { label: "Aura", key: "aura" },
    StatLabel { label: "Brain Rot", key: "brainRot" },
    StatLabel { label: "Drip", key: "drip" },
]);

pub const LEGACY_LABELS: StatLabels = StatLabels([
    StatLabel { label: "Swag", key: "swag" },
    StatLabel { label: "Clout", key: "clout" },
    StatLabel { label: "Savage", key: "savage" },
    StatLabel { label: "Fleek", key: "fleek" },
]);

const MODERN_TO_SLANG: PromptProfile = PromptProfile {
    era: Era::Modern,
    direction: Direction::ToSlang,
    style: "Lowercase only. No formal punctuation. Extreme compression. \
            Instead of \"I had a great week\", say \"week was gas\". \
            Instead of \"Do you want to...\", say \"u down for\".",
    vocabulary: "fr, ong, lowkey, cooked, rizz, gyatt, skibidi, sigma, aura, mogging, \
                 ratio, deadass, glazing, delulu, ate",
    emoji_policy: Some(
        "Use \u{1F480} for things that are funny, good, or shocking. \
         Use \u{1F62D} for emphasis. Use \u{1F525} for things that are cool.",
    ),
    example: "Input: \"Hey! I had a great week, do you want to grab dinner at 7?\"\n\
              Output: \"week was gas fr \u{1F480} u down for food at 7? place looks fire af\"",
    stat_labels: MODERN_LABELS,
};

const MODERN_TO_NORMAL: PromptProfile = PromptProfile {
    era: Era::Modern,
    direction: Direction::ToNormal,
    style: "Clear, grammatical, neutral English with standard capitalization and punctuation. \
            Expand compressed phrasing into complete sentences.",
    vocabulary: "Decode modern slang such as fr (for real), ong (on god, honestly), \
                 lowkey (somewhat), cooked (in trouble), rizz (charm), aura (presence), \
                 mogging (outshining), delulu (delusional), ate (did very well). \
                 Drop emoji and replace them with the meaning they carried.",
    emoji_policy: None,
    example: "Input: \"week was gas fr \u{1F480} u down for food at 7?\"\n\
              Output: \"I had a great week. Would you like to get dinner at 7?\"",
    stat_labels: MODERN_LABELS,
};

const LEGACY_TO_SLANG: PromptProfile = PromptProfile {
    era: Era::Legacy2016,
    direction: Direction::ToSlang,
    style: "High energy, lots of exclamation marks, \"Swag\" focused. \
            Break long sentences into short, punchy hype lines.",
    vocabulary: "on fleek, lit, fam, squad goals, savage, gucci, dab, yeet, extra, turnt, \
                 clout, shook, receipts, tea, woke, slay, cancelled, finna",
    emoji_policy: Some("Use \u{1F602}, \u{1F525}, \u{1F4AF}, \u{1F44C}."),
    example: "Input: \"Hey! I had a great week, do you want to grab dinner at 7?\"\n\
              Output: \"This week was LIT fam! \u{1F602} Squad goals at the restaurant at 7? \
              It's gonna be SAVAGE! \u{1F4AF}\"",
    stat_labels: LEGACY_LABELS,
};

const LEGACY_TO_NORMAL: PromptProfile = PromptProfile {
    era: Era::Legacy2016,
    direction: Direction::ToNormal,
    style: "Calm, grammatical, neutral English. Remove hype, repeated exclamation marks, \
            and all-caps emphasis.",
    vocabulary: "Decode 2016 slang such as lit (exciting), fam (friends), on fleek (perfect), \
                 savage (bold), gucci (fine), extra (over the top), shook (surprised), \
                 tea (gossip), finna (going to). Drop emoji and replace them with the \
                 meaning they carried.",
    emoji_policy: None,
    example: "Input: \"This week was LIT fam! \u{1F602} Squad goals at the restaurant at 7?\"\n\
              Output: \"This week was great. Would you like to meet at the restaurant at 7?\"",
    stat_labels: LEGACY_LABELS,
};

impl PromptProfile {
    /// Look up the fixed profile for an era and direction
    pub const fn lookup(era: Era, direction: Direction) -> &'static PromptProfile {
        match (era, direction) {
            (Era::Modern, Direction::ToSlang) => &MODERN_TO_SLANG,
            (Era::Modern, Direction::ToNormal) => &MODERN_TO_NORMAL,
            (Era::Legacy2016, Direction::ToSlang) => &LEGACY_TO_SLANG,
            (Era::Legacy2016, Direction::ToNormal) => &LEGACY_TO_NORMAL,
        }
    }
}

/// Stat labels for an era, independent of direction
pub const fn stat_labels(era: Era) -> &'static StatLabels {
    match era {
        Era::Modern => &MODERN_LABELS,
        Era::Legacy2016 => &LEGACY_LABELS,
    }
}
