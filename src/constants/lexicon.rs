//! Default vocabulary banks for the narrative composer
//!
//! Seeded picks index into these slices, so removing or reordering entries
//! changes every published review.

pub const OPENERS: &[&str] = &[
    "makes a compelling case",
    "enters the fray",
    "stakes its claim",
    "arrives with clear intent",
    "puts up a strong argument",
];

pub const PERFORMANCE_GOOD: &[&str] = &["punchy", "eager", "confident", "energetic"];

pub const PERFORMANCE_MODEST: &[&str] = &["adequate", "modest", "unhurried", "relaxed"];

pub const EFFICIENCY_GOOD: &[&str] = &["impressive", "class-leading", "genuinely frugal"];

pub const EFFICIENCY_MODEST: &[&str] = &["acceptable", "par for the course", "unremarkable"];

pub const VERDICT_TOP: &[&str] = &[
    "is an easy car to recommend",
    "belongs on every shortlist in its class",
    "gets the big things right and most of the small ones too",
];

pub const VERDICT_MID: &[&str] = &[
    "is a sensible, well-rounded pick",
    "does most things well without chasing headlines",
    "covers the bases buyers in this bracket care about",
];

pub const VERDICT_LOW: &[&str] = &[
    "needs a careful look against its rivals",
    "is best judged after a long test drive",
    "leans on its price to stay in the conversation",
];

pub const VERDICT_CLOSER_TOP: &str =
    "Few rivals offer a more complete package at this price.";

pub const VERDICT_CLOSER_MID: &str =
    "It deserves a spot on the consideration list.";

pub const VERDICT_CLOSER_LOW: &str =
    "Shop around before signing on the dotted line.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banks_non_empty() {
        for bank in [
            OPENERS,
            PERFORMANCE_GOOD,
            PERFORMANCE_MODEST,
            EFFICIENCY_GOOD,
            EFFICIENCY_MODEST,
            VERDICT_TOP,
            VERDICT_MID,
            VERDICT_LOW,
        ] {
            assert!(!bank.is_empty());
        }
    }
}
