//! Narrative composition from normalized facts
//!
//! Each paragraph interpolates facts into a template and takes at least
//! one seeded vocabulary pick, so wording varies between vehicles but
//! never between runs of the same vehicle. Paragraphs are joined with
//! single spaces into one string.

use crate::domain::model::{Lexicon, NormalizedFacts};
use crate::domain::service::seeded::pick;

pub fn compose_narrative(facts: &NormalizedFacts, rating: f64, lexicon: &Lexicon) -> String {
    let seed = facts.seed_base();
    let mut paragraphs = vec![
        intro_paragraph(facts, rating, lexicon, &seed),
        performance_paragraph(facts, lexicon, &seed),
        efficiency_paragraph(facts, lexicon, &seed),
    ];
    if facts.safety_stars > 0 {
        paragraphs.push(safety_paragraph(facts));
    }
    paragraphs.push(verdict_paragraph(rating, lexicon, &seed));
    paragraphs.join(" ")
}

fn pick_phrase<'a>(bank: &'a [String], seed: &str) -> &'a str {
    pick(bank, seed).map(String::as_str).unwrap_or("")
}

fn intro_paragraph(facts: &NormalizedFacts, rating: f64, lexicon: &Lexicon, seed: &str) -> String {
    let opener = pick_phrase(&lexicon.openers, &format!("{seed}intro"));
    let price_clause = if facts.has_price_range() {
        format!(
            "priced between \u{20b9}{:.2} lakh and \u{20b9}{:.2} lakh",
            facts.price_low_lakh, facts.price_high_lakh
        )
    } else {
        format!("priced at \u{20b9}{:.2} lakh", facts.price_low_lakh)
    };
    let positioning = if rating > 8.5 {
        "it pushes hard at the premium end of its class"
    } else if rating > 7.5 {
        "it strikes a sensible balance between cost and capability"
    } else {
        "it keeps the conversation firmly about value"
    };
    format!(
        "The {} {} in the {}, and {}, {}.",
        facts.full_name,
        opener,
        facts.segment.label(),
        price_clause,
        positioning
    )
}

fn performance_paragraph(facts: &NormalizedFacts, lexicon: &Lexicon, seed: &str) -> String {
    let bank = if facts.max_power > 115.0 {
        &lexicon.performance_good
    } else {
        &lexicon.performance_modest
    };
    let adjective = pick_phrase(bank, &format!("{seed}performance"));

    // Torque is not quoted for electric drivetrains
    let output_clause = if facts.is_electric {
        format!("{} bhp", facts.max_power)
    } else {
        format!(
            "{} bhp and {} Nm of torque",
            facts.max_power, facts.max_torque
        )
    };

    let feel = if facts.max_power > 140.0 {
        "and it shows in how readily the car gathers speed"
    } else if facts.max_power > 95.0 {
        "which is adequately brisk for daily driving"
    } else {
        "so progress is leisurely rather than eager"
    };

    let mut paragraph = format!(
        "Performance is {}: the strongest trim puts out {}, {}.",
        adjective, output_clause, feel
    );
    if facts.is_automatic_available && !facts.is_electric {
        paragraph.push_str(" An automatic option takes the sting out of city traffic.");
    }
    paragraph
}

fn efficiency_paragraph(facts: &NormalizedFacts, lexicon: &Lexicon, seed: &str) -> String {
    let strong = if facts.is_electric {
        facts.efficiency > 350.0
    } else {
        facts.efficiency > 18.0
    };
    let bank = if strong {
        &lexicon.efficiency_good
    } else {
        &lexicon.efficiency_modest
    };
    let adjective = pick_phrase(bank, &format!("{seed}efficiency"));

    let metric = if facts.is_electric {
        format!("{} km on a full charge", facts.efficiency)
    } else {
        format!("a claimed {} kmpl", facts.efficiency)
    };

    let mut paragraph = format!("Running costs look {}, with {}.", adjective, metric);

    let frugal = if facts.is_electric {
        facts.efficiency > 400.0
    } else {
        facts.efficiency > 18.0
    };
    if frugal {
        paragraph.push_str(" That is frugal enough to flatter the monthly fuel bill.");
    }
    paragraph
}

fn safety_paragraph(facts: &NormalizedFacts) -> String {
    let qualifier = if facts.safety_stars >= 4 {
        "reassuring"
    } else {
        "standard"
    };
    format!(
        "Crash-test credentials are covered by a {}-star Global NCAP rating, which reads as {} for the segment.",
        facts.safety_stars, qualifier
    )
}

fn verdict_paragraph(rating: f64, lexicon: &Lexicon, seed: &str) -> String {
    let (bank, closer) = if rating > 8.0 {
        (&lexicon.verdict_top, lexicon.verdict_closer_top.as_str())
    } else if rating > 7.0 {
        (&lexicon.verdict_mid, lexicon.verdict_closer_mid.as_str())
    } else {
        (&lexicon.verdict_low, lexicon.verdict_closer_low.as_str())
    };
    let tone = pick_phrase(bank, &format!("{seed}verdict"));
    format!("All things weighed, this {}. {}", tone, closer)
}
