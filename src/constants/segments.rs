//! Segment labels keyed by body type

use crate::domain::model::Segment;

/// Keyword table, first match wins. "luxury" leads so that a luxury body
/// string beats its base style ("Luxury Sedan" reads as luxury tier).
const SEGMENT_KEYWORDS: &[(&str, Segment)] = &[
    ("luxury", Segment::Luxury),
    ("suv", Segment::Suv),
    ("sedan", Segment::Sedan),
    ("hatch", Segment::Hatchback),
    ("mpv", Segment::Mpv),
];

/// Map a free-form body type to its segment, case-insensitive.
pub fn segment_for(body_type: &str) -> Segment {
    let lowered = body_type.to_lowercase();
    for (keyword, segment) in SEGMENT_KEYWORDS {
        if lowered.contains(keyword) {
            return *segment;
        }
    }
    Segment::Market
}
