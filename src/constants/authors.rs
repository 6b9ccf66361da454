//! Reviewer roster
//!
//! Bylines are picked deterministically per vehicle, so the roster order
//! is part of the output contract once shipped.

/// (name, role) pairs
pub const AUTHOR_ROSTER: &[(&str, &str)] = &[
    ("Arjun Mehta", "Senior Road Test Editor"),
    ("Priya Nair", "Automotive Journalist"),
    ("Kabir Shah", "Chief Reviewer"),
    ("Ananya Iyer", "Consumer Affairs Editor"),
    ("Rohan Deshpande", "Road Test Engineer"),
];
