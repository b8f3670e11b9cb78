//! Compact set notation.
//!
//! `"12x3@50, 15x2"` means three sets of 12 reps at 50 followed by two sets of
//! 15 reps without weight. Parsing is best-effort: each comma-separated token
//! contributes its first `<reps>x<count>[@<weight>]` match, anything else is
//! dropped, and the parser never fails.

use std::sync::LazyLock;

use regex::Regex;

/// Upper bound on the number of sets one message may expand into.
pub const MAX_SETS_PER_BATCH: u32 = 100;

static SET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*[xX]\s*([0-9]+)(?:\s*@\s*([0-9.]*))?")
        .expect("set pattern is a valid regex")
});

/// One `<reps>x<count>[@<weight>]` token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetNotation {
    pub reps: u32,
    pub count: u32,
    pub weight: Option<f64>,
}

/// A single set produced by [`expand`], numbered within its batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedSet {
    pub set_index: u32,
    pub reps: u32,
    pub weight: Option<f64>,
}

pub fn parse_sets(input: &str) -> Vec<SetNotation> {
    input.split(',').filter_map(parse_token).collect()
}

fn parse_token(token: &str) -> Option<SetNotation> {
    let caps = SET_PATTERN.captures(token.trim())?;
    let reps = parse_positive(&caps[1])?;
    let count = parse_positive(&caps[2])?;
    let weight = caps.get(3).and_then(|m| parse_weight(m.as_str()));

    Some(SetNotation {
        reps,
        count,
        weight,
    })
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.parse().ok().filter(|n| *n > 0)
}

// A bad weight only loses the weight, never the token.
fn parse_weight(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|w| w.is_finite())
}

/// Number of sets [`expand`] would produce, without allocating them.
pub fn total_sets(notations: &[SetNotation]) -> u64 {
    notations.iter().map(|n| u64::from(n.count)).sum()
}

/// Expands each notation into `count` individual sets, numbering them from 1
/// across the whole batch.
pub fn expand(notations: &[SetNotation]) -> Vec<PlannedSet> {
    notations
        .iter()
        .flat_map(|n| (0..n.count).map(move |_| (n.reps, n.weight)))
        .zip(1..)
        .map(|((reps, weight), set_index)| PlannedSet {
            set_index,
            reps,
            weight,
        })
        .collect()
}
