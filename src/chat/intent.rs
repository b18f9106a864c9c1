//! Message classification for the chat assistant

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::normalize_key;

const US_STATES: &[&str] = &[
    "alabama", "alaska", "arizona", "arkansas", "california", "colorado", "connecticut",
    "delaware", "florida", "georgia", "hawaii", "idaho", "illinois", "indiana", "iowa",
    "kansas", "kentucky", "louisiana", "maine", "maryland", "massachusetts", "michigan",
    "minnesota", "mississippi", "missouri", "montana", "nebraska", "nevada", "new hampshire",
    "new jersey", "new mexico", "new york", "north carolina", "north dakota", "ohio",
    "oklahoma", "oregon", "pennsylvania", "rhode island", "south carolina", "south dakota",
    "tennessee", "texas", "utah", "vermont", "virginia", "washington", "west virginia",
    "wisconsin", "wyoming",
];

const GREETINGS: &[&str] = &["hi", "hello", "hey", "hola", "yo", "howdy", "namaste"];

/// Minimum similarity for a fuzzy state match
pub const STATE_MATCH_CUTOFF: f64 = 0.88;

static BEST_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)best\s+time\s+to\s+visit\s+(.+)").expect("best-time pattern is valid")
});

static THINGS_TO_DO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:things|what)\s+to\s+do\s+in\s+(.+)|things\s+in\s+(.+)")
        .expect("things-to-do pattern is valid")
});

/// Which part of a place reply to lead with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    BestTime,
    Activities,
}

pub fn is_greeting(text: &str) -> bool {
    GREETINGS.contains(&normalize_key(text).as_str())
}

/// Split a message into an optional focus and the place it refers to
pub fn parse_focus(text: &str) -> (Option<Focus>, String) {
    let text = text.trim();

    if let Some(place) = BEST_TIME.captures(text).and_then(|c| c.get(1)) {
        return (Some(Focus::BestTime), place.as_str().trim().to_string());
    }

    if let Some(place) = THINGS_TO_DO
        .captures(text)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
    {
        return (Some(Focus::Activities), place.as_str().trim().to_string());
    }

    (None, text.to_string())
}

/// Recognize a US state name, tolerating small typos. Returns the
/// lowercase canonical name.
pub fn match_state(text: &str) -> Option<&'static str> {
    let key = normalize_key(text);
    if key.is_empty() || GREETINGS.contains(&key.as_str()) {
        return None;
    }

    if let Some(state) = US_STATES.iter().find(|s| **s == key) {
        return Some(*state);
    }

    US_STATES
        .iter()
        .map(|s| (*s, similarity(&key, s)))
        .filter(|(_, score)| *score >= STATE_MATCH_CUTOFF)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(s, _)| s)
}

/// Similarity in `[0, 1]`: twice the longest common subsequence over
/// the combined length
pub fn similarity(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }
    (2 * common_subsequence_len(a, b)) as f64 / total as f64
}

fn common_subsequence_len(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a.chars() {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == *cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Title-case each word: "grand canyon" -> "Grand Canyon"
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
