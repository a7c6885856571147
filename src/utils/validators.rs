//! Input classification for questionnaire answers

use std::sync::LazyLock;

use regex::Regex;

/// Budget answers that carry no number but are still acceptable
const FLEXIBLE_BUDGET_KEYWORDS: &[&str] = &[
    "не принципиально",
    "непринципиально",
    "неважно",
    "не важно",
    "любой",
    "без ограничений",
    "гибкий",
    "flexible",
    "no limit",
];

/// Flexible budget keywords that only count as whole words
const FLEXIBLE_BUDGET_WORDS: &[&str] = &["any"];

/// Longest accepted answer, in characters. Eleven answers at this length still
/// fit the manager report into one Telegram message.
pub const MAX_ANSWER_CHARS: usize = 250;

/// Destination answer meaning "not decided yet"
const UNDECIDED_DESTINATION: &str = "пока не определились";

const CHILD_KEYWORDS: &[&str] = &["ребен", "ребён", "дет", "младен", "child", "kid", "infant"];

const NO_CHILD_PHRASES: &[&str] = &["без детей", "без ребенка", "без ребёнка", "no kids", "no children"];

const AFFIRMATIVE_TOKENS: &[&str] = &[
    "да", "yes", "ок", "ok", "okay", "подтверждаю", "confirm", "верно", "отправить", "отправляй",
];

const NEGATIVE_TOKENS: &[&str] = &["нет", "no", "заново", "перезаполнить"];

/// Words that turn the affirmative token right after them into a rejection
const NEGATORS: &[&str] = &["не", "not"];

static COUNTRY_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:[/,;+]|\b(?:и|или|and|or)\b)\s*").expect("country separator regex is valid")
});

/// Answer to the final "is everything correct?" question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirm,
    Reject,
    Unknown,
}

/// Budget must mention a number or explicitly say it is flexible
pub fn validate_budget(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    if text.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }

    let lowered = text.to_lowercase();
    FLEXIBLE_BUDGET_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
        || words(&lowered).any(|word| FLEXIBLE_BUDGET_WORDS.contains(&word))
}

/// Answers longer than [`MAX_ANSWER_CHARS`] are rejected
pub fn validate_answer_length(text: &str) -> bool {
    text.chars().count() <= MAX_ANSWER_CHARS
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}

/// Split a free-form destination answer into individual place names.
///
/// Order and duplicates are preserved; empty parts and the "undecided"
/// answer are dropped.
pub fn split_countries(text: &str) -> Vec<String> {
    COUNTRY_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter(|part| part.to_lowercase() != UNDECIDED_DESTINATION)
        .map(str::to_string)
        .collect()
}

/// Whether the travelers answer mentions children
pub fn mentions_children(text: &str) -> bool {
    let lowered = text.to_lowercase();
    if NO_CHILD_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
        return false;
    }
    CHILD_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Classify a confirmation answer by its words.
///
/// An affirmative word preceded by a negator ("не верно", "not ok") counts as a
/// rejection. Answers carrying both signals are `Unknown` so the question is asked
/// again instead of sending or discarding the request.
pub fn classify_confirmation(text: &str) -> Confirmation {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = words(&lowered).collect();

    let mut confirm = false;
    let mut reject = false;
    for (i, token) in tokens.iter().enumerate() {
        if NEGATIVE_TOKENS.contains(token) {
            reject = true;
        } else if AFFIRMATIVE_TOKENS.contains(token) {
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1]);
            if negated {
                reject = true;
            } else {
                confirm = true;
            }
        }
    }

    match (confirm, reject) {
        (true, false) => Confirmation::Confirm,
        (false, true) => Confirmation::Reject,
        _ => Confirmation::Unknown,
    }
}
