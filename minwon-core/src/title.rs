//! Complaint title synthesis: `[label] summary / short-address`.
//!
//! Summarization prefers a location word (역, 사거리, 아파트, …) over a
//! complaint-act word (주정차, 소음, …) over a plain truncation of the
//! first sentence, so the generated title names *where* before *what*.

use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::defaults;

/// Positional suffixes split off attached location words (역앞 → 역 앞).
fn position_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([가-힣]+)(앞|뒤|옆)($|[에은는이가을를\s])").expect("valid regex")
    })
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// First `n` characters of `s`, on a char boundary.
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Normalize a complaint body for summarization.
///
/// Splits attached positional suffixes and collapses runs of whitespace.
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let spaced = position_suffix_re().replace_all(text, "$1 $2$3");
    let spaced = spaced.replace("앞에", "앞");
    whitespace_re().replace_all(&spaced, " ").trim().to_string()
}

/// Summarize a complaint body into a short title fragment.
pub fn summarize_text(text: &str) -> String {
    if text.is_empty() {
        return defaults::TITLE_EMPTY_SUMMARY.to_string();
    }

    let normalized = normalize_text(text);

    let first_sentence = normalized
        .split(['.', '!', '?', '\n'])
        .next()
        .unwrap_or("")
        .trim();
    let first_sentence = if first_sentence.is_empty() {
        take_chars(&normalized, 30)
    } else {
        first_sentence
    };

    let words: Vec<&str> = first_sentence.unicode_words().collect();

    // Priority 1: location word, with its positional context if present.
    for word in &words {
        if defaults::TITLE_LOCATION_KEYWORDS
            .iter()
            .any(|loc| word.contains(loc))
        {
            let mut summary = (*word).to_string();
            for suffix in ["앞", "뒤", "옆"] {
                if first_sentence.contains(&format!("{word} {suffix}")) {
                    summary.push(' ');
                    summary.push_str(suffix);
                    break;
                }
            }
            return summary;
        }
    }

    // Priority 2: complaint-act word.
    for word in &words {
        if defaults::TITLE_COMPLAINT_KEYWORDS
            .iter()
            .any(|comp| word.contains(comp))
        {
            return (*word).to_string();
        }
    }

    // Priority 3: plain truncation.
    if first_sentence.chars().count() > defaults::TITLE_SUMMARY_MAX_CHARS {
        take_chars(first_sentence, defaults::TITLE_SUMMARY_MAX_CHARS)
            .trim()
            .to_string()
    } else {
        first_sentence.to_string()
    }
}

/// Shorten a full address to `province district`.
pub fn parse_address(address: &str) -> String {
    let address = address.trim();
    if address.is_empty() {
        return String::new();
    }

    let mut parts = address.split_whitespace();
    let (Some(city), Some(district)) = (parts.next(), parts.next()) else {
        return address.to_string();
    };

    let city = match city {
        "서울특별시" => "서울시",
        "제주특별자치도" => "제주도",
        "세종특별자치시" => "세종시",
        other => other,
    };

    format!("{city} {district}")
}

/// Compose the final title: `[label] summary / short-address`.
pub fn generate_title(text: &str, address: &str, label: &str) -> String {
    let mut summary = summarize_text(text);
    if summary.is_empty() {
        summary = defaults::TITLE_EMPTY_SUMMARY.to_string();
    }

    let short_address = parse_address(address);
    if short_address.is_empty() {
        format!("[{label}] {summary}")
    } else {
        format!("[{label}] {summary} / {short_address}")
    }
}
