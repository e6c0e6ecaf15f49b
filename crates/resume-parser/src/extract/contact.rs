//! Contact-detail extractors: email, phone, location, GitHub profile.
//!
//! All four are stateless regex scans over the full text. PDF text extraction
//! often injects whitespace inside tokens, so the email scan retries on
//! progressively more aggressive de-spaced views of the text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Email shape restricted to a whitelist of domain suffixes, so trailing
/// resume text glued onto the address by the extractor cannot extend the
/// match ("john@xyz.comEDUCATION" still yields "john@xyz.com").
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.(?:com|in|org|net|edu|co|gov|mil)")
        .unwrap()
});

/// Phone patterns tried in order: country-code grouped, country-code compact,
/// bare 10-digit run, parenthesized country code.
static PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\+91[-\s]?\d{3}[-\s]?\d{3}[-\s]?\d{4}",
        r"\+91[-\s]?\d{10}",
        r"\d{10}",
        r"\(\+91\)[-\s]?\d{10}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// `City, Region` token pair, optionally followed by a parenthesized number
/// (postal codes rendered that way by some templates).
static LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]+,\s*[A-Z][a-z]+(?:\s*\(\d+\))?").unwrap());

static GITHUB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://github\.com/[\w-]+").unwrap());

/// Extracts the first email address, tolerating whitespace injected into the
/// address by upstream text extraction.
///
/// Three passes, first hit wins:
/// 1. direct search over the raw text
/// 2. search over the text with all whitespace removed
/// 3. search over a window around the first `@` (30 chars before, 40 after)
///    with spaces and newlines removed
pub fn extract_email(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    if let Some(m) = EMAIL_RE.find(text) {
        return Some(m.as_str().to_string());
    }

    let squeezed: String = text.split_whitespace().collect();
    if let Some(m) = EMAIL_RE.find(&squeezed) {
        return Some(m.as_str().to_string());
    }

    let chars: Vec<char> = text.chars().collect();
    if let Some(at) = chars.iter().position(|&c| c == '@') {
        let start = at.saturating_sub(30);
        let end = (at + 40).min(chars.len());
        let chunk: String = chars[start..end]
            .iter()
            .filter(|&&c| c != '\n' && c != ' ')
            .collect();
        if let Some(m) = EMAIL_RE.find(&chunk) {
            return Some(m.as_str().to_string());
        }
    }

    None
}

/// Extracts the first phone number matching any of the region patterns,
/// with spaces and hyphens stripped from the result.
pub fn extract_phone(text: &str) -> Option<String> {
    let text_clean = text.replace(['\n', '\r'], " ");

    for re in PHONE_RES.iter() {
        if let Some(m) = re.find(&text_clean) {
            return Some(m.as_str().replace([' ', '-'], ""));
        }
    }

    None
}

/// Extracts the first `City, Region` pair.
pub fn extract_location(text: &str) -> Option<String> {
    LOCATION_RE.find(text).map(|m| m.as_str().to_string())
}

/// Extracts the first GitHub profile URL.
pub fn extract_github(text: &str) -> Option<String> {
    GITHUB_RE.find(text).map(|m| m.as_str().to_string())
}
