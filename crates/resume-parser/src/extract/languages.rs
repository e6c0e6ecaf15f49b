//! Spoken-language extraction: a small windowed scan below the first line
//! that mentions "language".

use crate::text::is_all_caps;

/// Spoken languages recognized inside a language section.
const SPOKEN_LANGUAGES: &[&str] = &[
    "English", "Hindi", "Spanish", "French", "German", "Punjabi", "Tamil", "Telugu",
];

/// How many lines below the section line are scanned.
const LANGUAGE_WINDOW: usize = 5;

/// Returns spoken languages listed under the first line containing
/// "language" (case-insensitive), sorted and deduplicated.
///
/// The scan covers up to [`LANGUAGE_WINDOW`] lines below the section line
/// and stops early at an all-caps line longer than 3 characters (the next
/// section header). The stopping line is still scanned first, since some
/// layouts put "ENGLISH, HINDI" directly in caps.
pub fn extract_languages(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();

    let Some(start) = lines
        .iter()
        .position(|line| line.to_lowercase().contains("language"))
    else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for line in lines.iter().skip(start + 1).take(LANGUAGE_WINDOW) {
        let line = line.trim();
        let line_lower = line.to_lowercase();
        for lang in SPOKEN_LANGUAGES {
            if line_lower.contains(&lang.to_lowercase()) {
                found.push(lang.to_string());
            }
        }
        if is_all_caps(line) && line.chars().count() > 3 {
            break;
        }
    }

    found.sort();
    found.dedup();
    found
}
