//! Education builder: a forward scan with a bounded lookahead window.
//!
//! Unlike the experience and project builders, there is no explicit section
//! state. Any line mentioning a degree keyword or an institution marker opens
//! a candidate entry; the next few lines are inspected for the degree, score,
//! and duration; the entry is committed only if it ends up naming a degree or
//! an institution.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::EducationEntry;
use crate::text::{is_all_caps, starts_uppercase};

/// Degree keywords. A line containing one both opens an entry and fills its
/// `degree` field inside the lookahead window.
const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "mca",
    "bca",
    "b.sc",
    "m.sc",
    "btech",
    "mtech",
    "intermediate",
    "matriculation",
    "diploma",
    "phd",
    "degree",
];

/// Institution and grading markers that also open an entry.
const INSTITUTION_MARKERS: &[&str] = &[
    "university",
    "college",
    "school",
    "institute",
    "cgpa",
    "percentage",
    "gpa",
];

/// Lines inspected per entry, counting the trigger line.
const LOOKAHEAD: usize = 6;

/// Lines skipped after a commit (the window minus the one the outer scan
/// re-reads anyway).
const COMMIT_ADVANCE: usize = 5;

/// A 4-digit year or a year range anywhere in the line.
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}\s*-\s*\d{4}|\d{4}").unwrap());

/// Extracts education entries in document order.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let lines: Vec<&str> = text.lines().collect();
    let mut education = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        let line_lower = line.to_lowercase();

        let triggered = DEGREE_KEYWORDS
            .iter()
            .chain(INSTITUTION_MARKERS)
            .any(|kw| line_lower.contains(kw));

        if triggered {
            let mut entry = EducationEntry::default();

            // Institutions are printed in ALL CAPS or Title Case
            if is_all_caps(line) || starts_uppercase(line) {
                entry.institution = Some(line.to_string());
            }

            for window_line in lines.iter().skip(i).take(LOOKAHEAD) {
                let current = window_line.trim();
                let current_lower = current.to_lowercase();

                if DEGREE_KEYWORDS.iter().any(|deg| current_lower.contains(deg)) {
                    entry.degree = Some(current.to_string());
                }
                if current_lower.contains("cgpa")
                    || current_lower.contains("percentage")
                    || current_lower.contains("gpa")
                {
                    entry.score = Some(current.to_string());
                }
                if YEAR_RE.is_match(current) {
                    entry.duration = Some(current.to_string());
                }
            }

            if entry.is_valid() {
                debug!("education entry committed at line {i}");
                education.push(entry);
                i += COMMIT_ADVANCE;
                continue;
            }
        }

        i += 1;
    }

    education
}
