//! Project builder: section-scoped scan with layered line classification.
//!
//! Inside the PROJECTS section each non-blank line is classified by the first
//! matching rule:
//! 1. pipe-delimited `Title | Tech` — always starts a new entry
//! 2. tech-indicator line ("using", "with ", "technologies:") — names a new
//!    entry, or fills the open entry's technologies, or joins the description
//! 3. standalone-title heuristic — starts a new entry
//! 4. anything else — joins the open entry's description
//!
//! The section terminates at the first all-caps header that is not about
//! projects; the scan stops entirely there, and an open entry is committed
//! exactly once.

use tracing::debug;

use crate::models::ProjectEntry;
use crate::text::{is_all_caps, starts_uppercase};

/// Past-tense achievement verbs. A line starting with one of these reads as
/// a bullet, not a title.
const ACHIEVEMENT_VERBS: &[&str] = &["developed", "created", "built", "implemented", "designed"];

/// Connective words that mark prose; a title containing one is really a
/// description line. Matched by containment, same as the title heuristic's
/// other checks.
const CONNECTIVE_WORDS: &[&str] = &["the", "this", "that", "which", "where", "and implemented"];

/// Tokens that flag a line as naming technologies.
const TECH_INDICATORS: &[&str] = &["using", "with ", "technologies:"];

/// Headers are short all-caps lines.
const MAX_HEADER_LEN: usize = 30;

/// Titles rarely run past this many whitespace-separated tokens.
const MAX_TITLE_TOKENS: usize = 10;

/// Extracts project entries in document order. The scan covers only the
/// PROJECTS section and ends at the next section header.
pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
    let mut projects = Vec::new();
    let mut in_section = false;
    let mut current: Option<ProjectEntry> = None;

    for line in text.lines() {
        let line = line.trim();
        let line_lower = line.to_lowercase();
        let line_len = line.chars().count();

        if line_lower.contains("project") && line_len < MAX_HEADER_LEN && is_all_caps(line) {
            debug!("found projects section");
            in_section = true;
            continue;
        }

        // Any other short all-caps header terminates the project scan
        if in_section
            && is_all_caps(line)
            && line_len > 3
            && line_len < MAX_HEADER_LEN
            && !line_lower.contains("project")
        {
            debug!("exiting projects section at: {line}");
            commit(&mut projects, &mut current);
            break;
        }

        if !in_section || line.is_empty() {
            continue;
        }

        if let Some((name, tech)) = line.split_once('|') {
            // Rule 1: pipe-delimited title always opens a new entry
            commit(&mut projects, &mut current);
            current = Some(ProjectEntry {
                name: name.trim().to_string(),
                technologies: tech.trim().to_string(),
                description: String::new(),
            });
        } else if TECH_INDICATORS.iter().any(|ind| line_lower.contains(ind)) {
            // Rule 2: tech indicator names a new entry or fills technologies
            match current.as_mut() {
                None => {
                    current = Some(ProjectEntry {
                        name: line.to_string(),
                        ..Default::default()
                    });
                }
                Some(entry) if entry.technologies.is_empty() => {
                    entry.technologies = line.to_string();
                }
                Some(entry) => entry.push_description(line),
            }
        } else if line_len > 15
            && starts_uppercase(line)
            && !ACHIEVEMENT_VERBS.iter().any(|v| line_lower.starts_with(v))
        {
            // Rule 3: standalone title, unless it reads like prose
            let looks_like_prose = CONNECTIVE_WORDS.iter().any(|w| line_lower.contains(w))
                || line.split_whitespace().count() > MAX_TITLE_TOKENS;
            if looks_like_prose {
                if let Some(entry) = current.as_mut() {
                    entry.push_description(line);
                }
            } else {
                commit(&mut projects, &mut current);
                current = Some(ProjectEntry {
                    name: line.to_string(),
                    ..Default::default()
                });
            }
        } else if let Some(entry) = current.as_mut() {
            // Rule 4: description fallback
            entry.push_description(line);
        }
    }

    commit(&mut projects, &mut current);
    projects
}

/// Commits the open draft if it is worth keeping. `take` guarantees a draft
/// is committed at most once.
fn commit(projects: &mut Vec<ProjectEntry>, current: &mut Option<ProjectEntry>) {
    if let Some(entry) = current.take() {
        if entry.is_valid() {
            debug!("added project: {}", entry.name);
            projects.push(entry);
        }
    }
}
