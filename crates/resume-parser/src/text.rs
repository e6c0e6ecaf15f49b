//! Line-level helpers shared by the section scanners.

/// True if the line has at least one cased character and none of them are
/// lowercase. Section headers in most resume layouts are written this way
/// ("EDUCATION", "WORK EXPERIENCE").
pub(crate) fn is_all_caps(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// True if the first character of the line is uppercase.
pub(crate) fn starts_uppercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}

/// Title-cases a string: a letter following a non-letter is uppercased,
/// every other letter is lowercased. Non-letters pass through unchanged,
/// so "O'BRIEN" becomes "O'Brien".
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_was_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(c);
            prev_was_letter = false;
        }
    }
    out
}
