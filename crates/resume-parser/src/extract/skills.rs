//! Skill extraction: case-insensitive containment scan of the whole text
//! against a fixed vocabulary. No section detection — skills can appear
//! anywhere (summary, experience bullets, a dedicated section).

/// Canonical skill vocabulary. Matching is case-insensitive; the casing here
/// is what ends up in the record.
const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "Node.js",
    "React",
    "Angular",
    "Vue",
    "MongoDB",
    "MySQL",
    "PostgreSQL",
    "SQL",
    "NoSQL",
    "JDBC",
    "Machine Learning",
    "AI",
    "Data Science",
    "Deep Learning",
    "AWS",
    "Azure",
    "Google Cloud",
    "Docker",
    "Kubernetes",
    "HTML",
    "CSS",
    "TypeScript",
    "C++",
    "C#",
    "PHP",
    "Git",
    "REST API",
    "RESTful API",
    "GraphQL",
    "Express",
    "Django",
    "Flask",
    "TensorFlow",
    "PyTorch",
    "NLP",
    "Computer Vision",
    "Bootstrap",
    "jQuery",
    "Next.js",
    "Spring Boot",
    "FastAPI",
    "Pandas",
    "NumPy",
    "Postman",
    "Github",
    "HTML5",
    "CSS3",
    "AJAX",
    "JSON",
    "Data Structures",
    "Algorithms",
    "OOP",
    "CRUD",
];

/// Returns every vocabulary skill mentioned anywhere in the text,
/// sorted and deduplicated, canonical casing preserved.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    let mut found: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    found.sort();
    found.dedup();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_comma_separated_skills() {
        let skills = extract_skills("SKILLS\nPython, React, SQL");
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"SQL".to_string()));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let skills = extract_skills("worked with python and DOCKER daily");
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_canonical_casing_preserved() {
        let skills = extract_skills("familiar with javascript and postgresql");
        assert!(skills.contains(&"JavaScript".to_string()));
        assert!(skills.contains(&"PostgreSQL".to_string()));
    }

    #[test]
    fn test_skills_found_outside_skill_section() {
        // Containment scan is section-agnostic
        let skills = extract_skills("EXPERIENCE\nBuilt dashboards in React.");
        assert!(skills.contains(&"React".to_string()));
    }

    #[test]
    fn test_result_is_sorted_and_deduplicated() {
        let skills = extract_skills("SQL everywhere: sql, SQL, Sql");
        assert_eq!(
            skills.iter().filter(|s| s.as_str() == "SQL").count(),
            1
        );
        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
    }

    #[test]
    fn test_no_skills_yields_empty() {
        assert!(extract_skills("I enjoy long walks on the beach").is_empty());
    }

    #[test]
    fn test_vocabulary_is_nonempty() {
        assert!(!SKILL_VOCABULARY.is_empty());
    }
}
