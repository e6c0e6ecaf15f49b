// Extraction engine: one module per extractor.
// Each extractor is a pure function of the input text and performs its own
// full scan; none of them share state or depend on call order.

pub mod contact;
pub mod education;
pub mod experience;
pub mod languages;
pub mod name;
pub mod projects;
pub mod skills;

pub use contact::{extract_email, extract_github, extract_location, extract_phone};
pub use education::extract_education;
pub use experience::extract_experience;
pub use languages::extract_languages;
pub use name::extract_name;
pub use projects::extract_projects;
pub use skills::extract_skills;
