use thiserror::Error;

/// Boundary errors for a parse attempt.
///
/// Extraction itself never fails — a field that cannot be found is simply
/// absent from the record. Errors exist only at the document boundary:
/// text that is missing or too short to be a resume, or an input the
/// upstream text-extraction service could not classify.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not extract text from file or file is empty")]
    EmptyText,

    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
}
