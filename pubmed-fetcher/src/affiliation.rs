//! Keyword-based detection of non-academic (industry) author affiliations

use crate::pubmed::models::Author;

/// Lowercase keywords whose presence marks an affiliation as non-academic
pub const NON_ACADEMIC_KEYWORDS: [&str; 5] = ["pharma", "biotech", "inc", "corp", "company"];

/// Whether an affiliation string looks like an industry affiliation
///
/// Case-insensitive substring match against [`NON_ACADEMIC_KEYWORDS`]. An
/// empty affiliation never matches.
///
/// ```
/// use pubmed_fetcher::affiliation::is_non_academic;
///
/// assert!(is_non_academic("Pfizer PHARMACEUTICALS"));
/// assert!(!is_non_academic("University of Oxford"));
/// ```
pub fn is_non_academic(affiliation: &str) -> bool {
    if affiliation.is_empty() {
        return false;
    }

    let lowered = affiliation.to_lowercase();
    NON_ACADEMIC_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Return the authors whose affiliation is non-academic, preserving order
pub fn classify_non_academic(authors: &[Author]) -> Vec<Author> {
    authors
        .iter()
        .filter(|author| is_non_academic(&author.affiliation))
        .cloned()
        .collect()
}
