//! Flattening of paper records into tabular report rows

use crate::affiliation::classify_non_academic;
use crate::pubmed::models::PaperRecord;

/// Placeholder written for absent fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Separator used for multi-value columns
pub const MULTI_VALUE_SEPARATOR: &str = "; ";

/// Column headers, in output order
pub const REPORT_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// One output row: a paper plus its non-academic authors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub pubmed_id: String,
    pub title: String,
    pub publication_date: String,
    pub non_academic_authors: String,
    pub company_affiliations: String,
    pub corresponding_author_email: String,
}

impl ResultRow {
    /// Classify the record's authors and flatten it into a row
    pub fn from_record(record: &PaperRecord) -> Self {
        let flagged = classify_non_academic(&record.authors);

        let (non_academic_authors, company_affiliations) = if flagged.is_empty() {
            (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
        } else {
            (
                flagged
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect::<Vec<_>>()
                    .join(MULTI_VALUE_SEPARATOR),
                flagged
                    .iter()
                    .map(|a| a.affiliation.as_str())
                    .collect::<Vec<_>>()
                    .join(MULTI_VALUE_SEPARATOR),
            )
        };

        Self {
            pubmed_id: or_not_available(record.id.as_deref()),
            title: or_not_available(record.title.as_deref()),
            publication_date: or_not_available(record.publication_date.as_deref()),
            non_academic_authors,
            company_affiliations,
            corresponding_author_email: or_not_available(
                record.corresponding_author_email.as_deref(),
            ),
        }
    }

    /// Row values in [`REPORT_HEADERS`] order
    pub fn values(&self) -> [&str; 6] {
        [
            self.pubmed_id.as_str(),
            self.title.as_str(),
            self.publication_date.as_str(),
            self.non_academic_authors.as_str(),
            self.company_affiliations.as_str(),
            self.corresponding_author_email.as_str(),
        ]
    }
}

/// Build report rows for a list of records, preserving order
pub fn build_report(records: &[PaperRecord]) -> Vec<ResultRow> {
    records.iter().map(ResultRow::from_record).collect()
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}
