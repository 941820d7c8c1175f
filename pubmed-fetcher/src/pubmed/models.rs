use crate::pubmed::responses::{ESummaryAuthor, ESummaryDocSum};

/// Name used when upstream omits an author's name
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// An author as listed on a paper record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Display name (e.g. "Zhu N")
    pub name: String,
    /// Free-text affiliation; empty when unknown
    pub affiliation: String,
}

impl Author {
    pub fn new<N: Into<String>, A: Into<String>>(name: N, affiliation: A) -> Self {
        Self {
            name: name.into(),
            affiliation: affiliation.into(),
        }
    }

    pub(crate) fn from_summary(author: ESummaryAuthor) -> Self {
        Self {
            name: author.name.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            affiliation: author.affiliation.unwrap_or_default(),
        }
    }
}

/// Metadata for one paper as returned by ESummary
///
/// Scalar fields are `None` when the upstream document omits them; defaults
/// are substituted when the record is flattened into a
/// [`ResultRow`](crate::report::ResultRow).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaperRecord {
    /// PubMed ID (`uid`)
    pub id: Option<String>,
    /// Article title
    pub title: Option<String>,
    /// Publication date as reported upstream (`pubdate`), e.g. "2020 Feb"
    pub publication_date: Option<String>,
    /// Authors in upstream order
    pub authors: Vec<Author>,
    pub corresponding_author_email: Option<String>,
}

impl PaperRecord {
    pub(crate) fn from_summary(doc: ESummaryDocSum) -> Self {
        Self {
            id: doc.uid,
            title: doc.title,
            publication_date: doc.pubdate,
            authors: doc.authors.into_iter().map(Author::from_summary).collect(),
            corresponding_author_email: doc.corresponding_author_email,
        }
    }
}
