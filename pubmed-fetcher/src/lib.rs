//! # PubMed Fetcher
//!
//! Searches PubMed through the NCBI E-utilities API, fetches paper metadata
//! and flags authors whose affiliation looks industry-affiliated.
//!
//! ## Features
//!
//! - **Search**: free-text query to an ordered PMID list (ESearch)
//! - **Details**: one batched ESummary request per identifier list
//! - **Affiliation classification**: keyword match over author affiliations
//! - **Report rows**: flattened, `"N/A"`-defaulted rows ready for CSV output
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_fetcher::{ClientConfig, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::with_config(ClientConfig::new().with_max_results(50));
//!
//!     for row in client.fetch_report("cancer immunotherapy").await? {
//!         println!("{} | {} | {}", row.pubmed_id, row.non_academic_authors, row.company_affiliations);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod affiliation;
pub mod config;
pub mod error;
pub mod pubmed;
pub mod report;

// Re-export main types for convenience
pub use affiliation::{classify_non_academic, is_non_academic};
pub use config::ClientConfig;
pub use error::{FetchError, Result};
pub use pubmed::{Author, PaperRecord, PubMedClient};
pub use report::{ResultRow, build_report};
