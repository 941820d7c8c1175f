use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pubmed_fetcher::config::DEFAULT_MAX_RESULTS;
use pubmed_fetcher::pubmed::MAX_RETRIEVABLE;
use pubmed_fetcher::report::{NOT_AVAILABLE, REPORT_HEADERS};
use pubmed_fetcher::{PubMedClient, ResultRow};
use tracing::{debug, info};

use super::create_pubmed_client;

#[derive(Args, Debug)]
pub struct Fetch {
    /// Search query (PubMed query syntax is supported)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output CSV file; "-" writes to stdout
    #[arg(short, long, value_name = "FILE", default_value = "output.csv")]
    pub file: PathBuf,

    /// Maximum number of papers to fetch
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS, value_parser = parse_max_results)]
    pub max_results: usize,
}

impl Fetch {
    pub async fn execute_with_config(
        &self,
        api_key: Option<&str>,
        email: Option<&str>,
        tool: &str,
    ) -> Result<()> {
        let client = create_pubmed_client(api_key, email, tool, self.max_results)?;
        self.run(&client).await
    }

    /// Whether the CSV goes to standard output (`-f -`)
    pub fn writes_to_stdout(&self) -> bool {
        self.file.as_os_str() == "-"
    }

    /// Search, fetch and write the report; nothing is written unless both requests succeed
    async fn run(&self, client: &PubMedClient) -> Result<()> {
        info!("Fetching papers for query: {}", self.query);
        let ids = client.search_articles(&self.query, self.max_results).await?;
        info!("Found {} papers", ids.len());

        let records = client.fetch_details(&ids).await?;
        debug!(records = records.len(), "Fetched paper details");

        let rows = pubmed_fetcher::build_report(&records);
        let flagged = rows
            .iter()
            .filter(|row| row.non_academic_authors != NOT_AVAILABLE)
            .count();
        debug!(rows = rows.len(), flagged, "Classified author affiliations");

        self.output_results(&rows)?;
        if !self.writes_to_stdout() {
            info!("Results saved to {}", self.file.display());
        }

        Ok(())
    }

    fn output_results(&self, rows: &[ResultRow]) -> Result<()> {
        if self.writes_to_stdout() {
            return write_rows(io::stdout().lock(), rows);
        }

        let file = File::create(&self.file)
            .with_context(|| format!("Failed to create output file {}", self.file.display()))?;
        write_rows(file, rows)
            .with_context(|| format!("Failed to write CSV to {}", self.file.display()))
    }
}

fn parse_max_results(value: &str) -> Result<usize, String> {
    let max_results: usize = value
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", value))?;

    if max_results == 0 || max_results > MAX_RETRIEVABLE {
        return Err(format!("must be between 1 and {}", MAX_RETRIEVABLE));
    }

    Ok(max_results)
}

/// Write the header and one CSV record per row
pub fn write_rows<W: Write>(writer: W, rows: &[ResultRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(REPORT_HEADERS)
        .context("Failed to write CSV header")?;
    for row in rows {
        wtr.write_record(row.values())
            .context("Failed to write CSV record")?;
    }

    wtr.flush().context("Failed to flush CSV")?;
    Ok(())
}
