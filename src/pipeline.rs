use chrono::Utc;
use scraper::Html;
use tracing::{error, info, warn};

use crate::constants::WIKI_TEMPLES_URL;
use crate::detail::DetailScraper;
use crate::error::Result;
use crate::fetch::{parse_html, PageFetcher};
use crate::listing::{self, ListingRow};
use crate::types::{
    AddressRecord, RunSummary, SectionReport, TempleRecord, TempleStatus, TempleStub,
};

/// Options for a scrape run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Cap on temples per section, for smoke runs.
    pub limit: Option<usize>,
    /// Extract the listing only; skip the per-temple detail fetches.
    pub skip_details: bool,
}

/// Sequential two-stage scrape: listing rows per status section, then one
/// locator detail fetch per temple, strictly one at a time.
pub struct Pipeline<'a> {
    fetcher: &'a dyn PageFetcher,
}

impl<'a> Pipeline<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher) -> Self {
        Self { fetcher }
    }

    /// Run the scrape for the requested sections.
    ///
    /// A section whose heading cannot be found is reported and skipped; a
    /// temple that fails to enrich is reported and skipped. Records
    /// accumulated before a failure are kept.
    pub async fn run(&self, sections: &[TempleStatus], options: RunOptions) -> Result<RunSummary> {
        let started_at = Utc::now();

        info!("Fetching listing page: {}", WIKI_TEMPLES_URL);
        let body = self.fetcher.fetch_html(WIKI_TEMPLES_URL).await?;
        let document = parse_html(&body, WIKI_TEMPLES_URL)?;

        let mut reports = Vec::with_capacity(sections.len());
        for &status in sections {
            reports.push(self.run_section(&document, status, options).await);
        }

        Ok(RunSummary {
            started_at,
            sections: reports,
        })
    }

    async fn run_section(
        &self,
        document: &Html,
        status: TempleStatus,
        options: RunOptions,
    ) -> SectionReport {
        info!("Extracting section: {}", status);
        let mut report = SectionReport {
            status,
            temples: Vec::new(),
            failures: Vec::new(),
        };

        let rows = match listing::extract_section(document, status) {
            Ok(rows) => rows,
            Err(e) => {
                error!("Section {} extraction failed: {}", status, e);
                report.failures.push(e.to_string());
                return report;
            }
        };

        let detail = DetailScraper::new(self.fetcher);
        let limit = options.limit.unwrap_or(usize::MAX);

        for row in rows.into_iter().take(limit) {
            match row {
                Ok(row) => {
                    let name = row.name.clone();
                    match self.build_record(&detail, row, options.skip_details).await {
                        Ok(record) => report.temples.push(record),
                        Err(e) => {
                            warn!("Skipping temple '{}' in {}: {}", name, status, e);
                            report.failures.push(format!("{name}: {e}"));
                        }
                    }
                }
                Err(e) => {
                    warn!("Skipping listing row in {}: {}", status, e);
                    report.failures.push(e.to_string());
                }
            }
        }

        info!(
            "Section {}: {} temples, {} failures",
            status,
            report.temples.len(),
            report.failures.len()
        );
        report
    }

    /// Resolve the row's image link and merge in the locator address fields.
    async fn build_record(
        &self,
        detail: &DetailScraper<'_>,
        row: ListingRow,
        skip_details: bool,
    ) -> Result<TempleRecord> {
        let image_link = match &row.image_page_href {
            Some(href) => Some(listing::resolve_image(self.fetcher, href).await?),
            None => None,
        };
        let stub = TempleStub {
            name: row.name,
            image_link,
        };

        let address = if skip_details {
            AddressRecord::default()
        } else {
            detail.fetch_address(&stub.name).await?
        };

        Ok(TempleRecord::from_parts(stub, address))
    }
}
