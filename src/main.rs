use std::path::PathBuf;

use clap::{Parser, Subcommand};

use temple_scraper::fetch::ReqwestFetcher;
use temple_scraper::logging;
use temple_scraper::output::{self, OutputFormat};
use temple_scraper::pipeline::{Pipeline, RunOptions};
use temple_scraper::types::{RunSummary, TempleStatus};

#[derive(Parser)]
#[command(name = "temple_scraper")]
#[command(about = "Temple directory scraper: Wikipedia listing cross-referenced with locator detail pages")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the listing and enrich every temple with locator details
    Scrape {
        /// Sections to scrape (repeatable). Default: all three
        #[arg(long = "section", value_enum)]
        sections: Vec<TempleStatus>,
        /// Max temples per section
        #[arg(long)]
        limit: Option<usize>,
        /// Skip the per-temple detail fetches
        #[arg(long)]
        skip_details: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Write records to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Extract listing stubs only, without any detail fetches
    Listing {
        /// Sections to extract (repeatable). Default: all three
        #[arg(long = "section", value_enum)]
        sections: Vec<TempleStatus>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Write records to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let fetcher = ReqwestFetcher::new();
    let pipeline = Pipeline::new(&fetcher);

    match cli.command {
        Commands::Scrape {
            sections,
            limit,
            skip_details,
            format,
            output,
        } => {
            let sections = resolve_sections(sections);
            println!("🕷️  Scraping {} section(s)...", sections.len());
            let summary = pipeline
                .run(&sections, RunOptions { limit, skip_details })
                .await?;
            output::write_summary(&summary, format, output.as_deref())?;
            report_run(&summary);
        }
        Commands::Listing {
            sections,
            format,
            output,
        } => {
            let sections = resolve_sections(sections);
            println!("🕷️  Extracting listing for {} section(s)...", sections.len());
            let options = RunOptions {
                limit: None,
                skip_details: true,
            };
            let summary = pipeline.run(&sections, options).await?;
            output::write_summary(&summary, format, output.as_deref())?;
            report_run(&summary);
        }
    }

    Ok(())
}

fn resolve_sections(selected: Vec<TempleStatus>) -> Vec<TempleStatus> {
    if selected.is_empty() {
        TempleStatus::ALL.to_vec()
    } else {
        selected
    }
}

fn report_run(summary: &RunSummary) {
    for section in &summary.sections {
        println!(
            "📊 {}: {} temples, {} failures",
            section.status,
            section.temples.len(),
            section.failures.len()
        );
        if !section.failures.is_empty() {
            println!("⚠️  Failures in {}:", section.status);
            for failure in &section.failures {
                println!("   - {failure}");
            }
        }
    }
}
