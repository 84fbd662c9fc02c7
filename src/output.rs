use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::types::{RunSummary, TempleRecord, TempleStatus};

/// How scraped records are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Per-section listing for reading in a terminal.
    Text,
    /// One JSON object per record, status included.
    Json,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    status: TempleStatus,
    #[serde(flatten)]
    record: &'a TempleRecord,
}

/// Write the run's records in the requested format, to stdout or a file.
pub fn write_summary(
    summary: &RunSummary,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            render(summary, format, &mut file)
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            render(summary, format, &mut handle)
        }
    }
}

fn render(summary: &RunSummary, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            for section in &summary.sections {
                for record in &section.temples {
                    let line = serde_json::to_string(&JsonRecord {
                        status: section.status,
                        record,
                    })?;
                    writeln!(out, "{line}")?;
                }
            }
        }
        OutputFormat::Text => {
            for section in &summary.sections {
                writeln!(out, "{}", section.status)?;
                writeln!(out, "------------------")?;
                for record in &section.temples {
                    render_record(record, out)?;
                }
                writeln!(out, "{} count: {}", section.status, section.temples.len())?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn render_record(record: &TempleRecord, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", record.name)?;
    if let Some(image) = &record.image_link {
        writeln!(out, "    image:    {image}")?;
    }
    if let Some(lines) = &record.address.physical_addr {
        writeln!(out, "    physical: {}", lines.join(", "))?;
    }
    if let Some(lines) = &record.address.mailing_addr {
        writeln!(out, "    mailing:  {}", lines.join(", "))?;
    }
    if let Some(phone) = &record.address.phone {
        writeln!(out, "    phone:    {phone}")?;
    }
    if let Some(fax) = &record.address.fax {
        writeln!(out, "    fax:      {fax}")?;
    }
    if let Some(notice) = &record.address.notice {
        writeln!(out, "    notice:   {notice}")?;
    }
    Ok(())
}
