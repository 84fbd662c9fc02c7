use scraper::{ElementRef, Html};
use tracing::debug;

use crate::constants::WIKI_BASE_URL;
use crate::error::{Result, ScraperError};
use crate::fetch::{parse_html, PageFetcher};
use crate::selectors::SELECTORS;
use crate::types::TempleStatus;

/// One listing row, before the image link has been chased to the file page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub name: String,
    pub image_page_href: Option<String>,
}

/// Extract every row of one status section from the parsed listing page.
///
/// The section runs from the heading carrying the status' span id up to the
/// next `h3` sibling; every `tr.vcard` inside the tables in that span is one
/// temple. The outer error means the heading itself was not found (the
/// listing layout changed); per-row results are reported individually so one
/// malformed row cannot sink its section.
pub fn extract_section(document: &Html, status: TempleStatus) -> Result<Vec<Result<ListingRow>>> {
    let heading_span = document
        .select(SELECTORS.heading(status))
        .next()
        .ok_or_else(|| {
            ScraperError::MissingElement(format!("section heading '{}'", status.section_id()))
        })?;
    let heading = heading_span
        .parent()
        .and_then(ElementRef::wrap)
        .ok_or_else(|| {
            ScraperError::MissingElement(format!(
                "heading element around '{}'",
                status.section_id()
            ))
        })?;

    let mut rows = Vec::new();
    for sibling in heading.next_siblings() {
        let Some(element) = ElementRef::wrap(sibling) else {
            continue;
        };
        match element.value().name() {
            // the next section heading ends this section
            "h3" => break,
            "table" => {
                for row in element.select(&SELECTORS.listing_row) {
                    rows.push(parse_row(&row));
                }
            }
            _ => {}
        }
    }

    debug!("Section {}: {} rows", status, rows.len());
    Ok(rows)
}

/// Parse a single `tr.vcard` row into a listing entry.
///
/// The name comes from the linked title when the row has a link; announced
/// temples often do not have one yet, so fall back to the bare span text.
fn parse_row(row: &ElementRef) -> Result<ListingRow> {
    let name = match row
        .select(&SELECTORS.name_link)
        .next()
        .and_then(|link| link.value().attr("title"))
    {
        Some(title) => title.to_string(),
        None => row
            .select(&SELECTORS.name_span)
            .next()
            .map(|span| span.text().collect::<String>())
            .ok_or_else(|| ScraperError::MissingElement("temple name".into()))?,
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ScraperError::MissingElement("temple name".into()));
    }
    let name = name.strip_suffix(" Temple").unwrap_or(name);

    let image_page_href = row
        .select(&SELECTORS.image_page_link)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(str::to_string);

    Ok(ListingRow {
        name: name.to_string(),
        image_page_href,
    })
}

/// Follow a listing row's image-page link to the full-size image URL on the
/// file description page.
pub async fn resolve_image(fetcher: &dyn PageFetcher, image_page_href: &str) -> Result<String> {
    let url = format!("{WIKI_BASE_URL}{image_page_href}");
    let body = fetcher.fetch_html(&url).await?;
    let document = parse_html(&body, &url)?;

    let href = document
        .select(&SELECTORS.full_image_link)
        .next()
        .and_then(|link| link.value().attr("href"))
        .ok_or_else(|| ScraperError::MissingElement(format!("full image link on {url}")))?;

    Ok(qualify_scheme(href))
}

/// File pages publish protocol-relative image URLs; qualify them so the
/// records carry fetchable links.
fn qualify_scheme(href: &str) -> String {
    match href.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => href.to_string(),
    }
}
