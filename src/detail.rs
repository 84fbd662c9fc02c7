use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::constants::detail_url;
use crate::error::Result;
use crate::fetch::{parse_html, PageFetcher};
use crate::selectors::SELECTORS;
use crate::slug::derive_slug;
use crate::types::AddressRecord;

static FAX_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Facsimile:\s*").unwrap());

/// Scrapes the locator's per-temple detail page.
pub struct DetailScraper<'a> {
    fetcher: &'a dyn PageFetcher,
}

impl<'a> DetailScraper<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher) -> Self {
        Self { fetcher }
    }

    /// Fetch the detail page for a temple name and extract its address and
    /// contact fields.
    pub async fn fetch_address(&self, name: &str) -> Result<AddressRecord> {
        let slug = derive_slug(name);
        let url = detail_url(&slug);
        debug!("Fetching locator details for '{}' at {}", name, url);

        let body = self.fetcher.fetch_html(&url).await?;
        let document = parse_html(&body, &url)?;
        Ok(parse_address(&document))
    }
}

/// Extract address fields from a parsed detail page.
///
/// The address details live under one of two containers depending on the
/// page layout; most under-construction and announced temples publish
/// neither, which yields an all-absent record. Within the container there
/// are up to three subsections:
///   1 - physical address only
///   2 - physical + mailing; phone and fax share the mailing subsection's
///       last list
///   3 - physical, mailing, and phone/fax each in their own subsection
pub fn parse_address(document: &Html) -> AddressRecord {
    let mut record = AddressRecord::default();

    let details = document
        .select(&SELECTORS.addr_details)
        .next()
        .or_else(|| document.select(&SELECTORS.addr_details_fallback).next());
    let Some(details) = details else {
        return record;
    };

    let columns: Vec<ElementRef> = details.select(&SELECTORS.addr_column).collect();

    if let Some(physical) = columns.first() {
        record.physical_addr = Some(line_items(physical, &SELECTORS.line_item));
    }

    if let Some(mailing) = columns.get(1) {
        record.mailing_addr = Some(line_items(mailing, &SELECTORS.mailing_item));

        let phone_fax = match columns.get(2) {
            Some(contact) => line_items(contact, &SELECTORS.line_item),
            None => last_list_items(mailing),
        };
        record.phone = phone_fax.first().cloned();
        record.fax = phone_fax
            .get(1)
            .map(|fax| FAX_LABEL.replace(fax, "").into_owned());
    }

    record.notice = details
        .select(&SELECTORS.notice)
        .next()
        .map(|div| div.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty());

    record
}

/// Ordered line-item text values within a subsection.
fn line_items(element: &ElementRef, selector: &Selector) -> Vec<String> {
    element
        .select(selector)
        .map(|li| li.text().collect::<String>().trim().to_string())
        .collect()
}

/// Phone and fax sit in the last list of a subsection that also holds the
/// mailing address.
fn last_list_items(element: &ElementRef) -> Vec<String> {
    let lists: Vec<ElementRef> = element.select(&SELECTORS.inner_list).collect();
    match lists.last() {
        Some(list) => line_items(list, &SELECTORS.line_item),
        None => Vec::new(),
    }
}
