use once_cell::sync::Lazy;
use scraper::Selector;

use crate::types::TempleStatus;

/// Every structural query used against the two differently-shaped documents
/// (listing page vs. locator detail page), keyed by semantic purpose and
/// compiled once.
pub struct Selectors {
    pub operating_heading: Selector,
    pub under_construction_heading: Selector,
    pub announced_heading: Selector,
    pub listing_row: Selector,
    pub name_link: Selector,
    pub name_span: Selector,
    pub image_page_link: Selector,
    pub full_image_link: Selector,
    pub addr_details: Selector,
    pub addr_details_fallback: Selector,
    pub addr_column: Selector,
    pub notice: Selector,
    pub line_item: Selector,
    pub mailing_item: Selector,
    pub inner_list: Selector,
}

impl Selectors {
    /// Heading span selector for a status section.
    pub fn heading(&self, status: TempleStatus) -> &Selector {
        match status {
            TempleStatus::Operating => &self.operating_heading,
            TempleStatus::UnderConstruction => &self.under_construction_heading,
            TempleStatus::Announced => &self.announced_heading,
        }
    }
}

pub static SELECTORS: Lazy<Selectors> = Lazy::new(|| Selectors {
    operating_heading: sel("span#Operating"),
    under_construction_heading: sel("span#Under_construction"),
    announced_heading: sel("span#Announced"),
    listing_row: sel("tr.vcard"),
    name_link: sel("b span a"),
    // announced temples may not have an <a> for the name yet
    name_span: sel("b span"),
    image_page_link: sel("a.image"),
    full_image_link: sel("div.fullImageLink a"),
    addr_details: sel("div#address-section ul.details-section"),
    // some pages publish the address under the contact section instead
    addr_details_fallback: sel("div#contact-section ul.details-section"),
    addr_column: sel("div.three-column"),
    notice: sel("div.three-column-notice"),
    line_item: sel("li"),
    mailing_item: sel("ul.mailing-spacer li"),
    inner_list: sel("ul"),
});

fn sel(expr: &str) -> Selector {
    Selector::parse(expr).unwrap()
}
