/// Source URLs for the two scrape stages.
pub const WIKI_BASE_URL: &str = "https://en.wikipedia.org";
pub const WIKI_TEMPLES_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_temples_of_The_Church_of_Jesus_Christ_of_Latter-day_Saints";

/// Locator detail pages are addressed by slug with a fixed locale parameter.
pub const TEMPLE_DETAIL_BASE: &str = "https://www.lds.org/church/temples";
pub const TEMPLE_DETAIL_LOCALE: &str = "lang=eng";

/// Build the locator detail URL for a derived slug.
pub fn detail_url(slug: &str) -> String {
    format!("{TEMPLE_DETAIL_BASE}/{slug}?{TEMPLE_DETAIL_LOCALE}")
}
