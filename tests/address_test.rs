#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use scraper::Html;
    use temple_scraper::constants::detail_url;
    use temple_scraper::detail::{parse_address, DetailScraper};
    use temple_scraper::error::{Result, ScraperError};
    use temple_scraper::fetch::PageFetcher;

    struct MockFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl PageFetcher for MockFetcher {
        async fn fetch_html(&self, url: &str) -> Result<String> {
            self.pages.get(url).cloned().ok_or_else(|| ScraperError::Parse {
                message: format!("no canned page for {url}"),
            })
        }
    }

    fn detail_page(details: &str) -> String {
        format!("<html><body><div id=\"page\">{details}</div></body></html>")
    }

    const THREE_COLUMNS: &str = r#"
        <div id="address-section"><ul class="details-section">
            <div class="three-column">
                <ul><li>123 Main St</li><li>Anytown, ST 00000</li></ul>
            </div>
            <div class="three-column">
                <ul class="mailing-spacer"><li>PO Box 99</li><li>Anytown, ST 00000</li></ul>
            </div>
            <div class="three-column">
                <ul><li>555-1234</li><li>Facsimile: 555-5678</li></ul>
            </div>
        </ul></div>"#;

    const TWO_COLUMNS: &str = r#"
        <div id="address-section"><ul class="details-section">
            <div class="three-column">
                <ul><li>123 Main St</li><li>Anytown, ST 00000</li></ul>
            </div>
            <div class="three-column">
                <ul class="mailing-spacer"><li>PO Box 99</li></ul>
                <ul><li>555-1234</li><li>Facsimile: 555-5678</li></ul>
            </div>
        </ul></div>"#;

    #[test]
    fn test_no_subsections_yields_all_absent() {
        let document =
            Html::parse_document(&detail_page(r#"<div id="address-section"><ul class="details-section"></ul></div>"#));
        let record = parse_address(&document);

        assert_eq!(record.physical_addr, None);
        assert_eq!(record.mailing_addr, None);
        assert_eq!(record.phone, None);
        assert_eq!(record.fax, None);
    }

    #[test]
    fn test_one_subsection_physical_only() {
        let document = Html::parse_document(&detail_page(
            r#"<div id="address-section"><ul class="details-section">
                <div class="three-column">
                    <ul><li>123 Main St</li><li>Anytown, ST 00000</li></ul>
                </div>
            </ul></div>"#,
        ));
        let record = parse_address(&document);

        assert_eq!(
            record.physical_addr,
            Some(vec!["123 Main St".to_string(), "Anytown, ST 00000".to_string()])
        );
        assert_eq!(record.mailing_addr, None);
        assert_eq!(record.phone, None);
        assert_eq!(record.fax, None);
    }

    #[test]
    fn test_two_subsections_share_phone_fax_with_mailing() {
        let document = Html::parse_document(&detail_page(TWO_COLUMNS));
        let record = parse_address(&document);

        assert_eq!(
            record.physical_addr,
            Some(vec!["123 Main St".to_string(), "Anytown, ST 00000".to_string()])
        );
        assert_eq!(record.mailing_addr, Some(vec!["PO Box 99".to_string()]));
        assert_eq!(record.phone.as_deref(), Some("555-1234"));
        assert_eq!(record.fax.as_deref(), Some("555-5678"));
    }

    #[test]
    fn test_three_subsections_separate_phone_fax() {
        let document = Html::parse_document(&detail_page(THREE_COLUMNS));
        let record = parse_address(&document);

        assert_eq!(
            record.mailing_addr,
            Some(vec!["PO Box 99".to_string(), "Anytown, ST 00000".to_string()])
        );
        assert_eq!(record.phone.as_deref(), Some("555-1234"));
        assert_eq!(record.fax.as_deref(), Some("555-5678"));
    }

    #[test]
    fn test_phone_without_fax() {
        let document = Html::parse_document(&detail_page(
            r#"<div id="address-section"><ul class="details-section">
                <div class="three-column"><ul><li>123 Main St</li></ul></div>
                <div class="three-column">
                    <ul class="mailing-spacer"><li>PO Box 99</li></ul>
                    <ul><li>555-1234</li></ul>
                </div>
            </ul></div>"#,
        ));
        let record = parse_address(&document);

        assert_eq!(record.phone.as_deref(), Some("555-1234"));
        assert_eq!(record.fax, None);
    }

    #[test]
    fn test_contact_section_fallback_container() {
        let document = Html::parse_document(&detail_page(
            r#"<div id="contact-section"><ul class="details-section">
                <div class="three-column"><ul><li>456 Side St</li></ul></div>
            </ul></div>"#,
        ));
        let record = parse_address(&document);

        assert_eq!(record.physical_addr, Some(vec!["456 Side St".to_string()]));
    }

    #[test]
    fn test_notice_block_is_captured() {
        let document = Html::parse_document(&detail_page(
            r#"<div id="address-section"><ul class="details-section">
                <div class="three-column"><ul><li>123 Main St</li></ul></div>
                <div class="three-column-notice">Closed for renovation.</div>
            </ul></div>"#,
        ));
        let record = parse_address(&document);

        assert_eq!(record.notice.as_deref(), Some("Closed for renovation."));
    }

    #[tokio::test]
    async fn test_fetch_address_uses_derived_slug() {
        let mut pages = HashMap::new();
        pages.insert(detail_url("st-george-utah"), detail_page(THREE_COLUMNS));
        let fetcher = MockFetcher { pages };

        let scraper = DetailScraper::new(&fetcher);
        let record = scraper.fetch_address("St. George Utah").await.unwrap();

        assert_eq!(record.phone.as_deref(), Some("555-1234"));
    }

    #[tokio::test]
    async fn test_fetch_address_resolves_slug_exceptions() {
        let mut pages = HashMap::new();
        pages.insert(
            detail_url("new-provo-temple-provo-tabernacle"),
            detail_page(TWO_COLUMNS),
        );
        let fetcher = MockFetcher { pages };

        let scraper = DetailScraper::new(&fetcher);
        let record = scraper.fetch_address("Provo City Center").await.unwrap();

        assert_eq!(record.mailing_addr, Some(vec!["PO Box 99".to_string()]));
    }

    #[tokio::test]
    async fn test_fetch_address_propagates_fetch_failure() {
        let fetcher = MockFetcher { pages: HashMap::new() };
        let scraper = DetailScraper::new(&fetcher);

        assert!(scraper.fetch_address("Nowhere At All").await.is_err());
    }
}
