use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Construction status sections on the listing page. Sections are mutually
/// exclusive; a temple appears in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TempleStatus {
    Operating,
    UnderConstruction,
    Announced,
}

impl TempleStatus {
    pub const ALL: [TempleStatus; 3] = [
        TempleStatus::Operating,
        TempleStatus::UnderConstruction,
        TempleStatus::Announced,
    ];

    /// Id of the heading span that opens this section on the listing page.
    pub fn section_id(&self) -> &'static str {
        match self {
            TempleStatus::Operating => "Operating",
            TempleStatus::UnderConstruction => "Under_construction",
            TempleStatus::Announced => "Announced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TempleStatus::Operating => "Operating",
            TempleStatus::UnderConstruction => "Under Construction",
            TempleStatus::Announced => "Announced",
        }
    }
}

impl std::fmt::Display for TempleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Listing-page entry before enrichment. `name` is always non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempleStub {
    pub name: String,
    pub image_link: Option<String>,
}

/// Address and contact fields from a locator detail page. Every field is
/// independently optional; most under-construction and announced temples
/// publish none of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub physical_addr: Option<Vec<String>>,
    pub mailing_addr: Option<Vec<String>>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub notice: Option<String>,
}

/// Final output unit: listing stub merged with locator fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempleRecord {
    pub name: String,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub address: AddressRecord,
}

impl TempleRecord {
    pub fn from_parts(stub: TempleStub, address: AddressRecord) -> Self {
        Self {
            name: stub.name,
            image_link: stub.image_link,
            address,
        }
    }
}

/// Per-section outcome: the records that were assembled plus one entry per
/// temple (or per section-level lookup) that failed along the way.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub status: TempleStatus,
    pub temples: Vec<TempleRecord>,
    pub failures: Vec<String>,
}

/// Accumulated output of one scrape run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub sections: Vec<SectionReport>,
}
