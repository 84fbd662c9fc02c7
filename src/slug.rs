use std::collections::HashMap;

use once_cell::sync::Lazy;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Locator slugs that do not follow the normal derivation pattern. Applied
/// only on exact match, after derivation; new cases are table entries, not
/// algorithm changes.
static SLUG_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("provo-city-center", "new-provo-temple-provo-tabernacle"),
        ("fort-collins-colorado", "fort-collins-colorado-temple"),
        ("meridian-idaho", "meridian-idaho-temple"),
        ("winnipeg-manitoba", "winnipeg-manitoba-temple"),
        (
            "kinshasa-democratic-republic-of-the-congo",
            "kinshasa-democratic-republic-of-congo",
        ),
        ("rio-de-janeiro-brazil", "rio-de-janiero-brazil"),
    ])
});

/// Derive the locator URL slug for a temple name: lowercase, hyphenated,
/// stripped of periods and apostrophes, diacritics collapsed, exceptions
/// resolved.
pub fn derive_slug(name: &str) -> String {
    let mut slug: String = name.to_lowercase().replace(' ', "-").replace(['.', '\''], "");

    // non-ASCII characters are not allowed in locator URLs
    if !slug.is_ascii() {
        slug = strip_diacritics(&slug);
    }

    match SLUG_EXCEPTIONS.get(slug.as_str()) {
        Some(fixed) => (*fixed).to_string(),
        None => slug,
    }
}

/// Canonically decompose the input and drop combining marks, so accented
/// characters collapse to their base letters.
pub fn strip_diacritics(input: &str) -> String {
    input.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}
