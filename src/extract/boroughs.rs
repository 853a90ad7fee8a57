// src/extract/boroughs.rs - Parses the NHS borough-disambiguation search.
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{Result, ScrapeError};
use crate::models::BoroughRecord;

const DISAMBIGUATION_PATH: &str = "/service-search/find-an-nhs-sight-test/disambiguation";

/// Builds the disambiguation-search URL for one city name.
pub fn search_url(nhs_base_url: &str, city: &str) -> Result<String> {
    let mut url = Url::parse(nhs_base_url)?.join(DISAMBIGUATION_PATH)?;
    url.query_pairs_mut()
        .append_pair("SeoFriendlyUrl", "find-an-nhs-sight-test")
        .append_pair("location", city.trim());
    Ok(url.to_string())
}

/// Extracts borough records from a disambiguation result page.
///
/// A page without the borough list is a valid terminal state for a city
/// (no boroughs found), not an error. Each list item's anchor text is a
/// comma-separated "county, borough, postal code" triple; its href becomes
/// absolute by prefixing the NHS site origin.
pub fn extract_boroughs(html: &str, nhs_base_url: &str) -> Result<Vec<BoroughRecord>> {
    let document = Html::parse_document(html);
    let list_selector = Selector::parse("ul.nhsuk-list").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let Some(list) = document.select(&list_selector).next() else {
        return Ok(Vec::new());
    };

    let origin = nhs_base_url.trim_end_matches('/');
    let mut records = Vec::new();

    for (index, item) in list_items(list).enumerate() {
        let Some(anchor) = item.select(&anchor_selector).next() else {
            return Err(ScrapeError::MissingField {
                index,
                field: "borough anchor",
            });
        };

        let text = anchor.text().collect::<String>();
        let text = text.trim();
        let parts: Vec<&str> = text.split(", ").collect();
        // Segments past the third (postal code) are ignored.
        if parts.len() < 3 {
            return Err(ScrapeError::MalformedBorough {
                text: text.to_string(),
            });
        }

        let Some(href) = anchor.value().attr("href") else {
            return Err(ScrapeError::MissingField {
                index,
                field: "borough anchor href",
            });
        };

        let link = if href.starts_with('/') {
            format!("{origin}{href}")
        } else {
            format!("{origin}/{href}")
        };

        records.push(BoroughRecord {
            county: parts[0].to_string(),
            borough: parts[1].to_string(),
            postal_code: parts[2].to_string(),
            link,
        });
    }

    Ok(records)
}

/// Direct `li` children of a list element, in document order.
pub(crate) fn list_items<'a>(
    list: ElementRef<'a>,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    list.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "li")
}
