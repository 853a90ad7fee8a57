// src/extract/centres.rs - Parses one borough's sight-test result listing.
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::extract::boroughs::list_items;
use crate::models::{BoroughRecord, CentreRecord};

/// Extracts centre records from a borough result page, inheriting the
/// borough's county and borough name verbatim.
///
/// A page without the results list is an error: reaching a borough detail
/// page implies results should exist (unlike the borough search, where an
/// empty list is a valid answer). Sub-elements are selected relative to each
/// listing item by id prefix, so the items never share a global index space.
/// Output preserves document order, which is the site's distance order.
pub fn extract_centres(html: &str, borough: &BoroughRecord) -> Result<Vec<CentreRecord>> {
    let document = Html::parse_document(html);
    let results_selector = Selector::parse("ol.nhsuk-list.results").unwrap();
    let distance_selector = Selector::parse("p[id^='distance_']").unwrap();
    let name_selector = Selector::parse("h2[id^='orgname_']").unwrap();
    let address_selector = Selector::parse("p[id^='address_']").unwrap();
    let phone_selector = Selector::parse("p[id^='phone_']").unwrap();
    let map_selector = Selector::parse("a[id^='map_link_']").unwrap();

    let Some(results) = document.select(&results_selector).next() else {
        return Err(ScrapeError::Parse {
            container: "ol.nhsuk-list.results".to_string(),
            page: borough.link.clone(),
        });
    };

    let mut records = Vec::new();

    for (index, item) in list_items(results).enumerate() {
        let sub_element = |selector: &Selector, field: &'static str| {
            item.select(selector)
                .next()
                .ok_or(ScrapeError::MissingField { index, field })
        };

        let distance = sub_element(&distance_selector, "distance")?;
        let name = sub_element(&name_selector, "centre name")?;
        let address = sub_element(&address_selector, "address")?;
        let phone = sub_element(&phone_selector, "phone")?;
        let map_anchor = sub_element(&map_selector, "map link")?;

        let Some(map_link) = map_anchor.value().attr("href") else {
            return Err(ScrapeError::MissingField {
                index,
                field: "map link href",
            });
        };

        records.push(CentreRecord {
            county: borough.county.clone(),
            borough: borough.borough.clone(),
            distance: visible_text(distance),
            centre_name: visible_text(name),
            address: visible_text(address),
            phone: visible_text(phone),
            // Kept exactly as provided, relative or absolute.
            map_link: map_link.to_string(),
        });
    }

    Ok(records)
}

/// Collects an element's text excluding any `span` subtree (screen-reader
/// labels and similar noise markup), with whitespace collapsed. A field
/// without a span is extracted as-is.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            if el.value().name() != "span" {
                collect_text(el, out);
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}
