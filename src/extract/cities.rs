// src/extract/cities.rs - Parses the GOV.UK "list of cities" publication.
use scraper::{Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::models::CityRecord;

/// Extracts (territory, country, city) records from the city-list page.
///
/// The content container holds `h3` territory headings, `h4` country
/// headings, and `ul` city lists interleaved in document order. Each country
/// belongs to the nearest preceding territory heading and each list to the
/// nearest preceding country heading; on the published page layout this
/// matches the original grouping (first four countries under the first
/// territory, the fifth under the second, the rest under the third).
pub fn extract_cities(html: &str) -> Result<Vec<CityRecord>> {
    let document = Html::parse_document(html);
    let content_selector = Selector::parse("div#contents div.govspeak").unwrap();
    let section_selector = Selector::parse("h3, h4, ul").unwrap();
    let item_selector = Selector::parse("li").unwrap();

    let Some(content) = document.select(&content_selector).next() else {
        return Err(ScrapeError::Parse {
            container: "div#contents div.govspeak".to_string(),
            page: "city list".to_string(),
        });
    };

    let mut records = Vec::new();
    let mut territory: Option<String> = None;
    let mut country: Option<String> = None;

    for element in content.select(&section_selector) {
        match element.value().name() {
            "h3" => {
                territory = Some(heading_text(element));
                country = None;
            }
            "h4" => country = Some(heading_text(element)),
            "ul" => {
                // A list before any heading has no parent context to attach.
                let (Some(territory), Some(country)) = (territory.as_ref(), country.as_ref())
                else {
                    continue;
                };

                for item in element.select(&item_selector) {
                    let city = item
                        .text()
                        .collect::<String>()
                        .replace('*', "")
                        .trim()
                        .to_string();

                    if city.is_empty() {
                        continue;
                    }

                    records.push(CityRecord {
                        territory: territory.clone(),
                        country: country.clone(),
                        city,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(records)
}

fn heading_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
