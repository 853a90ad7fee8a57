// src/models.rs - Record types produced by the extraction pipeline.
//
// Serde renames give the CSV output its `Territory`/`County`/... headers;
// records are built once, enriched with parent context, and serialized
// without further mutation.
use serde::Serialize;

/// One city from the GOV.UK list, tagged with its territory and country.
#[derive(Debug, Clone, Serialize)]
pub struct CityRecord {
    #[serde(rename = "Territory")]
    pub territory: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "City")]
    pub city: String,
}

/// One borough from the NHS disambiguation search for a city.
///
/// `link` is absolute: the NHS site origin plus the relative href found in
/// the markup. It is the URL fetched next by the centre extractor.
#[derive(Debug, Clone, Serialize)]
pub struct BoroughRecord {
    #[serde(rename = "County")]
    pub county: String,
    #[serde(rename = "Borough")]
    pub borough: String,
    #[serde(rename = "PostalCode")]
    pub postal_code: String,
    #[serde(rename = "Link")]
    pub link: String,
}

/// One sight-test centre from a borough's result listing.
///
/// `county` and `borough` are inherited verbatim from the parent
/// [`BoroughRecord`]. `map_link` is the anchor href exactly as provided.
#[derive(Debug, Clone, Serialize)]
pub struct CentreRecord {
    #[serde(rename = "County")]
    pub county: String,
    #[serde(rename = "Borough")]
    pub borough: String,
    #[serde(rename = "Distance")]
    pub distance: String,
    #[serde(rename = "CentreName")]
    pub centre_name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "MapLink")]
    pub map_link: String,
}
