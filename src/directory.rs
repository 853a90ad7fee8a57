// src/directory.rs - Sequences the three extractors city by city.
use tracing::{info, warn};

use crate::client::PageClient;
use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::extract::{boroughs, centres, cities};
use crate::models::{BoroughRecord, CentreRecord};

const CITY_LIST_PATH: &str = "/government/publications/list-of-cities/list-of-cities-html";

pub struct DirectoryBuilder {
    client: PageClient,
    config: Config,
}

impl DirectoryBuilder {
    pub fn new(config: Config) -> Result<Self> {
        let client = PageClient::new(
            &config.scraping.user_agent,
            config.scraping.request_timeout_seconds,
        )?;

        Ok(Self { client, config })
    }

    /// Runs the full build: city list, then boroughs and centres per city,
    /// one CSV per English city. Returns the number of city files written.
    ///
    /// A failed city list is fatal (no cities means no work). Failures below
    /// that are isolated: a bad borough page skips that borough, a bad city
    /// skips that city, and the run continues. Cities, boroughs, and centres
    /// are processed strictly in document order.
    pub async fn run(&self) -> Result<usize> {
        let city_list_url = format!(
            "{}{}",
            self.config.scraping.gov_base_url.trim_end_matches('/'),
            CITY_LIST_PATH
        );
        let html = self.client.fetch_page(&city_list_url).await?;
        let uk_cities = cities::extract_cities(&html)?;

        let england: Vec<String> = uk_cities
            .into_iter()
            .filter(|record| record.country == "England")
            .map(|record| record.city)
            .collect();
        info!("Found {} English cities", england.len());

        let mut written = 0;
        for city in &england {
            match self.build_city(city).await {
                Ok(rows) => {
                    info!("Wrote {} centres for {}", rows, city);
                    written += 1;
                }
                Err(e) => warn!("Skipping {}: {}", city, e),
            }
        }

        info!(
            "Directory build complete: {}/{} city files written",
            written,
            england.len()
        );
        Ok(written)
    }

    async fn build_city(&self, city: &str) -> Result<usize> {
        info!("Generating record for {}.", city);

        let search_url = boroughs::search_url(&self.config.scraping.nhs_base_url, city)?;
        let html = self.client.fetch_page(&search_url).await?;
        let borough_list = boroughs::extract_boroughs(&html, &self.config.scraping.nhs_base_url)?;

        let mut records: Vec<CentreRecord> = Vec::new();
        for borough in &borough_list {
            match self.fetch_centres(borough).await {
                Ok(centre_records) => records.extend(centre_records),
                Err(e) => warn!(
                    "Skipping borough {} for {}: {}",
                    borough.borough, city, e
                ),
            }
        }

        export::write_city_csv(&self.config.output.directory, city, &records)?;
        Ok(records.len())
    }

    async fn fetch_centres(&self, borough: &BoroughRecord) -> Result<Vec<CentreRecord>> {
        let html = self.client.fetch_page(&borough.link).await?;
        centres::extract_centres(&html, borough)
    }
}
