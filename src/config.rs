use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scraping: ScrapingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapingConfig {
    pub gov_base_url: String,
    pub nhs_base_url: String,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraping: ScrapingConfig {
                gov_base_url: "https://www.gov.uk".to_string(),
                nhs_base_url: "https://www.nhs.uk".to_string(),
                request_timeout_seconds: 30,
                user_agent: "Mozilla/5.0 (compatible; SightTestScraper/1.0)".to_string(),
            },
            output: OutputConfig {
                // The original tool wrote one CSV per city into the current
                // working directory.
                directory: ".".to_string(),
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
