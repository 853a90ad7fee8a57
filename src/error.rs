use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("expected {container} not found on {page}")]
    Parse { container: String, page: String },

    #[error("borough entry \"{text}\" does not split into county, borough and postal code")]
    MalformedBorough { text: String },

    #[error("listing item {index} is missing its {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
