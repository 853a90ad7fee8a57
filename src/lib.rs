pub mod client;
pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;

pub use client::PageClient;
pub use directory::DirectoryBuilder;
pub use error::{Result, ScrapeError};
