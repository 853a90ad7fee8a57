// src/extract/mod.rs - The three HTML-to-record extractors.
pub mod boroughs;
pub mod centres;
pub mod cities;
