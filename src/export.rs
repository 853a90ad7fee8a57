// src/export.rs - One CSV file per city, header derived from the record fields.
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::CentreRecord;

/// Writes a city's centre records to `<lowercase city>.csv` in `directory`,
/// returning the path written. Rows keep the order they were accumulated in.
pub fn write_city_csv(directory: &str, city: &str, records: &[CentreRecord]) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)?;

    let path = Path::new(directory).join(format!("{}.csv", city.to_lowercase()));
    let mut writer = csv::Writer::from_path(&path)?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(path)
}
