//! CSV ingestion of a cleaned sales export.
//!
//! Expects the columns `date,product,quantity` with ISO dates, the shape the
//! upstream cleaning step produces. Every row is validated explicitly; a bad
//! field fails with the row number and never coerces to zero. Encoding
//! negotiation is the exporter's concern — input is assumed valid UTF-8.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use restock_core::domain::SalesObservation;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open sales file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row}: {source}")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: invalid date '{value}' (expected YYYY-MM-DD)")]
    BadDate { row: usize, value: String },

    #[error("row {row}: invalid quantity '{value}' for product '{product}'")]
    BadQuantity {
        row: usize,
        product: String,
        value: String,
    },
}

/// Raw CSV row as exported upstream (wire format; quantity still a string so
/// non-numeric values fail loudly instead of silently coercing).
#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    product: String,
    quantity: String,
}

/// Read a sales CSV file into observations.
pub fn read_sales_csv(path: impl AsRef<Path>) -> Result<Vec<SalesObservation>, IngestError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_sales(file)
}

/// Read sales CSV from any reader. Row numbers in errors are 1-based data
/// rows (the header is row 0).
pub fn read_sales(reader: impl Read) -> Result<Vec<SalesObservation>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut observations = Vec::new();
    for (i, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|source| IngestError::Malformed { row, source })?;

        let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d").map_err(|_| {
            IngestError::BadDate {
                row,
                value: raw.date.clone(),
            }
        })?;

        let quantity: f64 = raw.quantity.parse().map_err(|_| IngestError::BadQuantity {
            row,
            product: raw.product.clone(),
            value: raw.quantity.clone(),
        })?;

        observations.push(SalesObservation {
            product: raw.product,
            date,
            quantity,
        });
    }

    Ok(observations)
}
