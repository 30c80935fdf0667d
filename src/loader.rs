//! Readers for the destination and fare files.
//!
//! Both files are headerless, comma separated, three fields per row:
//!
//! ```text
//! CCS,Caracas,No requiere visa
//! MIA,Miami,Requiere visa
//! ```
//!
//! ```text
//! CCS,MIA,$300.00
//! MIA,PUJ,90
//! ```
//!
//! Rows with another field count are skipped. Rows that are not valid UTF-8,
//! and fare rows whose price cannot be parsed, are skipped with a warning, so
//! the route graph only ever sees well-formed records.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use crate::graph::{Destination, DestinationCatalog, Fare};
use crate::Result;

const VISA_REQUIRED_MARKERS: [&str; 2] = ["requiere visa", "requires visa"];

/// Load the destination catalog from a file path
pub fn read_destinations(path: &Path) -> Result<DestinationCatalog> {
    let file = fs::File::open(path)?;
    let catalog = destinations_from_reader(file)?;
    debug!("Loaded {} destinations from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load the destination catalog from any reader
///
/// A code seen twice keeps the last row.
pub fn destinations_from_reader<R: Read>(reader: R) -> Result<DestinationCatalog> {
    let mut catalog = DestinationCatalog::new();

    for record in records(reader) {
        let Some(record) = decode(record?) else {
            continue;
        };
        if record.len() != 3 {
            continue;
        }
        let status = record[2].to_lowercase();
        let visa_required = VISA_REQUIRED_MARKERS.contains(&status.as_str());
        catalog.insert(record[0].to_string(), Destination::new(&record[1], visa_required));
    }

    Ok(catalog)
}

/// Load the fare table from a file path
pub fn read_fares(path: &Path) -> Result<Vec<Fare>> {
    let file = fs::File::open(path)?;
    let fares = fares_from_reader(file)?;
    debug!("Loaded {} fares from {}", fares.len(), path.display());
    Ok(fares)
}

/// Load the fare table from any reader, keeping row order
pub fn fares_from_reader<R: Read>(reader: R) -> Result<Vec<Fare>> {
    let mut fares = Vec::new();

    for record in records(reader) {
        let Some(record) = decode(record?) else {
            continue;
        };
        if record.len() != 3 {
            continue;
        }
        match parse_price(&record[2]) {
            Some(price) => fares.push(Fare::new(&record[0], &record[1], price)),
            None => warn!(
                "Could not parse price '{}' in row {:?}",
                &record[2],
                record.iter().collect::<Vec<_>>()
            ),
        }
    }

    Ok(fares)
}

/// Parses a price such as `120`, `$1,200.50` or ` 90.0 `
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    cleaned.parse::<f64>().ok()
}

fn records<R: Read>(reader: R) -> impl Iterator<Item = csv::Result<ByteRecord>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
        .into_byte_records()
}

fn decode(record: ByteRecord) -> Option<StringRecord> {
    let line = record.position().map(|position| position.line());
    match StringRecord::from_byte_record(record) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!("Skipping row at line {:?}: {}", line, err.utf8_error());
            None
        }
    }
}
