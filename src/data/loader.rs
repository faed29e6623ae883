use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use super::model::{Column, FirmDataset, FirmRecord};
use crate::error::{LookupError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse the FIRMS code list at `path`.
///
/// The whole file is read into memory and parsed on every call; nothing is
/// cached between calls.
pub fn load_file(path: &Path) -> Result<FirmDataset> {
    let bytes = std::fs::read(path).map_err(|source| LookupError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(bytes.as_slice())?;
    debug!("loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse a FIRMS CSV from any reader.
///
/// Layout: one header row naming the nine FIRMS columns (any order, extra
/// columns ignored), followed by data rows. Blank lines are skipped. A row
/// shorter than the header leaves the trailing columns empty.
pub fn load_reader<R: Read>(reader: R) -> Result<FirmDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(parse_error)?.clone();
    let layout = resolve_layout(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(parse_error)?;

        let mut record = FirmRecord::default();
        for (column, idx) in &layout {
            if let Some(value) = row.get(*idx) {
                *record.get_mut(*column) = value.to_string();
            }
        }
        records.push(record);
    }

    Ok(FirmDataset::new(records))
}

// ---------------------------------------------------------------------------
// Header handling
// ---------------------------------------------------------------------------

/// Map every expected column to its field index in the header.
fn resolve_layout(headers: &csv::StringRecord) -> Result<Vec<(Column, usize)>> {
    let mut layout = Vec::with_capacity(Column::ALL.len());
    let mut missing = Vec::new();

    for column in Column::ALL {
        match headers.iter().position(|h| h == column.display_name()) {
            Some(idx) => layout.push((column, idx)),
            None => missing.push(column.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(LookupError::SchemaMismatch { missing });
    }

    for extra in headers
        .iter()
        .filter(|h| !h.is_empty() && Column::ALL.iter().all(|c| c.display_name() != *h))
    {
        warn!("ignoring unexpected column '{extra}' in FIRMS header");
    }

    Ok(layout)
}

fn parse_error(source: csv::Error) -> LookupError {
    let line = source.position().map(|p| p.line()).unwrap_or(0);
    LookupError::Parse { line, source }
}
