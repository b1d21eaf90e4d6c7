//! Annotated observations CSV writer.
//!
//! Reproduces every source column untouched and adds (or fills) the
//! `eventID` column. Optionally prefixes the file with a UTF-8 BOM for
//! Excel compatibility.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::constants::{UTF8_BOM, columns};
use crate::error::{Error, Result};

/// Writer for observation rows augmented with an event identifier.
pub struct ObservationWriter {
    writer: csv::Writer<BufWriter<File>>,
    path: PathBuf,
    /// Index of the eventID column in the source header, if it had one.
    /// When `None` the identifier is appended as a new last column.
    event_id_column: Option<usize>,
    column_count: usize,
}

impl ObservationWriter {
    /// Create the output file and write the header row.
    ///
    /// The header is the source header with `eventID` appended unless the
    /// source already carried that column.
    pub fn create(
        path: &Path,
        headers: &StringRecord,
        event_id_column: Option<usize>,
        bom: bool,
    ) -> Result<Self> {
        let file = File::create(path)?;
        let mut buffered = BufWriter::new(file);
        if bom {
            buffered.write_all(UTF8_BOM)?;
        }

        // Flexible: source rows may carry more fields than the header and
        // must round-trip intact.
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(buffered);

        let mut header: Vec<&str> = headers.iter().collect();
        if event_id_column.is_none() {
            header.push(columns::EVENT_ID);
        }
        writer.write_record(&header).map_err(|e| Error::CsvWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            writer,
            path: path.to_path_buf(),
            event_id_column,
            column_count: headers.len(),
        })
    }

    /// Write one source row with its event identifier (empty if `None`).
    pub fn write_row(&mut self, row: &StringRecord, event_id: Option<&str>) -> Result<()> {
        let id = event_id.unwrap_or("");

        // Short rows are padded to the header width so the eventID always
        // lands in its own column; fields beyond the header pass through
        // after it.
        let mut fields: Vec<&str> = row.iter().collect();
        if fields.len() < self.column_count {
            fields.resize(self.column_count, "");
        }

        match self.event_id_column {
            Some(idx) => fields[idx] = id,
            None => fields.insert(self.column_count, id),
        }

        self.writer
            .write_record(&fields)
            .map_err(|e| Error::CsvWrite {
                path: self.path.clone(),
                source: e,
            })
    }

    /// Flush buffered output.
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
