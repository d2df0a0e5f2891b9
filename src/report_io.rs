//*** START FILE: src/report_io.rs ***//
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::ReportError;
use crate::report::ComparisonReport;

/// Writes the report as pretty-printed JSON.
pub fn save_report(report: &ComparisonReport, file_path: &Path) -> Result<(), ReportError> {
    let file = File::create(file_path).map_err(|source| ReportError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| ReportError::Serde {
        path: file_path.to_path_buf(),
        source,
    })?;
    // dropping a BufWriter swallows the last write error
    writer.flush().map_err(|source| ReportError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    info!(path = %file_path.display(), "saved comparison report");
    Ok(())
}

/// Reads a report previously written by `save_report`.
pub fn load_report(file_path: &Path) -> Result<ComparisonReport, ReportError> {
    let file = File::open(file_path).map_err(|source| ReportError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| ReportError::Serde {
        path: file_path.to_path_buf(),
        source,
    })
}

//*** END FILE: src/report_io.rs ***//
