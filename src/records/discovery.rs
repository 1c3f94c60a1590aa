//! Record discovery from a data directory.
//!
//! Every file with a recognised extension is one redirect record. TOML and
//! JSON are supported; the format is chosen by extension.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::records::error::BuildError;
use crate::records::raw::RawRecord;
use crate::records::segments::{origin_for, segments_for};
use crate::tree::builder::SourceRecord;

/// Records found in a data directory, plus files that could not be read.
#[derive(Debug, Default)]
pub struct Discovered {
    pub records: Vec<SourceRecord>,
    pub errors: Vec<BuildError>,
}

/// Load every record file under `directory` whose extension is listed in
/// `extensions`. Files are visited in lexicographic path order.
///
/// Unreadable or unparsable files are collected as errors; only a failure to
/// list the directory itself fails the whole discovery.
pub fn discover(directory: &Path, extensions: &[String]) -> io::Result<Discovered> {
    let mut files = Vec::new();
    collect_files(directory, &mut files)?;
    files.sort();

    let mut discovered = Discovered::default();
    for file in files {
        let Some(ext) = file.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let ext = ext.to_lowercase();
        if !extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)) {
            continue;
        }

        let origin = origin_for(directory, &file);
        match load_file(&file, &ext, &origin) {
            Ok(record) => discovered.records.push(SourceRecord {
                segments: segments_for(directory, &file),
                origin,
                record,
            }),
            Err(e) => discovered.errors.push(e),
        }
    }

    tracing::debug!(
        directory = %directory.display(),
        records = discovered.records.len(),
        errors = discovered.errors.len(),
        "Record discovery finished"
    );
    Ok(discovered)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

fn load_file(file: &Path, ext: &str, origin: &str) -> Result<RawRecord, BuildError> {
    let content = fs::read_to_string(file).map_err(|e| BuildError::Io {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;

    let parse_error = |message: String| BuildError::Parse {
        origin: origin.to_string(),
        message,
    };
    let value: Value = match ext {
        "json" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
        _ => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
    };

    RawRecord::from_value(value).map_err(|error| BuildError::Validation {
        origin: origin.to_string(),
        error,
    })
}
