// File: crates/report/src/archive.rs
// Summary: Archive assembler; collects named images into one Deflate-compressed ZIP in memory.

use std::collections::HashMap;
use std::io::{Cursor, Write};

use chrono::{Datelike, Timelike};
use tracing::warn;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::ArchiveError;

/// Accumulates `(file name, bytes)` entries and seals them into a ZIP.
///
/// A name added twice keeps its first position but takes the later bytes,
/// matching what extracting an archive with repeated names leaves on disk.
/// `finish` consumes the assembler, so nothing can be added once sealed.
///
/// Entries stay uncompressed in memory until `finish`, because the ZIP writer
/// rejects a name it has already written. Peak memory is therefore about the
/// raw images plus the finished archive.
pub struct ArchiveAssembler {
    entries: Vec<(String, Vec<u8>)>,
    index: HashMap<String, usize>,
    modified: DateTime,
}

impl ArchiveAssembler {
    /// Entries are stamped with the current local time.
    pub fn new() -> Self {
        Self::with_timestamp(local_now())
    }

    pub fn with_timestamp(modified: DateTime) -> Self {
        Self { entries: Vec::new(), index: HashMap::new(), modified }
    }

    /// Add an entry. Returns `true` when it replaced an earlier entry of the
    /// same name.
    pub fn add(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> bool {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => {
                warn!(entry = %name, "duplicate archive entry; later image replaces earlier one");
                self.entries[slot].1 = bytes;
                true
            }
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, bytes));
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Write every entry and return the complete archive bytes. The first
    /// failing entry aborts the whole archive.
    pub fn finish(self) -> Result<Vec<u8>, ArchiveError> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(self.modified);

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, bytes) in self.entries {
            if let Err(source) = writer.start_file(name.as_str(), options) {
                return Err(ArchiveError::Entry { name, source });
            }
            if let Err(source) = writer.write_all(&bytes) {
                return Err(ArchiveError::Write { name, source });
            }
        }
        let cursor = writer.finish().map_err(ArchiveError::Finish)?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveAssembler {
    fn default() -> Self {
        Self::new()
    }
}

fn local_now() -> DateTime {
    let now = chrono::Local::now().naive_local();
    // ZIP timestamps cover 1980..=2107; anything else falls back to the epoch.
    u16::try_from(now.year())
        .ok()
        .and_then(|year| {
            DateTime::from_date_and_time(
                year,
                now.month() as u8,
                now.day() as u8,
                now.hour() as u8,
                now.minute() as u8,
                now.second() as u8,
            )
            .ok()
        })
        .unwrap_or_default()
}
