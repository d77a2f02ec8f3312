// SPDX-License-Identifier: MPL-2.0
//! ZIP/CBZ adapter for the archive port.

use super::{ArchiveSource, EntryInfo};
use crate::error::ArchiveError;
use std::fmt;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Comic archive backed by an in-memory ZIP container (`.cbz` or `.zip`).
pub struct ZipSource {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    entries: Vec<EntryInfo>,
}

impl ZipSource {
    /// Opens a ZIP archive from raw bytes and snapshots its entry listing.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::OpenFailed`] when the bytes are not a
    /// readable ZIP container.
    pub fn open(bytes: Vec<u8>) -> Result<Self, ArchiveError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|err| ArchiveError::OpenFailed(err.to_string()))?;

        let mut entries = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let entry = archive
                .by_index(index)
                .map_err(|err| ArchiveError::OpenFailed(err.to_string()))?;
            entries.push(EntryInfo {
                name: entry.name().to_string(),
                is_file: entry.is_file(),
            });
        }

        Ok(Self { archive, entries })
    }
}

impl ArchiveSource for ZipSource {
    fn entries(&self) -> &[EntryInfo] {
        &self.entries
    }

    fn read_entry(&mut self, index: usize) -> Result<Vec<u8>, ArchiveError> {
        let name = self
            .entries
            .get(index)
            .ok_or(ArchiveError::EntryOutOfRange(index))?
            .name
            .clone();

        let mut entry = self
            .archive
            .by_index(index)
            .map_err(|err| ArchiveError::EntryRead {
                name: name.clone(),
                reason: err.to_string(),
            })?;

        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut bytes)
            .map_err(|err| ArchiveError::EntryRead {
                name,
                reason: err.to_string(),
            })?;
        Ok(bytes)
    }
}

impl fmt::Debug for ZipSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipSource")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_zip(entries: &[(&str, &[u8])], dirs: &[&str]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for dir in dirs {
            writer
                .add_directory(dir.to_string(), options)
                .expect("failed to add directory");
        }
        for (name, data) in entries {
            writer
                .start_file(name.to_string(), options)
                .expect("failed to start file");
            writer.write_all(data).expect("failed to write entry");
        }
        writer
            .finish()
            .expect("failed to finish zip")
            .into_inner()
    }

    #[test]
    fn open_lists_entries_in_container_order() {
        let bytes = build_zip(&[("p2.jpg", b"two"), ("p1.jpg", b"one")], &[]);
        let source = ZipSource::open(bytes).expect("open should succeed");

        let names: Vec<&str> = source.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["p2.jpg", "p1.jpg"]);
        assert!(source.entries().iter().all(|e| e.is_file));
    }

    #[test]
    fn directories_are_listed_as_non_files() {
        let bytes = build_zip(&[("pages/p1.jpg", b"one")], &["pages"]);
        let source = ZipSource::open(bytes).expect("open should succeed");

        let dir = source
            .entries()
            .iter()
            .find(|e| !e.is_file)
            .expect("directory entry should be listed");
        assert!(dir.name.starts_with("pages"));
    }

    #[test]
    fn read_entry_returns_payload() {
        let bytes = build_zip(&[("p1.jpg", b"payload")], &[]);
        let mut source = ZipSource::open(bytes).expect("open should succeed");

        let data = source.read_entry(0).expect("read should succeed");
        assert_eq!(data, b"payload");
    }

    #[test]
    fn read_entry_out_of_range_is_an_error() {
        let bytes = build_zip(&[("p1.jpg", b"payload")], &[]);
        let mut source = ZipSource::open(bytes).expect("open should succeed");

        assert!(matches!(
            source.read_entry(9),
            Err(ArchiveError::EntryOutOfRange(9))
        ));
    }

    #[test]
    fn open_rejects_garbage_bytes() {
        let err = ZipSource::open(b"definitely not a zip".to_vec())
            .expect_err("open should fail");
        assert!(matches!(err, ArchiveError::OpenFailed(_)));
    }
}
