// SPDX-License-Identifier: MPL-2.0
//! Archive access port.
//!
//! This module defines the [`ArchiveSource`] trait for opening a comic
//! archive and extracting its entries. Adapters implement this trait per
//! container format; the viewer core only sees the ordered entry listing
//! and per-entry byte reads, never the container internals.

use crate::error::ArchiveError;

pub mod zip_source;

pub use zip_source::ZipSource;

/// One record in an archive's entry listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Original entry path inside the archive.
    pub name: String,
    /// Whether the entry is a file (directories carry no page data).
    pub is_file: bool,
}

/// Port for reading comic archives.
///
/// The listing order is the container's file order; callers decide display
/// order themselves. Entry reads may be issued in any order and from any
/// task, hence `Send`.
pub trait ArchiveSource: Send {
    /// Returns the archive's entry listing, in container order.
    fn entries(&self) -> &[EntryInfo];

    /// Decompresses the entry at `index` in the listing.
    ///
    /// # Errors
    ///
    /// Returns an [`ArchiveError`] if the index is out of range or the
    /// entry data cannot be extracted.
    fn read_entry(&mut self, index: usize) -> Result<Vec<u8>, ArchiveError>;
}
