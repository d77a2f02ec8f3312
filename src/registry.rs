// SPDX-License-Identifier: MPL-2.0
//! Page registry: turns an out-of-order stream of extracted archive entries
//! into a stable, natural-sorted page sequence.
//!
//! The registry is seeded with the archive's entry listing at open time.
//! Candidate pages get one slot each, ordered by a numeric-aware comparator
//! ("page2" sorts before "page10"), so display order is fixed before any
//! entry data arrives. [`PageRegistry::submit`] then resolves slots by name
//! in whatever order decompression completes; arrival order never changes
//! display order.
//!
//! The registry is the exclusive owner of the renderable page data. The
//! navigation cursor only ever holds an index into it.

use crate::archive::EntryInfo;
use crate::media;
use std::cmp::Ordering;
use std::sync::{Arc, Weak};

/// Opaque, shareable reference to a page's decoded bytes.
///
/// Clones share the same allocation; the registry releases the underlying
/// data exactly once, at teardown.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderHandle {
    bytes: Arc<Vec<u8>>,
}

impl RenderHandle {
    fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::new(bytes),
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shares the payload with a background task (e.g. the renderer).
    #[must_use]
    pub fn share(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.bytes)
    }

    /// Weak view used to observe release, without keeping the data alive.
    #[must_use]
    pub fn downgrade(&self) -> Weak<Vec<u8>> {
        Arc::downgrade(&self.bytes)
    }
}

/// One accepted, displayable page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    name: String,
    mime: &'static str,
    handle: RenderHandle,
}

impl PageEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    #[must_use]
    pub fn handle(&self) -> &RenderHandle {
        &self.handle
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    /// Listed and classified as a candidate, data not yet arrived.
    Pending { name: String },
    /// Accepted page with its renderable handle.
    Ready(PageEntry),
    /// Dropped from the sequence (bad extension, resource fork, failed read).
    Rejected { name: String },
}

impl Slot {
    fn name(&self) -> &str {
        match self {
            Slot::Pending { name } | Slot::Rejected { name } => name,
            Slot::Ready(entry) => entry.name(),
        }
    }
}

/// Result of submitting one extracted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Entry became a page at the given display index. When the index equals
    /// the cursor's current page, the caller can render without waiting for
    /// the rest of the archive.
    Accepted { index: usize },
    /// Entry is not a displayable page; the expected total shrank by one.
    Rejected,
    /// An entry with this name was already resolved; ignored.
    Duplicate,
    /// Name not present in the listing; ignored entirely.
    Unknown,
}

/// Registry of pages for one archive load.
#[derive(Debug, Default)]
pub struct PageRegistry {
    slots: Vec<Slot>,
    expected_total: usize,
    accepted: usize,
    rejected: usize,
    released: bool,
}

/// Numeric-aware, case-insensitive name comparison used for display order.
fn compare_names(a: &str, b: &str) -> Ordering {
    natord::compare(&a.to_lowercase(), &b.to_lowercase()).then_with(|| a.cmp(b))
}

impl PageRegistry {
    /// Empty registry, used before any archive is opened.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the registry from an archive listing.
    ///
    /// The expected total starts at the archive's reported entry count.
    /// Directory entries are never dispatched, so they come off the expected
    /// total immediately; file entries get one slot each (first listing
    /// occurrence wins for duplicated names), sorted into display order.
    #[must_use]
    pub fn from_listing(entries: &[EntryInfo]) -> Self {
        let mut expected_total = entries.len();
        let mut names: Vec<&str> = Vec::new();

        for entry in entries {
            if !entry.is_file {
                expected_total = expected_total.saturating_sub(1);
            } else if !names.contains(&entry.name.as_str()) {
                names.push(&entry.name);
            }
        }

        names.sort_by(|a, b| compare_names(a, b));

        Self {
            slots: names
                .into_iter()
                .map(|name| Slot::Pending {
                    name: name.to_string(),
                })
                .collect(),
            expected_total,
            accepted: 0,
            rejected: 0,
            released: false,
        }
    }

    /// Ingests one extracted entry.
    ///
    /// Classification happens here: entries without a supported image
    /// extension, or under the resource-fork folder, are rejected silently
    /// and decrement the expected total. Duplicates of an already-resolved
    /// name are counted the same way. Arrival order is arbitrary.
    pub fn submit(&mut self, name: &str, bytes: Vec<u8>) -> SubmitOutcome {
        let Some(position) = self.slots.iter().position(|slot| slot.name() == name) else {
            return SubmitOutcome::Unknown;
        };

        match &self.slots[position] {
            Slot::Pending { .. } => match media::classify_page(name) {
                Some(mime) => {
                    self.slots[position] = Slot::Ready(PageEntry {
                        name: name.to_string(),
                        mime,
                        handle: RenderHandle::new(bytes),
                    });
                    self.accepted += 1;
                    SubmitOutcome::Accepted {
                        index: self.display_index_of(position),
                    }
                }
                None => {
                    self.reject_slot(position);
                    SubmitOutcome::Rejected
                }
            },
            Slot::Ready(_) | Slot::Rejected { .. } => {
                // Another dispatched entry with the same name; the first
                // resolution stands.
                self.expected_total = self.expected_total.saturating_sub(1);
                self.rejected += 1;
                SubmitOutcome::Duplicate
            }
        }
    }

    /// Drops a listed entry whose extraction failed.
    pub fn reject_unreadable(&mut self, name: &str) {
        if let Some(position) = self
            .slots
            .iter()
            .position(|slot| matches!(slot, Slot::Pending { .. }) && slot.name() == name)
        {
            self.reject_slot(position);
        }
    }

    fn reject_slot(&mut self, position: usize) {
        let name = self.slots[position].name().to_string();
        self.slots[position] = Slot::Rejected { name };
        self.expected_total = self.expected_total.saturating_sub(1);
        self.rejected += 1;
    }

    /// Display position of a slot: non-rejected slots before it.
    fn display_index_of(&self, position: usize) -> usize {
        self.slots[..position]
            .iter()
            .filter(|slot| !matches!(slot, Slot::Rejected { .. }))
            .count()
    }

    /// Page at a display index, if its data has arrived.
    ///
    /// `None` for an index whose slot is still pending (the caller shows a
    /// loading placeholder) and for indices past the sequence.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<&PageEntry> {
        match self
            .slots
            .iter()
            .filter(|slot| !matches!(slot, Slot::Rejected { .. }))
            .nth(index)?
        {
            Slot::Ready(entry) => Some(entry),
            _ => None,
        }
    }

    /// Accepted pages with their display indices, in display order.
    pub fn ready_pages(&self) -> impl Iterator<Item = (usize, &PageEntry)> {
        self.slots
            .iter()
            .filter(|slot| !matches!(slot, Slot::Rejected { .. }))
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Ready(entry) => Some((index, entry)),
                _ => None,
            })
    }

    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    /// Archive's reported entry count minus every rejection so far.
    #[must_use]
    pub fn expected_total(&self) -> usize {
        self.expected_total
    }

    /// Upper bound of the navigable index range.
    #[must_use]
    pub fn nav_bound(&self) -> usize {
        self.expected_total.max(self.accepted)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted == 0
    }

    /// Releases every renderable handle. Idempotent; also runs on drop.
    pub fn release_all(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.slots.clear();
        self.expected_total = 0;
        self.accepted = 0;
        self.rejected = 0;
    }
}

impl Drop for PageRegistry {
    fn drop(&mut self) {
        self.release_all();
    }
}
