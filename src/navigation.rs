// SPDX-License-Identifier: MPL-2.0
//! Navigation cursor for paging through a loaded archive.
//!
//! The cursor owns the current page index and nothing else; page data stays
//! in the [`PageRegistry`]. Navigation clamps by freezing: an attempt that
//! would leave `[0, nav_bound)` keeps the current page and reports no
//! change. Directional input (left/right keys, click zones, swipes) is
//! remapped through the reading direction before it becomes prev/next.

use crate::registry::PageRegistry;
use crate::transform::{PageSide, ReadingDirection};
use std::collections::HashSet;

/// Render state of the page under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// No archive loaded, or it opened with nothing to show.
    Empty,
    /// The current index exists but its entry has not arrived yet.
    Loading,
    /// The current index has an accepted page.
    Ready,
    /// Decoding this page failed earlier in this load; the failure is
    /// sticky and re-navigating here does not retry.
    Error,
}

/// Cursor over the registry's page sequence. Lifecycle is one archive load.
///
/// Decode failures are remembered by entry name, not display index: indices
/// shift when a later rejection compacts the sequence, names never do.
#[derive(Debug, Clone, Default)]
pub struct ReaderCursor {
    current: usize,
    failed: HashSet<String>,
}

impl ReaderCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advances one page. Returns `true` if the cursor moved.
    pub fn show_next(&mut self, registry: &PageRegistry) -> bool {
        if self.current + 1 < registry.nav_bound() {
            self.current += 1;
            true
        } else {
            // Freeze on the current page.
            false
        }
    }

    /// Goes back one page. Returns `true` if the cursor moved.
    pub fn show_prev(&mut self, _registry: &PageRegistry) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// "Left" input: previous page when reading left-to-right, next page
    /// when reading right-to-left.
    pub fn show_left(&mut self, registry: &PageRegistry, direction: ReadingDirection) -> bool {
        match direction {
            ReadingDirection::LeftToRight => self.show_prev(registry),
            ReadingDirection::RightToLeft => self.show_next(registry),
        }
    }

    /// "Right" input, mirror of [`Self::show_left`].
    pub fn show_right(&mut self, registry: &PageRegistry, direction: ReadingDirection) -> bool {
        match direction {
            ReadingDirection::LeftToRight => self.show_next(registry),
            ReadingDirection::RightToLeft => self.show_prev(registry),
        }
    }

    /// Routes a resolved click zone to the matching directional navigation.
    pub fn show_side(
        &mut self,
        registry: &PageRegistry,
        direction: ReadingDirection,
        side: PageSide,
    ) -> bool {
        match side {
            PageSide::Left => self.show_left(registry, direction),
            PageSide::Right => self.show_right(registry, direction),
        }
    }

    /// Absolute navigation from thumbnails or the progress bar. Out-of-range
    /// targets are ignored.
    pub fn jump_to(&mut self, registry: &PageRegistry, index: usize) -> bool {
        if index < registry.nav_bound() && index != self.current {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Marks the named page as failed to decode for the rest of this load.
    pub fn mark_decode_failed(&mut self, name: &str) {
        self.failed.insert(name.to_string());
    }

    /// Render state for the page under the cursor.
    #[must_use]
    pub fn page_state(&self, registry: &PageRegistry) -> PageState {
        if registry.nav_bound() == 0 {
            return PageState::Empty;
        }
        match registry.page(self.current) {
            Some(page) if self.failed.contains(page.name()) => PageState::Error,
            Some(_) => PageState::Ready,
            None => PageState::Loading,
        }
    }

    /// Read progress in `[0, 1]` for the progress indicator; zero while the
    /// registry has nothing to count.
    #[must_use]
    pub fn progress_fraction(&self, registry: &PageRegistry) -> f32 {
        let total = registry.expected_total();
        if total == 0 {
            0.0
        } else {
            ((self.current + 1) as f32 / total as f32).min(1.0)
        }
    }

    /// Resets position and failure memory for a new archive load.
    pub fn reset(&mut self) {
        self.current = 0;
        self.failed.clear();
    }
}
