// SPDX-License-Identifier: MPL-2.0
//! View transform state: rotation, the flip cycle, fit modes, reading
//! direction, and the click-zone mapping.
//!
//! Everything here is pure state shared by the navigation cursor, the
//! renderer, and the settings store.

use serde::{Deserialize, Serialize};

/// Quarter-turn rotation applied to the displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Rotate 90° clockwise, wrapping after a full turn.
    #[must_use]
    pub fn clockwise(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Rotate 90° counter-clockwise, wrapping below zero.
    #[must_use]
    pub fn counter_clockwise(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg90 => Rotation::Deg0,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg270 => Rotation::Deg180,
        }
    }

    /// Number of quarter turns in `{0, 1, 2, 3}`.
    #[must_use]
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// True for 90° and 270°, where the page axes are swapped on screen.
    #[must_use]
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Combined horizontal/vertical mirroring state.
///
/// There is a single flip control that advances through a fixed 4-state
/// cycle; the two axes are not toggled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlipState {
    #[default]
    Normal,
    Horizontal,
    Both,
    Vertical,
}

impl FlipState {
    /// Advances one step in the flip cycle:
    /// normal → horizontal → both → vertical → normal.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            FlipState::Normal => FlipState::Horizontal,
            FlipState::Horizontal => FlipState::Both,
            FlipState::Both => FlipState::Vertical,
            FlipState::Vertical => FlipState::Normal,
        }
    }

    #[must_use]
    pub fn hflip(self) -> bool {
        matches!(self, FlipState::Horizontal | FlipState::Both)
    }

    #[must_use]
    pub fn vflip(self) -> bool {
        matches!(self, FlipState::Vertical | FlipState::Both)
    }

    /// Reconstructs the cycle state from the two persisted axis flags.
    #[must_use]
    pub fn from_flags(hflip: bool, vflip: bool) -> Self {
        match (hflip, vflip) {
            (false, false) => FlipState::Normal,
            (true, false) => FlipState::Horizontal,
            (true, true) => FlipState::Both,
            (false, true) => FlipState::Vertical,
        }
    }
}

/// Policy for scaling the displayed page within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FitMode {
    /// Constrain both axes to the viewport.
    #[default]
    Best,
    /// Fill the viewport width.
    Width,
    /// Fill the viewport height.
    Height,
    /// Natural size, no constraint.
    None,
}

/// Size constraints produced by a fit mode for a given viewport height.
///
/// `*_fill` fields mean "span the full viewport extent on that axis";
/// pixel fields are absolute. Unset fields leave the natural page size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeConstraint {
    pub width_fill: bool,
    pub height_px: Option<f32>,
    pub max_width_fill: bool,
    pub max_height_px: Option<f32>,
}

/// Vertical margin reserved for the progress bar below the page.
pub const VIEWPORT_BOTTOM_MARGIN: f32 = 50.0;

impl FitMode {
    /// Computes the display-surface constraints for this mode.
    #[must_use]
    pub fn size_constraints(self, viewport_height: f32) -> SizeConstraint {
        let max_height = (viewport_height - VIEWPORT_BOTTOM_MARGIN).max(0.0);
        match self {
            FitMode::Best => SizeConstraint {
                max_width_fill: true,
                max_height_px: Some(max_height),
                ..SizeConstraint::default()
            },
            FitMode::Width => SizeConstraint {
                width_fill: true,
                ..SizeConstraint::default()
            },
            FitMode::Height => SizeConstraint {
                height_px: Some(max_height),
                ..SizeConstraint::default()
            },
            FitMode::None => SizeConstraint::default(),
        }
    }
}

/// Page progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReadingDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// What happens to the page scroll position after navigating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollReset {
    /// Scroll back to the top of the new page.
    #[default]
    ResetTop,
    /// Keep the previous scroll offset.
    Preserve,
}

/// Which navigation zone a click on the page falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSide {
    Left,
    Right,
}

/// Maps a click position on the displayed page to a navigation zone.
///
/// The zone axis follows the rotation: for odd quarter-turns the page's
/// left/right runs along the screen's Y axis, and for the 180°-family
/// states the sense of "left" is inverted. Holds for all four states.
#[must_use]
pub fn click_zone(rotation: Rotation, x: f32, y: f32, width: f32, height: f32) -> PageSide {
    let clicked_left = match rotation {
        Rotation::Deg0 => x < width / 2.0,
        Rotation::Deg90 => y < height / 2.0,
        Rotation::Deg180 => x > width / 2.0,
        Rotation::Deg270 => y > height / 2.0,
    };
    if clicked_left {
        PageSide::Left
    } else {
        PageSide::Right
    }
}
