//! Closed sets of layout tags and their text forms.
//!
//! Tags parse from the kebab-case names used in layout descriptions
//! (`"space-between"`, `"anchor-end"`, ...). Anything else is
//! [`LayoutError::UnknownStrategy`].

use std::fmt;
use std::str::FromStr;

use crate::distribute::{self, Distributor};
use crate::error::LayoutError;

// ── LayoutDirection ───────────────────────────────────────────────────────

/// Selects which axis is "main" for a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Children run left to right.
    #[default]
    Horizontal,
    /// Children run top to bottom.
    Vertical,
}

impl LayoutDirection {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl FromStr for LayoutDirection {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(unknown("layout direction", other)),
        }
    }
}

// ── PositionStrategy ──────────────────────────────────────────────────────

/// Main-axis distribution of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionStrategy {
    /// Children keep their hand-placed offsets.
    Fixed,
    /// Packed from the start of the content box.
    #[default]
    AnchorStart,
    /// Packed against the end of the content box.
    AnchorEnd,
    /// Packed around the middle of the content box.
    Center,
    /// First child at the start, last child flush with the end.
    SpaceBetween,
    /// Half a unit of free space at each edge, a full unit between neighbours.
    SpaceAround,
    /// Equal free space in every gap, edges included.
    SpaceEvenly,
}

impl PositionStrategy {
    pub const ALL: [Self; 7] = [
        Self::Fixed,
        Self::AnchorStart,
        Self::AnchorEnd,
        Self::Center,
        Self::SpaceBetween,
        Self::SpaceAround,
        Self::SpaceEvenly,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::AnchorStart => "anchor-start",
            Self::AnchorEnd => "anchor-end",
            Self::Center => "center",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
            Self::SpaceEvenly => "space-evenly",
        }
    }

    /// The pure distribution function for this strategy.
    pub fn distributor(self) -> Distributor {
        match self {
            Self::Fixed => distribute::fixed,
            Self::AnchorStart => distribute::anchor_start,
            Self::AnchorEnd => distribute::anchor_end,
            Self::Center => distribute::center,
            Self::SpaceBetween => distribute::space_between,
            Self::SpaceAround => distribute::space_around,
            Self::SpaceEvenly => distribute::space_evenly,
        }
    }
}

impl FromStr for PositionStrategy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.tag() == s)
            .ok_or_else(|| unknown("position strategy", s))
    }
}

// ── AlignStrategy ─────────────────────────────────────────────────────────

/// Cross-axis placement, applied uniformly to all direct children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignStrategy {
    #[default]
    AnchorStart,
    Center,
    AnchorEnd,
}

impl AlignStrategy {
    pub fn tag(self) -> &'static str {
        match self {
            Self::AnchorStart => "anchor-start",
            Self::Center => "center",
            Self::AnchorEnd => "anchor-end",
        }
    }
}

impl FromStr for AlignStrategy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anchor-start" => Ok(Self::AnchorStart),
            "center" => Ok(Self::Center),
            "anchor-end" => Ok(Self::AnchorEnd),
            other => Err(unknown("alignment strategy", other)),
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────

macro_rules! display_tag {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.tag())
            }
        }
    )*};
}

display_tag!(LayoutDirection, PositionStrategy, AlignStrategy);

fn unknown(kind: &'static str, tag: &str) -> LayoutError {
    LayoutError::UnknownStrategy { kind, tag: tag.to_owned() }
}
