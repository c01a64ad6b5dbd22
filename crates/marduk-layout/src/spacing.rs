//! Padding and gap inputs, and their resolved four-side / two-axis forms.
//!
//! Both accept either a single number or a partial object; anything left
//! out resolves to `0`. Negative or non-finite values are rejected rather
//! than clamped.

use serde::Deserialize;

use crate::error::{LayoutError, Result};
use crate::geometry::Vec2;
use crate::strategy::LayoutDirection;

// ── Padding ───────────────────────────────────────────────────────────────

/// Resolved insets on all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    /// Offset of the content box from the container's top-left corner.
    #[inline]
    pub fn origin(self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }

    #[inline]
    pub fn main_total(self, direction: LayoutDirection) -> f32 {
        match direction {
            LayoutDirection::Horizontal => self.h(),
            LayoutDirection::Vertical => self.v(),
        }
    }

    #[inline]
    pub fn cross_total(self, direction: LayoutDirection) -> f32 {
        match direction {
            LayoutDirection::Horizontal => self.v(),
            LayoutDirection::Vertical => self.h(),
        }
    }
}

/// Padding as supplied by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum PaddingSpec {
    Uniform(f32),
    Sides {
        #[serde(default)]
        top: Option<f32>,
        #[serde(default)]
        right: Option<f32>,
        #[serde(default)]
        bottom: Option<f32>,
        #[serde(default)]
        left: Option<f32>,
    },
}

impl PaddingSpec {
    pub fn resolve(&self) -> Result<Padding> {
        match *self {
            Self::Uniform(v) => {
                let v = non_negative("padding", v)?;
                Ok(Padding::all(v))
            }
            Self::Sides { top, right, bottom, left } => Ok(Padding {
                top: side("padding.top", top)?,
                right: side("padding.right", right)?,
                bottom: side("padding.bottom", bottom)?,
                left: side("padding.left", left)?,
            }),
        }
    }
}

impl Default for PaddingSpec {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl From<f32> for PaddingSpec {
    fn from(v: f32) -> Self {
        Self::Uniform(v)
    }
}

impl From<Padding> for PaddingSpec {
    fn from(p: Padding) -> Self {
        Self::Sides { top: Some(p.top), right: Some(p.right), bottom: Some(p.bottom), left: Some(p.left) }
    }
}

// ── Gap ───────────────────────────────────────────────────────────────────

/// Resolved spacing between neighbouring children, per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gap {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Gap {
    /// The gap that applies when children run along `direction`.
    #[inline]
    pub fn along(self, direction: LayoutDirection) -> f32 {
        match direction {
            LayoutDirection::Horizontal => self.horizontal,
            LayoutDirection::Vertical => self.vertical,
        }
    }
}

/// Gap as supplied by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum GapSpec {
    Uniform(f32),
    Axes {
        #[serde(default)]
        horizontal: Option<f32>,
        #[serde(default)]
        vertical: Option<f32>,
    },
}

impl GapSpec {
    pub fn resolve(&self) -> Result<Gap> {
        match *self {
            Self::Uniform(v) => {
                let v = non_negative("gap", v)?;
                Ok(Gap { horizontal: v, vertical: v })
            }
            Self::Axes { horizontal, vertical } => Ok(Gap {
                horizontal: side("gap.horizontal", horizontal)?,
                vertical: side("gap.vertical", vertical)?,
            }),
        }
    }
}

impl Default for GapSpec {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl From<f32> for GapSpec {
    fn from(v: f32) -> Self {
        Self::Uniform(v)
    }
}

// ── validation ────────────────────────────────────────────────────────────

fn side(field: &'static str, v: Option<f32>) -> Result<f32> {
    non_negative(field, v.unwrap_or(0.0))
}

fn non_negative(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidSpacing { field, value })
    }
}
