//! Points, sizes and rectangles in logical pixels.
//!
//! Same canonical space as the renderers: origin top-left, +X right, +Y down.

use core::ops::{Add, Sub};

use crate::strategy::LayoutDirection;

/// 2D vector in logical pixels. Used both for positions and for sizes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component along the main axis of `direction`.
    #[inline]
    pub fn main(self, direction: LayoutDirection) -> f32 {
        match direction {
            LayoutDirection::Horizontal => self.x,
            LayoutDirection::Vertical => self.y,
        }
    }

    /// Component along the cross axis of `direction`.
    #[inline]
    pub fn cross(self, direction: LayoutDirection) -> f32 {
        match direction {
            LayoutDirection::Horizontal => self.y,
            LayoutDirection::Vertical => self.x,
        }
    }

    /// Inverse of [`main`](Self::main) / [`cross`](Self::cross).
    #[inline]
    pub fn from_axes(direction: LayoutDirection, main: f32, cross: f32) -> Self {
        match direction {
            LayoutDirection::Horizontal => Self::new(main, cross),
            LayoutDirection::Vertical => Self::new(cross, main),
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// `true` if `other` lies entirely inside `self`, edges included.
    pub fn contains_rect(self, other: Rect) -> bool {
        let (a, b) = (self.max(), other.max());
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && b.x <= a.x
            && b.y <= a.y
    }
}
