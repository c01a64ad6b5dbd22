//! Marduk layout: positions a retained tree of fixed-size containers.
//!
//! Each container lays out one row or column of direct children: a
//! [`PositionStrategy`](strategy::PositionStrategy) spreads them along the
//! main axis, an [`AlignStrategy`](strategy::AlignStrategy) places them on
//! the cross axis, inside the container's padding and with its gap between
//! neighbours. Sizes are always given; only positions are computed.
//!
//! # Quick start
//!
//! ```rust
//! use marduk_layout::prelude::*;
//!
//! let mut tree = LayoutTree::new(Vec2::new(600.0, 100.0));
//! let root = tree.root_mut();
//! root.set_position_strategy(PositionStrategy::SpaceBetween);
//! for name in ["a", "b", "c"] {
//!     root.add_child(Container::new(name, Vec2::new(100.0, 100.0))).unwrap();
//! }
//!
//! tree.update().unwrap();
//! assert_eq!(tree.find("b").unwrap().position(), Some(Vec2::new(250.0, 0.0)));
//!
//! for LayoutRect { path, rect, .. } in tree.rects() {
//!     // hand `rect` to the renderer
//! #   let _ = (path, rect);
//! }
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`geometry`] | `Vec2`, `Rect` |
//! | [`strategy`] | direction / position / alignment tags |
//! | [`spacing`] | padding and gap inputs and their resolution |
//! | [`distribute`] | main-axis strategies |
//! | [`align`] | cross-axis alignment |
//! | [`container`] | `Container`, the recursive layout pass |
//! | [`tree`] | `LayoutTree`, dirty tracking, rectangle output |
//! | [`desc`] | JSON layout descriptions |

pub mod align;
pub mod container;
pub mod desc;
pub mod distribute;
pub mod error;
pub mod geometry;
pub mod spacing;
pub mod strategy;
pub mod tree;

pub use error::LayoutError;
pub use tree::LayoutTree;

/// The types needed to build and read a layout.
pub mod prelude {
    pub use crate::container::{Container, ContainerStyle};
    pub use crate::desc::ContainerDesc;
    pub use crate::error::LayoutError;
    pub use crate::geometry::{Rect, Vec2};
    pub use crate::spacing::{Gap, GapSpec, Padding, PaddingSpec};
    pub use crate::strategy::{AlignStrategy, LayoutDirection, PositionStrategy};
    pub use crate::tree::{LayoutRect, LayoutTree};
}
