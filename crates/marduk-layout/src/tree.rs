//! The layout tree and its dirty-tracking update protocol.
//!
//! # Lifecycle
//!
//! 1. [`LayoutTree::new`] creates the root container at canvas size and
//!    starts **dirty**, so the first [`update`](LayoutTree::update) lays
//!    everything out.
//! 2. Any mutation marks the tree dirty: [`mark_dirty`](LayoutTree::mark_dirty),
//!    [`root_mut`](LayoutTree::root_mut), [`find_mut`](LayoutTree::find_mut),
//!    [`resize`](LayoutTree::resize), or a size delivered through
//!    [`resize_sender`](LayoutTree::resize_sender).
//! 3. [`update`](LayoutTree::update) runs one full top-down pass if dirty
//!    and clears the flag on success. Batches of mutations between two
//!    updates coalesce into a single pass.
//!
//! The tree is driven from one thread. Resizes coming from another thread
//! (a window event loop) go through the channel rather than touching the
//! tree directly.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::container::Container;
use crate::desc::ContainerDesc;
use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, Vec2};

/// Canvas used by [`LayoutTree::default`].
pub const DEFAULT_CANVAS: Vec2 = Vec2::new(1280.0, 720.0);

/// Name given to the root container by [`LayoutTree::new`].
pub const ROOT_NAME: &str = "root";

// ── LayoutTree ────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct LayoutTree {
    root: Container,
    dirty: bool,
    passes: u64,
    resize_tx: Sender<Vec2>,
    resize_rx: Receiver<Vec2>,
}

impl LayoutTree {
    /// A tree whose root covers the whole `canvas`.
    pub fn new(canvas: Vec2) -> Self {
        Self::with_root(Container::new(ROOT_NAME, canvas))
    }

    /// A tree around an existing root container.
    pub fn with_root(root: Container) -> Self {
        let (resize_tx, resize_rx) = mpsc::channel();
        Self { root, dirty: true, passes: 0, resize_tx, resize_rx }
    }

    /// Build a tree from a declarative description. The root's size is the canvas.
    pub fn from_desc(desc: &ContainerDesc) -> Result<Self> {
        Ok(Self::with_root(desc.build()?))
    }

    #[inline]
    pub fn root(&self) -> &Container {
        &self.root
    }

    /// Mutable access to the root. Marks the tree dirty.
    pub fn root_mut(&mut self) -> &mut Container {
        self.dirty = true;
        &mut self.root
    }

    /// Set the dirty flag. Idempotent.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of layout passes completed so far.
    #[inline]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Resize the root (canvas) and mark the tree dirty.
    pub fn resize(&mut self, canvas: Vec2) {
        self.root.set_size(canvas);
        self.dirty = true;
    }

    /// A handle an event source can use to deliver canvas sizes.
    ///
    /// Delivered sizes are applied at the start of the next `update`; when
    /// several are pending the last one wins.
    pub fn resize_sender(&self) -> Sender<Vec2> {
        self.resize_tx.clone()
    }

    /// Run a layout pass if the tree is dirty.
    ///
    /// Returns `Ok(true)` if a pass ran. The whole tree is validated first,
    /// so on error no position has changed and the tree stays dirty.
    pub fn update(&mut self) -> Result<bool> {
        if let Some(canvas) = self.resize_rx.try_iter().last() {
            log::debug!("canvas resized to {}x{}", canvas.x, canvas.y);
            self.resize(canvas);
        }
        if !self.dirty {
            return Ok(false);
        }

        self.root.validate()?;
        self.root.recompute(Vec2::zero())?;

        self.dirty = false;
        self.passes += 1;
        log::debug!("layout pass {} ({} containers)", self.passes, self.root.subtree_len());
        Ok(true)
    }

    /// Look a container up by `/`-separated child names below the root.
    ///
    /// The empty path (or `"/"`) is the root itself.
    pub fn find(&self, path: &str) -> Result<&Container> {
        let mut node = &self.root;
        for name in segments(path) {
            node = node.child_by_name(name).ok_or_else(|| LayoutError::UnknownPath(path.to_owned()))?;
        }
        Ok(node)
    }

    /// Like [`find`](Self::find), for mutation. Marks the tree dirty.
    pub fn find_mut(&mut self, path: &str) -> Result<&mut Container> {
        let mut node = &mut self.root;
        for name in segments(path) {
            node = node.child_by_name_mut(name).ok_or_else(|| LayoutError::UnknownPath(path.to_owned()))?;
        }
        self.dirty = true;
        Ok(node)
    }

    /// Every positioned container's rectangle, depth-first in child order.
    pub fn rects(&self) -> Rects<'_> {
        Rects { stack: vec![(&self.root, String::new(), 0)] }
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

// ── Rects ─────────────────────────────────────────────────────────────────

/// One container's output geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRect {
    /// `/`-separated names from the root (which is `""`).
    pub path: String,
    /// 0 for the root.
    pub depth: usize,
    pub rect: Rect,
}

/// Iterator returned by [`LayoutTree::rects`].
///
/// Containers that no pass has reached yet are skipped, along with their
/// subtrees.
pub struct Rects<'a> {
    stack: Vec<(&'a Container, String, usize)>,
}

impl Iterator for Rects<'_> {
    type Item = LayoutRect;

    fn next(&mut self) -> Option<LayoutRect> {
        loop {
            let (node, path, depth) = self.stack.pop()?;
            let Some(rect) = node.rect() else { continue };

            for child in node.children().iter().rev() {
                self.stack.push((child, format!("{path}/{}", child.name()), depth + 1));
            }
            return Some(LayoutRect { path, depth, rect });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spacing::PaddingSpec;
    use crate::strategy::{LayoutDirection, PositionStrategy};

    fn tree_with_row() -> LayoutTree {
        let mut tree = LayoutTree::new(Vec2::new(600.0, 100.0));
        let root = tree.root_mut();
        root.set_position_strategy(PositionStrategy::SpaceBetween);
        for name in ["a", "b", "c"] {
            root.add_child(Container::new(name, Vec2::new(100.0, 100.0))).unwrap();
        }
        tree
    }

    // ── dirty flag ────────────────────────────────────────────────────────

    #[test]
    fn new_tree_is_dirty_and_update_clears() {
        let mut tree = LayoutTree::default();
        assert!(tree.is_dirty());
        assert!(tree.update().unwrap());
        assert!(!tree.is_dirty());
        assert_eq!(tree.root().rect(), Some(Rect::new(0.0, 0.0, 1280.0, 720.0)));
    }

    #[test]
    fn debug_output_shows_the_root() {
        let tree = tree_with_row();
        let out = format!("{tree:?}");
        assert!(out.contains("LayoutTree"));
        assert!(out.contains("\"root\""));
    }

    #[test]
    fn clean_update_is_noop() {
        let mut tree = tree_with_row();
        tree.update().unwrap();
        assert!(!tree.update().unwrap());
        assert_eq!(tree.passes(), 1);
    }

    #[test]
    fn mutations_coalesce_into_one_pass() {
        let mut tree = tree_with_row();
        tree.update().unwrap();

        tree.mark_dirty();
        tree.mark_dirty();
        tree.root_mut().set_direction(LayoutDirection::Vertical);
        tree.resize(Vec2::new(100.0, 600.0));
        assert!(tree.update().unwrap());
        assert_eq!(tree.passes(), 2);
        assert_eq!(tree.find("c").unwrap().position(), Some(Vec2::new(0.0, 500.0)));
    }

    #[test]
    fn failed_pass_keeps_positions_and_dirty_flag() {
        let mut tree = tree_with_row();
        tree.update().unwrap();
        let before: Vec<_> = tree.rects().collect();

        // The bad padding sits below `c`, after `a` and `b` have been visited.
        tree.find_mut("c")
            .unwrap()
            .add_child(Container::new("bad", Vec2::new(10.0, 10.0)).padding(PaddingSpec::Uniform(-1.0)))
            .unwrap();

        assert!(matches!(tree.update(), Err(LayoutError::InvalidSpacing { .. })));
        assert!(tree.is_dirty());
        assert_eq!(tree.rects().collect::<Vec<_>>(), before);
    }

    // ── resize channel ────────────────────────────────────────────────────

    #[test]
    fn last_delivered_size_wins() {
        let mut tree = tree_with_row();
        tree.update().unwrap();

        let tx = tree.resize_sender();
        std::thread::spawn(move || {
            tx.send(Vec2::new(300.0, 100.0)).unwrap();
            tx.send(Vec2::new(900.0, 100.0)).unwrap();
        })
        .join()
        .unwrap();

        assert!(tree.update().unwrap());
        assert_eq!(tree.root().dimension(), Vec2::new(900.0, 100.0));
        assert_eq!(tree.find("/c").unwrap().position(), Some(Vec2::new(800.0, 0.0)));
        assert!(!tree.update().unwrap());
    }

    // ── lookup / output ───────────────────────────────────────────────────

    #[test]
    fn find_unknown_path() {
        let tree = tree_with_row();
        assert!(matches!(tree.find("a/nope"), Err(LayoutError::UnknownPath(ref p)) if p == "a/nope"));
        assert_eq!(tree.find("").unwrap().name(), ROOT_NAME);
    }

    #[test]
    fn rects_are_depth_first_in_child_order() {
        let mut tree = LayoutTree::new(Vec2::new(100.0, 100.0));
        tree.root_mut()
            .add_child(Container::new("a", Vec2::new(10.0, 10.0)).child(Container::new("x", Vec2::new(1.0, 1.0))))
            .unwrap();
        tree.root_mut().add_child(Container::new("b", Vec2::new(10.0, 10.0))).unwrap();

        assert_eq!(tree.rects().count(), 0);
        tree.update().unwrap();

        let paths: Vec<_> = tree.rects().map(|r| (r.path, r.depth)).collect();
        assert_eq!(
            paths,
            vec![
                (String::new(), 0),
                ("/a".to_owned(), 1),
                ("/a/x".to_owned(), 2),
                ("/b".to_owned(), 1),
            ],
        );
    }
}
