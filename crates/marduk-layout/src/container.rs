use std::collections::HashSet;

use crate::align::align;
use crate::distribute::{distribute, MainRun};
use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, Vec2};
use crate::spacing::{Gap, GapSpec, Padding, PaddingSpec};
use crate::strategy::{AlignStrategy, LayoutDirection, PositionStrategy};

// ── ContainerStyle ────────────────────────────────────────────────────────

/// How a container lays out its direct children.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerStyle {
    pub direction: LayoutDirection,
    pub position: PositionStrategy,
    pub align: AlignStrategy,
    pub padding: PaddingSpec,
    pub gap: GapSpec,
}

impl ContainerStyle {
    /// Resolve padding and gap, failing on the first invalid value.
    pub fn resolve(&self) -> Result<(Padding, Gap)> {
        Ok((self.padding.resolve()?, self.gap.resolve()?))
    }
}

// ── Container ─────────────────────────────────────────────────────────────

/// A node in the layout tree.
///
/// Sizes are always supplied from outside; the engine only computes
/// positions. `position` is the absolute top-left corner written by the
/// last pass that reached this container, and is `None` before that.
///
/// # Example
/// ```rust
/// use marduk_layout::prelude::*;
///
/// let mut bar = Container::new("toolbar", Vec2::new(600.0, 40.0))
///     .position_strategy(PositionStrategy::SpaceBetween)
///     .align(AlignStrategy::Center)
///     .padding(8.0);
/// bar.add_child(Container::new("back", Vec2::new(24.0, 24.0))).unwrap();
/// bar.add_child(Container::new("menu", Vec2::new(24.0, 24.0))).unwrap();
///
/// bar.recompute(Vec2::zero()).unwrap();
/// assert_eq!(bar.child_at(1).unwrap().position(), Some(Vec2::new(568.0, 8.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Container {
    name: String,
    size: Vec2,
    offset: Vec2,
    position: Option<Vec2>,
    style: ContainerStyle,
    children: Vec<Container>,
}

impl Container {
    pub fn new(name: impl Into<String>, size: Vec2) -> Self {
        Self {
            name: name.into(),
            size,
            offset: Vec2::zero(),
            position: None,
            style: ContainerStyle::default(),
            children: Vec::new(),
        }
    }

    // ── builder ───────────────────────────────────────────────────────────
    //
    // Builder setters do not validate; `validate` / `recompute` report bad
    // spacing and duplicate names when the tree is laid out.

    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.style.direction = direction;
        self
    }

    pub fn position_strategy(mut self, strategy: PositionStrategy) -> Self {
        self.style.position = strategy;
        self
    }

    pub fn align(mut self, align: AlignStrategy) -> Self {
        self.style.align = align;
        self
    }

    pub fn padding(mut self, padding: impl Into<PaddingSpec>) -> Self {
        self.style.padding = padding.into();
        self
    }

    pub fn gap(mut self, gap: impl Into<GapSpec>) -> Self {
        self.style.gap = gap.into();
        self
    }

    /// Hand-placed offset inside the parent's content box (see [`PositionStrategy::Fixed`]).
    pub fn offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn style(mut self, style: ContainerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, child: Container) -> Self {
        self.children.push(child);
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixed (width, height) of this container.
    #[inline]
    pub fn dimension(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.position.map(|origin| Rect::from_origin_size(origin, self.size))
    }

    #[inline]
    pub fn local_offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn layout_style(&self) -> &ContainerStyle {
        &self.style
    }

    #[inline]
    pub fn children(&self) -> &[Container] {
        &self.children
    }

    pub fn child_at(&self, index: usize) -> Result<&Container> {
        let len = self.children.len();
        self.children.get(index).ok_or(LayoutError::IndexOutOfRange { index, len })
    }

    pub fn child_at_mut(&mut self, index: usize) -> Result<&mut Container> {
        let len = self.children.len();
        self.children.get_mut(index).ok_or(LayoutError::IndexOutOfRange { index, len })
    }

    pub fn child_by_name(&self, name: &str) -> Option<&Container> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_by_name_mut(&mut self, name: &str) -> Option<&mut Container> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Number of containers in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Container::subtree_len).sum::<usize>()
    }

    // ── mutation ──────────────────────────────────────────────────────────
    //
    // None of these trigger a layout pass; mark the owning tree dirty.

    /// Append `child` after the existing children.
    pub fn add_child(&mut self, child: Container) -> Result<()> {
        if self.child_by_name(&child.name).is_some() {
            return Err(LayoutError::DuplicateIdentity { parent: self.name.clone(), name: child.name });
        }
        self.children.push(child);
        Ok(())
    }

    /// Detach the child at `index` together with its subtree.
    ///
    /// Positions already computed for the remaining siblings are left alone
    /// until the next pass.
    pub fn remove_child(&mut self, index: usize) -> Result<Container> {
        if index >= self.children.len() {
            return Err(LayoutError::IndexOutOfRange { index, len: self.children.len() });
        }
        Ok(self.children.remove(index))
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.style.direction = direction;
    }

    pub fn set_position_strategy(&mut self, strategy: PositionStrategy) {
        self.style.position = strategy;
    }

    pub fn set_align(&mut self, align: AlignStrategy) {
        self.style.align = align;
    }

    /// Replace the padding; rejected values leave the old padding in place.
    pub fn set_padding(&mut self, padding: impl Into<PaddingSpec>) -> Result<()> {
        let spec = padding.into();
        spec.resolve()?;
        self.style.padding = spec;
        Ok(())
    }

    /// Replace the gap; rejected values leave the old gap in place.
    pub fn set_gap(&mut self, gap: impl Into<GapSpec>) -> Result<()> {
        let spec = gap.into();
        spec.resolve()?;
        self.style.gap = spec;
        Ok(())
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Check the whole subtree's configuration without touching any position.
    pub fn validate(&self) -> Result<()> {
        self.style.resolve()?;
        let mut seen = HashSet::with_capacity(self.children.len());
        for child in &self.children {
            if !seen.insert(child.name.as_str()) {
                return Err(LayoutError::DuplicateIdentity {
                    parent: self.name.clone(),
                    name: child.name.clone(),
                });
            }
            child.validate()?;
        }
        Ok(())
    }

    /// Place this container at `origin` and lay out its subtree.
    ///
    /// The container's own configuration is resolved before anything is
    /// written, so an invalid container leaves itself and its children
    /// untouched.
    pub fn recompute(&mut self, origin: Vec2) -> Result<()> {
        let (padding, gap) = self.style.resolve()?;
        let ContainerStyle { direction: dir, position: strategy, align: mode, .. } = self.style;

        self.position = Some(origin);
        if self.children.is_empty() {
            return Ok(());
        }

        let available = self.size.main(dir) - padding.main_total(dir);
        let content_cross = self.size.cross(dir) - padding.cross_total(dir);

        let sizes: Vec<f32> = self.children.iter().map(|c| c.size.main(dir)).collect();
        let offsets: Vec<f32> = self.children.iter().map(|c| c.offset.main(dir)).collect();
        let run = MainRun { sizes: &sizes, offsets: &offsets, available, gap: gap.along(dir) };

        if let Some(needed) = run.required_length(strategy).filter(|&needed| needed > available) {
            log::warn!(
                "`{}`: children need {} px on the main axis, content box has {} px",
                self.name,
                needed,
                available,
            );
        }

        let mains = distribute(strategy, &run);
        let content_origin = origin + padding.origin();

        for (child, main) in self.children.iter_mut().zip(mains) {
            let mut cross = align(mode, content_cross, child.size.cross(dir));
            if strategy == PositionStrategy::Fixed {
                cross += child.offset.cross(dir);
            }
            let at = content_origin + Vec2::from_axes(dir, main, cross);
            log::trace!("place `{}` at ({}, {})", child.name, at.x, at.y);
            child.recompute(at)?;
        }
        Ok(())
    }
}
