//! Declarative layout descriptions.
//!
//! A description is plain JSON. Strategy tags stay strings until
//! [`ContainerDesc::build`], so an unknown tag is reported as
//! [`LayoutError::UnknownStrategy`] rather than as a JSON error.
//!
//! ```json
//! {
//!   "name": "root", "width": 800, "height": 600,
//!   "direction": "vertical", "position": "space-between", "align": "center",
//!   "padding": { "top": 8, "bottom": 8 }, "gap": 4,
//!   "children": [ { "name": "header", "width": 800, "height": 48 } ]
//! }
//! ```

use serde::Deserialize;

use crate::container::{Container, ContainerStyle};
use crate::error::Result;
use crate::geometry::Vec2;
use crate::spacing::{GapSpec, PaddingSpec};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerDesc {
    pub name: String,
    pub width: f32,
    pub height: f32,
    /// Hand-placed offset, read under the `fixed` strategy.
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub align: Option<String>,
    #[serde(default)]
    pub padding: Option<PaddingSpec>,
    #[serde(default)]
    pub gap: Option<GapSpec>,
    #[serde(default)]
    pub children: Vec<ContainerDesc>,
}

impl ContainerDesc {
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    /// Turn the description into a container subtree, parsing every tag and
    /// checking sibling names on the way.
    pub fn build(&self) -> Result<Container> {
        let mut style = ContainerStyle::default();
        if let Some(tag) = &self.direction {
            style.direction = tag.parse()?;
        }
        if let Some(tag) = &self.position {
            style.position = tag.parse()?;
        }
        if let Some(tag) = &self.align {
            style.align = tag.parse()?;
        }
        if let Some(padding) = self.padding {
            padding.resolve()?;
            style.padding = padding;
        }
        if let Some(gap) = self.gap {
            gap.resolve()?;
            style.gap = gap;
        }

        let mut container = Container::new(self.name.clone(), Vec2::new(self.width, self.height))
            .offset(Vec2::new(self.x, self.y))
            .style(style);
        for child in &self.children {
            container.add_child(child.build()?)?;
        }
        Ok(container)
    }
}
