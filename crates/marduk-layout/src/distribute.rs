//! Main-axis distribution.
//!
//! Every strategy is a pure function from a [`MainRun`] to one start offset
//! per child, relative to the content box origin and in child order.
//! Overflow is not corrected: if the children do not fit, free space goes
//! negative and the formulas are applied as-is.

use crate::strategy::PositionStrategy;

/// Inputs to a distribution strategy for one container.
#[derive(Debug, Clone, Copy)]
pub struct MainRun<'a> {
    /// Main-axis size of each child, in order.
    pub sizes: &'a [f32],
    /// Each child's current main-axis offset. Only read by `fixed`.
    pub offsets: &'a [f32],
    /// Content-box length on the main axis (size minus main-axis padding).
    pub available: f32,
    /// Gap between neighbours. Only the packing strategies use it.
    pub gap: f32,
}

impl MainRun<'_> {
    /// Sum of child sizes plus the gaps between them.
    pub fn content_length(&self) -> f32 {
        let gaps = self.sizes.len().saturating_sub(1) as f32 * self.gap;
        self.total_size() + gaps
    }

    fn total_size(&self) -> f32 {
        self.sizes.iter().sum()
    }

    /// Main-axis length `strategy` needs to place every child without overlap.
    ///
    /// `None` for `fixed`, which places by hand. The `space-*` strategies
    /// do not use the gap, so only the child sizes count for them.
    pub fn required_length(&self, strategy: PositionStrategy) -> Option<f32> {
        match strategy {
            PositionStrategy::Fixed => None,
            PositionStrategy::SpaceBetween | PositionStrategy::SpaceAround | PositionStrategy::SpaceEvenly => {
                Some(self.total_size())
            }
            PositionStrategy::AnchorStart | PositionStrategy::AnchorEnd | PositionStrategy::Center => {
                Some(self.content_length())
            }
        }
    }
}

pub type Distributor = fn(&MainRun<'_>) -> Vec<f32>;

/// Main-axis offsets for `run` under `strategy`. Empty for zero children.
pub fn distribute(strategy: PositionStrategy, run: &MainRun<'_>) -> Vec<f32> {
    if run.sizes.is_empty() {
        return Vec::new();
    }
    (strategy.distributor())(run)
}

/// Lay children end to end from `start`, `step` apart.
fn pack(sizes: &[f32], start: f32, step: f32) -> Vec<f32> {
    let mut cursor = start;
    sizes
        .iter()
        .map(|&size| {
            let at = cursor;
            cursor += size + step;
            at
        })
        .collect()
}

/// Children without an entry in `offsets` sit at 0.
pub fn fixed(run: &MainRun<'_>) -> Vec<f32> {
    (0..run.sizes.len()).map(|i| run.offsets.get(i).copied().unwrap_or(0.0)).collect()
}

pub fn anchor_start(run: &MainRun<'_>) -> Vec<f32> {
    pack(run.sizes, 0.0, run.gap)
}

pub fn anchor_end(run: &MainRun<'_>) -> Vec<f32> {
    pack(run.sizes, run.available - run.content_length(), run.gap)
}

pub fn center(run: &MainRun<'_>) -> Vec<f32> {
    pack(run.sizes, (run.available - run.content_length()) * 0.5, run.gap)
}

pub fn space_between(run: &MainRun<'_>) -> Vec<f32> {
    let n = run.sizes.len();
    if n < 2 {
        return anchor_start(run);
    }
    let step = (run.available - run.total_size()) / (n - 1) as f32;
    pack(run.sizes, 0.0, step)
}

pub fn space_around(run: &MainRun<'_>) -> Vec<f32> {
    let free = (run.available - run.total_size()) / run.sizes.len() as f32;
    pack(run.sizes, free * 0.5, free)
}

pub fn space_evenly(run: &MainRun<'_>) -> Vec<f32> {
    let free = (run.available - run.total_size()) / (run.sizes.len() + 1) as f32;
    pack(run.sizes, free, free)
}
