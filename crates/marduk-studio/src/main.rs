//! Layout studio: loads a layout description, replays canvas resizes, and
//! prints the rectangle of every container after each pass.
//!
//! ```text
//! marduk-studio ui/dashboard.json --resize 1024x768 --resize 800x600 -vv
//! ```

mod logging;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use marduk_layout::prelude::*;

use crate::logging::{init_logging, LoggingConfig};

const BUNDLED_LAYOUT: &str = include_str!("../ui/dashboard.json");

#[derive(Debug, Parser)]
#[command(name = "marduk-studio", version, about)]
struct Args {
    /// Layout description (.json). The bundled dashboard is used when omitted.
    layout: Option<PathBuf>,

    /// Canvas size to apply after the initial pass, as WIDTHxHEIGHT. Repeatable.
    #[arg(long = "resize", value_name = "WxH")]
    resizes: Vec<Canvas>,

    /// Only print the final pass.
    #[arg(long)]
    last_only: bool,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy)]
struct Canvas(Vec2);

impl FromStr for Canvas {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((w, h)) = s.split_once(['x', 'X']) else {
            bail!("expected WIDTHxHEIGHT, got `{s}`");
        };
        let w: f32 = w.trim().parse().with_context(|| format!("bad width in `{s}`"))?;
        let h: f32 = h.trim().parse().with_context(|| format!("bad height in `{s}`"))?;
        if !(w.is_finite() && h.is_finite() && w >= 0.0 && h >= 0.0) {
            bail!("canvas size must be non-negative, got `{s}`");
        }
        Ok(Self(Vec2::new(w, h)))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::from_verbosity(args.verbose));

    let src = match &args.layout {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => BUNDLED_LAYOUT.to_owned(),
    };
    let desc = ContainerDesc::from_json(&src).context("parsing layout description")?;
    let mut tree = LayoutTree::from_desc(&desc).context("building layout tree")?;
    log::info!("loaded `{}` ({} containers)", desc.name, tree.root().subtree_len());

    // Resizes arrive the way a window shell would deliver them.
    let resizes = tree.resize_sender();

    tree.update().context("initial layout pass")?;
    if !args.last_only || args.resizes.is_empty() {
        print_pass(&tree);
    }

    for (i, Canvas(size)) in args.resizes.iter().enumerate() {
        resizes.send(*size).context("delivering resize")?;
        tree.update().with_context(|| format!("layout pass after resize to {}x{}", size.x, size.y))?;
        if !args.last_only || i + 1 == args.resizes.len() {
            print_pass(&tree);
        }
    }
    Ok(())
}

fn print_pass(tree: &LayoutTree) {
    let canvas = tree.root().dimension();
    println!("── pass {} · canvas {}x{} ──", tree.passes(), canvas.x, canvas.y);
    for LayoutRect { path, depth, rect } in tree.rects() {
        let label = if path.is_empty() { tree.root().name() } else { path.as_str() };
        println!(
            "{:indent$}{label:<28} x={:>8.2} y={:>8.2} w={:>8.2} h={:>8.2}",
            "",
            rect.origin.x,
            rect.origin.y,
            rect.size.x,
            rect.size.y,
            indent = depth * 2,
        );
    }
    println!();
}
