//! Property tests for the layout pass.

use marduk_layout::distribute::{distribute, MainRun};
use marduk_layout::prelude::*;
use proptest::prelude::*;

const EPS: f32 = 1e-2;

fn strategy() -> impl Strategy<Value = PositionStrategy> {
    prop::sample::select(PositionStrategy::ALL.to_vec())
}

fn align_mode() -> impl Strategy<Value = AlignStrategy> {
    prop::sample::select(vec![AlignStrategy::AnchorStart, AlignStrategy::Center, AlignStrategy::AnchorEnd])
}

fn direction() -> impl Strategy<Value = LayoutDirection> {
    prop::sample::select(vec![LayoutDirection::Horizontal, LayoutDirection::Vertical])
}

fn size_list(max_len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(1.0f32..200.0, 0..max_len)
}

/// A two-level tree with random configuration everywhere.
fn random_tree() -> impl Strategy<Value = LayoutTree> {
    (
        (strategy(), align_mode(), direction(), 0.0f32..30.0, 0.0f32..20.0),
        prop::collection::vec((1.0f32..300.0, 1.0f32..300.0, strategy(), size_list(4)), 0..5),
    )
        .prop_map(|((pos, align, dir, pad, gap), kids)| {
            let mut root = Container::new("root", Vec2::new(1000.0, 800.0))
                .position_strategy(pos)
                .align(align)
                .direction(dir)
                .padding(pad)
                .gap(gap);
            for (i, (w, h, kid_pos, grand)) in kids.into_iter().enumerate() {
                let mut kid = Container::new(format!("k{i}"), Vec2::new(w, h)).position_strategy(kid_pos);
                for (j, g) in grand.into_iter().enumerate() {
                    kid = kid.child(Container::new(format!("g{j}"), Vec2::new(g, g * 0.5)));
                }
                root = root.child(kid);
            }
            LayoutTree::with_root(root)
        })
}

proptest! {
    #[test]
    fn update_is_idempotent(mut tree in random_tree()) {
        tree.update().unwrap();
        let first: Vec<_> = tree.rects().collect();

        tree.mark_dirty();
        tree.update().unwrap();
        let second: Vec<_> = tree.rects().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn children_stay_inside_padding(
        pos in strategy().prop_filter("fixed places by hand", |s| *s != PositionStrategy::Fixed),
        align in align_mode(),
        dir in direction(),
        pad in 0.0f32..40.0,
        gap in 0.0f32..10.0,
        kids in prop::collection::vec((1.0f32..100.0, 1.0f32..100.0), 1..4),
    ) {
        let mut tree = LayoutTree::new(Vec2::new(600.0, 500.0));
        let root = tree.root_mut();
        root.set_position_strategy(pos);
        root.set_align(align);
        root.set_direction(dir);
        root.set_padding(pad).unwrap();
        root.set_gap(gap).unwrap();
        for (i, (w, h)) in kids.iter().enumerate() {
            root.add_child(Container::new(format!("c{i}"), Vec2::new(*w, *h))).unwrap();
        }
        tree.update().unwrap();

        // Slightly inflated so float rounding at the edges does not count as escape.
        let content = Rect::new(pad - EPS, pad - EPS, 600.0 - 2.0 * pad + 2.0 * EPS, 500.0 - 2.0 * pad + 2.0 * EPS);
        for child in tree.root().children() {
            let rect = child.rect().unwrap();
            prop_assert!(content.contains_rect(rect), "{:?} escapes {:?}", rect, content);
        }
    }

    #[test]
    fn space_between_pins_both_edges(sizes in prop::collection::vec(1.0f32..100.0, 2..8), slack in 0.0f32..500.0) {
        let available = sizes.iter().sum::<f32>() + slack;
        let run = MainRun { sizes: &sizes, offsets: &[], available, gap: 0.0 };
        let out = distribute(PositionStrategy::SpaceBetween, &run);

        prop_assert!(out[0].abs() < EPS);
        let last = sizes.len() - 1;
        prop_assert!((out[last] + sizes[last] - available).abs() < EPS);
    }

    #[test]
    fn space_evenly_gaps_are_equal(sizes in prop::collection::vec(1.0f32..100.0, 1..8), slack in 0.0f32..500.0) {
        let available = sizes.iter().sum::<f32>() + slack;
        let run = MainRun { sizes: &sizes, offsets: &[], available, gap: 0.0 };
        let out = distribute(PositionStrategy::SpaceEvenly, &run);

        let mut gaps = vec![out[0]];
        for i in 1..sizes.len() {
            gaps.push(out[i] - (out[i - 1] + sizes[i - 1]));
        }
        let last = sizes.len() - 1;
        gaps.push(available - (out[last] + sizes[last]));

        for g in &gaps {
            prop_assert!((g - gaps[0]).abs() < EPS, "{:?}", gaps);
        }
    }

    #[test]
    fn center_leaves_equal_space_each_side(sizes in size_list(8), gap in 0.0f32..20.0, available in 0.0f32..1000.0) {
        prop_assume!(!sizes.is_empty());
        let run = MainRun { sizes: &sizes, offsets: &[], available, gap };
        let out = distribute(PositionStrategy::Center, &run);

        let last = sizes.len() - 1;
        let leading = out[0];
        let trailing = available - (out[last] + sizes[last]);
        prop_assert!((leading - trailing).abs() < EPS);
    }

    #[test]
    fn single_child_space_between_matches_anchor_start(size in 1.0f32..500.0, available in 0.0f32..1000.0, gap in 0.0f32..50.0) {
        let sizes = [size];
        let run = MainRun { sizes: &sizes, offsets: &[], available, gap };
        prop_assert_eq!(
            distribute(PositionStrategy::SpaceBetween, &run),
            distribute(PositionStrategy::AnchorStart, &run)
        );
    }
}
