use crate::strategy::AlignStrategy;

/// Cross-axis offset of a child inside the content box.
///
/// A child larger than the content box gets a negative offset under
/// `Center` / `AnchorEnd`; that is overflow, not an error.
#[inline]
pub fn align(mode: AlignStrategy, content_cross: f32, child_cross: f32) -> f32 {
    match mode {
        AlignStrategy::AnchorStart => 0.0,
        AlignStrategy::Center => (content_cross - child_cross) * 0.5,
        AlignStrategy::AnchorEnd => content_cross - child_cross,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes() {
        assert_eq!(align(AlignStrategy::AnchorStart, 400.0, 100.0), 0.0);
        assert_eq!(align(AlignStrategy::Center, 400.0, 100.0), 150.0);
        assert_eq!(align(AlignStrategy::AnchorEnd, 400.0, 100.0), 300.0);
    }

    #[test]
    fn oversized_child_goes_negative() {
        assert_eq!(align(AlignStrategy::Center, 100.0, 140.0), -20.0);
        assert_eq!(align(AlignStrategy::AnchorEnd, 100.0, 140.0), -40.0);
    }
}
