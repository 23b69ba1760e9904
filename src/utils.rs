use core::ops::Range;

pub(crate) trait RangeSplitAtHalf {
    fn split_at_half(&self) -> (Range<usize>, Range<usize>);
}

impl RangeSplitAtHalf for Range<usize> {
    #[inline]
    fn split_at_half(&self) -> (Range<usize>, Range<usize>) {
        let mid = self.start + self.len() / 2;
        (self.start..mid, mid..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_cover_the_range() {
        assert_eq!((3..8).split_at_half(), (3..5, 5..8));
        assert_eq!((0..1).split_at_half(), (0..0, 0..1));
        assert_eq!((4..4).split_at_half(), (4..4, 4..4));
    }
}
