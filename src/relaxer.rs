use core::{fmt::Debug, ops::Add};

/// Numeric value accumulated along a path.
///
/// Overflowing integer sums and non-finite float weights are not checked;
/// results for such inputs are unspecified.
pub trait Distance: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Distance of the root to itself.
    const ZERO: Self;
    /// Largest representable distance (`+inf` for floats).
    const INFINITY: Self;
    /// Smallest representable distance (`-inf` for floats).
    ///
    /// Equal to [`Self::ZERO`] for unsigned integers.
    const NEG_INFINITY: Self;
}

macro_rules! impl_distance_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Distance for $ty {
            const ZERO: Self = 0;
            const INFINITY: Self = <$ty>::MAX;
            const NEG_INFINITY: Self = <$ty>::MIN;
        }
    )*};
}

macro_rules! impl_distance_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Distance for $ty {
            const ZERO: Self = 0.0;
            const INFINITY: Self = <$ty>::INFINITY;
            const NEG_INFINITY: Self = <$ty>::NEG_INFINITY;
        }
    )*};
}

impl_distance_int!(i32, i64, isize, u32, u64, usize);
impl_distance_float!(f32, f64);

/// Algebra used to relax edges: what a path is worth and which path wins.
///
/// Implementations are stateless and may be shared between threads and
/// computations.
pub trait DistanceRelaxer<D: Distance> {
    /// Conceptual distance of a vertex that has not been reached.
    fn initial_distance(&self) -> D;

    /// Distance of the root. Zero for both stock relaxers.
    #[inline]
    fn root_distance(&self) -> D {
        D::ZERO
    }

    /// Distance of a path extended by an edge of weight `weight`.
    fn combine(&self, distance: D, weight: D) -> D;

    /// Whether `candidate` strictly improves on `current`.
    fn is_better(&self, candidate: D, current: D) -> bool;
}

impl<D: Distance, R: DistanceRelaxer<D> + ?Sized> DistanceRelaxer<D> for &R {
    #[inline]
    fn initial_distance(&self) -> D {
        (**self).initial_distance()
    }

    #[inline]
    fn root_distance(&self) -> D {
        (**self).root_distance()
    }

    #[inline]
    fn combine(&self, distance: D, weight: D) -> D {
        (**self).combine(distance, weight)
    }

    #[inline]
    fn is_better(&self, candidate: D, current: D) -> bool {
        (**self).is_better(candidate, current)
    }
}

/// Minimum accumulated weight wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShortestDistanceRelaxer;

impl<D: Distance> DistanceRelaxer<D> for ShortestDistanceRelaxer {
    #[inline]
    fn initial_distance(&self) -> D {
        D::INFINITY
    }

    #[inline]
    fn combine(&self, distance: D, weight: D) -> D {
        distance + weight
    }

    #[inline]
    fn is_better(&self, candidate: D, current: D) -> bool {
        candidate < current
    }
}

/// Maximum accumulated weight wins: longest paths, as used for
/// critical-path scheduling.
///
/// With unsigned distances the initial distance is `0`, the root's own
/// distance, so reachability must be read from the distance map rather than
/// from the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CriticalDistanceRelaxer;

impl<D: Distance> DistanceRelaxer<D> for CriticalDistanceRelaxer {
    #[inline]
    fn initial_distance(&self) -> D {
        D::NEG_INFINITY
    }

    #[inline]
    fn combine(&self, distance: D, weight: D) -> D {
        distance + weight
    }

    #[inline]
    fn is_better(&self, candidate: D, current: D) -> bool {
        candidate > current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_prefers_smaller() {
        let r = ShortestDistanceRelaxer;
        assert!(r.is_better(1_i64, 2));
        assert!(!r.is_better(2_i64, 2));
        assert!(!r.is_better(3_i64, 2));
        assert_eq!(DistanceRelaxer::<f64>::initial_distance(&r), f64::INFINITY);
        assert_eq!(r.combine(2_u32, 3), 5);
    }

    #[test]
    fn critical_prefers_larger() {
        let r = CriticalDistanceRelaxer;
        assert!(r.is_better(3_i64, 2));
        assert!(!r.is_better(2_i64, 2));
        assert!(!r.is_better(1_i64, 2));
        assert_eq!(
            DistanceRelaxer::<f64>::initial_distance(&r),
            f64::NEG_INFINITY
        );
        assert_eq!(DistanceRelaxer::<i32>::initial_distance(&r), i32::MIN);
    }

    #[test]
    fn unsigned_critical_initial_equals_root() {
        let r = CriticalDistanceRelaxer;
        assert_eq!(DistanceRelaxer::<u32>::initial_distance(&r), 0);
        assert_eq!(
            DistanceRelaxer::<u32>::initial_distance(&r),
            DistanceRelaxer::<u32>::root_distance(&r)
        );
        assert_eq!(DistanceRelaxer::<usize>::initial_distance(&r), usize::MIN);
    }

    #[test]
    fn root_distance_is_zero_for_both() {
        assert_eq!(DistanceRelaxer::<i32>::root_distance(&ShortestDistanceRelaxer), 0);
        assert_eq!(DistanceRelaxer::<f32>::root_distance(&CriticalDistanceRelaxer), 0.0);
    }

    #[test]
    fn reference_forwards() {
        let r = &CriticalDistanceRelaxer;
        assert!(DistanceRelaxer::<u64>::is_better(&r, 4, 1));
    }
}
