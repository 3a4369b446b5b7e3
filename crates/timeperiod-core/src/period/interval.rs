// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::error::{IntersectionError, InvalidInterval};
use std::ops::{BitAnd, Range};

/// A time interval bounded by a `start` and a strictly later `finish`.
///
/// Instants are opaque: any totally ordered, copyable type works, and no
/// arithmetic is ever performed on them. Integer epoch seconds are the
/// typical choice.
///
/// # Invariants
/// `start` is always strictly less than `finish`. The fields are private and
/// there are no mutators, so a constructed interval never changes.
/// [`Interval::new`] is the only public constructor:
///
/// ```compile_fail
/// # use timeperiod_core::period::interval::Interval;
///
/// let _ = Interval::new_unchecked(10, 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T>
where
    T: Ord + Copy,
{
    start: T,
    finish: T,
}

/// How an interval relates to another one it is intersected with.
///
/// Every variant except `Disjoint` carries the bounds of the overlap. The
/// variants are named from the point of view of the receiving interval
/// (`self`) in [`Interval::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlap<T> {
    /// The intervals do not overlap. Touching endpoints fall in here.
    Disjoint,
    /// `self` encloses `other`, including the case of identical intervals.
    Contains { start: T, finish: T },
    /// `self` lies strictly inside `other`.
    ContainedIn { start: T, finish: T },
    /// `other` begins no later than `self` and ends inside it.
    OverlapsStart { start: T, finish: T },
    /// `other` begins inside `self` and ends no earlier than it.
    OverlapsFinish { start: T, finish: T },
}

impl<T> Overlap<T>
where
    T: Copy,
{
    /// Returns the `(start, finish)` of the overlap, or `None` if disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use timeperiod_core::period::interval::Overlap;
    ///
    /// assert_eq!(Overlap::Contains { start: 2, finish: 8 }.bounds(), Some((2, 8)));
    /// assert_eq!(Overlap::<i64>::Disjoint.bounds(), None);
    /// ```
    #[inline]
    pub fn bounds(&self) -> Option<(T, T)> {
        match *self {
            Self::Disjoint => None,
            Self::Contains { start, finish }
            | Self::ContainedIn { start, finish }
            | Self::OverlapsStart { start, finish }
            | Self::OverlapsFinish { start, finish } => Some((start, finish)),
        }
    }

    /// Returns `true` for [`Overlap::Disjoint`].
    #[inline]
    pub fn is_disjoint(&self) -> bool {
        matches!(self, Self::Disjoint)
    }
}

impl<T> Interval<T>
where
    T: Ord + Copy,
{
    /// Creates a new `Interval`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInterval`] if `finish <= start`. Equal endpoints are
    /// rejected, so an interval always has a non-zero extent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use timeperiod_core::period::interval::Interval;
    ///
    /// let iv = Interval::new(1535391265, 1535391865).unwrap();
    /// assert_eq!(iv.start(), 1535391265);
    ///
    /// assert!(Interval::new(10, 10).is_err());
    /// assert!(Interval::new(10, 0).is_err());
    /// ```
    #[inline]
    pub fn new(start: T, finish: T) -> Result<Self, InvalidInterval> {
        if finish <= start {
            return Err(InvalidInterval);
        }
        Ok(Self { start, finish })
    }

    /// Creates a new `Interval` without checking invariants in release builds.
    ///
    /// The caller must ensure `start < finish`. A `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub(crate) fn new_unchecked(start: T, finish: T) -> Self {
        debug_assert!(start < finish, "{}", InvalidInterval);
        Self { start, finish }
    }

    /// Returns the start of the interval.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the finish of the interval.
    #[inline]
    pub const fn finish(&self) -> T {
        self.finish
    }

    /// Returns `true` if the two intervals share more than a boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use timeperiod_core::period::interval::Interval;
    ///
    /// let a = Interval::new(0, 10).unwrap();
    /// assert!(a.intersects(&Interval::new(5, 15).unwrap()));
    /// assert!(!a.intersects(&Interval::new(10, 20).unwrap())); // Touching
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_disjoint_from(other)
    }

    #[inline]
    fn is_disjoint_from(&self, other: &Self) -> bool {
        other.finish <= self.start || other.start >= self.finish
    }

    #[inline]
    fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && self.finish >= other.finish
    }

    #[inline]
    fn lies_strictly_within(&self, other: &Self) -> bool {
        self.start > other.start && self.finish < other.finish
    }

    #[inline]
    fn starts_within(&self, other: &Self) -> bool {
        self.start < other.finish && self.start >= other.start
    }

    #[inline]
    fn finishes_within(&self, other: &Self) -> bool {
        self.finish > other.start && self.finish <= other.finish
    }

    /// Classifies how `other` overlaps this interval.
    ///
    /// The disjointness check runs first, then containment, strict reverse
    /// containment, `other` covering the start, and `other` covering the
    /// finish. The first predicate that holds decides the result, so an
    /// identical interval is reported as [`Overlap::Contains`].
    ///
    /// # Errors
    ///
    /// Returns [`IntersectionError::Unclassified`] if none of the branches
    /// match, which requires an inconsistent `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use timeperiod_core::period::interval::{Interval, Overlap};
    ///
    /// let a = Interval::new(0, 10).unwrap();
    /// let b = Interval::new(-5, 5).unwrap();
    /// assert_eq!(
    ///     a.classify(&b),
    ///     Ok(Overlap::OverlapsStart { start: 0, finish: 5 })
    /// );
    /// ```
    pub fn classify(&self, other: &Self) -> Result<Overlap<T>, IntersectionError<T>>
    where
        T: std::fmt::Debug,
    {
        let overlap = if self.is_disjoint_from(other) {
            Overlap::Disjoint
        } else if self.encloses(other) {
            Overlap::Contains {
                start: other.start,
                finish: other.finish,
            }
        } else if self.lies_strictly_within(other) {
            Overlap::ContainedIn {
                start: self.start,
                finish: self.finish,
            }
        } else if self.starts_within(other) {
            Overlap::OverlapsStart {
                start: self.start,
                finish: other.finish,
            }
        } else if self.finishes_within(other) {
            Overlap::OverlapsFinish {
                start: other.start,
                finish: self.finish,
            }
        } else {
            return Err(IntersectionError::Unclassified {
                this: (*self).into(),
                other: (*other).into(),
            });
        };

        Ok(overlap)
    }

    /// Computes the intersection, reporting an unclassified overlap as an error.
    ///
    /// # Errors
    ///
    /// See [`Interval::classify`].
    #[inline]
    pub fn try_intersection(&self, other: &Self) -> Result<Option<(T, T)>, IntersectionError<T>>
    where
        T: std::fmt::Debug,
    {
        self.classify(other).map(|overlap| overlap.bounds())
    }

    /// Computes the `(start, finish)` range shared by both intervals.
    ///
    /// Returns `None` when the intervals do not overlap. Intervals that only
    /// touch (`other.finish == self.start` or `other.start == self.finish`)
    /// do not overlap.
    ///
    /// # Panics
    ///
    /// Panics if the overlap cannot be classified, see [`Interval::classify`].
    /// The offending pair is logged at error level first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use timeperiod_core::period::interval::Interval;
    ///
    /// let a = Interval::new(0, 10).unwrap();
    /// assert_eq!(a.intersection(&Interval::new(5, 15).unwrap()), Some((5, 10)));
    /// assert_eq!(a.intersection(&Interval::new(-5, 0).unwrap()), None);
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<(T, T)>
    where
        T: std::fmt::Debug,
    {
        match self.try_intersection(other) {
            Ok(bounds) => bounds,
            Err(err) => {
                log::error!("{err}");
                unreachable!("{err}")
            }
        }
    }

    /// Like [`Interval::intersection`], but returns the overlap as an `Interval`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use timeperiod_core::period::interval::Interval;
    ///
    /// let a = Interval::new(0, 10).unwrap();
    /// let b = Interval::new(5, 15).unwrap();
    /// assert_eq!(a.overlap(&b), Some(Interval::new(5, 10).unwrap()));
    /// ```
    #[inline]
    pub fn overlap(&self, other: &Self) -> Option<Self>
    where
        T: std::fmt::Debug,
    {
        self.intersection(other)
            .map(|(start, finish)| Self::new_unchecked(start, finish))
    }
}

impl<T> BitAnd for Interval<T>
where
    T: Ord + Copy + std::fmt::Debug,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.overlap(&rhs)
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: Ord + Copy + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("start", &self.start)
            .field("finish", &self.finish)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: Ord + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.finish)
    }
}

impl<T> TryFrom<(T, T)> for Interval<T>
where
    T: Ord + Copy,
{
    type Error = InvalidInterval;

    #[inline]
    fn try_from((start, finish): (T, T)) -> Result<Self, Self::Error> {
        Self::new(start, finish)
    }
}

impl<T> TryFrom<Range<T>> for Interval<T>
where
    T: Ord + Copy,
{
    type Error = InvalidInterval;

    #[inline]
    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::new(range.start, range.end)
    }
}

impl<T> From<Interval<T>> for (T, T)
where
    T: Ord + Copy,
{
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        (iv.start, iv.finish)
    }
}

impl<T> From<Interval<T>> for Range<T>
where
    T: Ord + Copy,
{
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        Range {
            start: iv.start,
            end: iv.finish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    const START_EPOCH: i64 = 1535391265;
    const FINISH_EPOCH: i64 = 1535391865;

    fn iv(start: i64, finish: i64) -> Interval<i64> {
        Interval::new(start, finish).unwrap()
    }

    fn base() -> Interval<i64> {
        iv(START_EPOCH, FINISH_EPOCH)
    }

    #[test]
    fn test_construction_valid() {
        let period = base();
        assert_eq!(period.start(), START_EPOCH);
        assert_eq!(period.finish(), FINISH_EPOCH);
    }

    #[test]
    fn test_construction_finish_before_start() {
        let err = Interval::new(START_EPOCH, START_EPOCH - 10).unwrap_err();
        assert_eq!(err, InvalidInterval);
        assert_eq!(err.to_string(), "finish time must be after start time");
    }

    #[test]
    fn test_construction_finish_equals_start() {
        let err = Interval::new(START_EPOCH, START_EPOCH).unwrap_err();
        assert_eq!(err.to_string(), "finish time must be after start time");
    }

    #[test]
    fn test_construction_smallest_extent() {
        let period = iv(0, 1);
        assert_eq!((period.start(), period.finish()), (0, 1));
    }

    #[test]
    fn test_construction_non_numeric_instants() {
        let period = Interval::new('a', 'z').unwrap();
        assert_eq!(period.start(), 'a');
        assert!(Interval::new("b", "a").is_err());
    }

    #[test]
    #[should_panic(expected = "finish time must be after start time")]
    #[cfg(debug_assertions)]
    fn test_new_unchecked_debug_panic() {
        Interval::new_unchecked(10, 5);
    }

    /// An instant whose `Ord` is the natural one except that `2 < 1`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Skewed(i64);

    impl PartialOrd for Skewed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Skewed {
        fn cmp(&self, other: &Self) -> Ordering {
            match (self.0, other.0) {
                (2, 1) => Ordering::Less,
                (a, b) => a.cmp(&b),
            }
        }
    }

    fn skewed_pair() -> (Interval<Skewed>, Interval<Skewed>) {
        (
            Interval::new(Skewed(0), Skewed(1)).unwrap(),
            Interval::new(Skewed(2), Skewed(3)).unwrap(),
        )
    }

    #[test]
    fn test_classify_inconsistent_order_unclassified() {
        let (a, b) = skewed_pair();
        assert!(a.intersects(&b));
        assert_eq!(
            a.classify(&b),
            Err(IntersectionError::Unclassified {
                this: (Skewed(0), Skewed(1)),
                other: (Skewed(2), Skewed(3)),
            })
        );
        assert!(a.try_intersection(&b).is_err());
    }

    #[test]
    #[should_panic(expected = "unclassified overlap")]
    fn test_intersection_inconsistent_order_panics() {
        let (a, b) = skewed_pair();
        let _ = a.intersection(&b);
    }

    #[test]
    fn test_intersection_ends_before_start() {
        let other = iv(START_EPOCH - 100, START_EPOCH - 10);
        assert_eq!(base().intersection(&other), None);
    }

    #[test]
    fn test_intersection_starts_after_finish() {
        let other = iv(FINISH_EPOCH + 10, FINISH_EPOCH + 100);
        assert_eq!(base().intersection(&other), None);
    }

    #[test]
    fn test_intersection_touching_boundaries() {
        // Touching at either end is not an overlap.
        let before = iv(START_EPOCH - 10, START_EPOCH);
        let after = iv(FINISH_EPOCH, FINISH_EPOCH + 10);
        assert_eq!(base().intersection(&before), None);
        assert_eq!(base().intersection(&after), None);
        assert_eq!(before.intersection(&base()), None);
        assert_eq!(after.intersection(&base()), None);
    }

    #[test]
    fn test_intersection_other_encloses() {
        let other = iv(START_EPOCH - 10, FINISH_EPOCH + 10);
        assert_eq!(
            base().intersection(&other),
            Some((START_EPOCH, FINISH_EPOCH))
        );
        assert_eq!(
            base().classify(&other),
            Ok(Overlap::ContainedIn {
                start: START_EPOCH,
                finish: FINISH_EPOCH
            })
        );
    }

    #[test]
    fn test_intersection_contained_within() {
        let other = iv(START_EPOCH + 10, FINISH_EPOCH - 10);
        assert_eq!(
            base().intersection(&other),
            Some((START_EPOCH + 10, FINISH_EPOCH - 10))
        );
    }

    #[test]
    fn test_intersection_identical() {
        assert_eq!(
            base().intersection(&base()),
            Some((START_EPOCH, FINISH_EPOCH))
        );
        assert!(matches!(
            base().classify(&base()),
            Ok(Overlap::Contains { .. })
        ));
    }

    #[test]
    fn test_intersection_overlaps_start() {
        let other = iv(START_EPOCH - 10, START_EPOCH + 10);
        assert_eq!(
            base().intersection(&other),
            Some((START_EPOCH, START_EPOCH + 10))
        );
        assert_eq!(
            base().classify(&other),
            Ok(Overlap::OverlapsStart {
                start: START_EPOCH,
                finish: START_EPOCH + 10
            })
        );
    }

    #[test]
    fn test_intersection_shares_start() {
        let other = iv(START_EPOCH, START_EPOCH + 10);
        assert_eq!(
            base().intersection(&other),
            Some((START_EPOCH, START_EPOCH + 10))
        );
    }

    #[test]
    fn test_intersection_overlaps_finish() {
        let other = iv(FINISH_EPOCH - 10, FINISH_EPOCH + 10);
        assert_eq!(
            base().intersection(&other),
            Some((FINISH_EPOCH - 10, FINISH_EPOCH))
        );
        assert_eq!(
            base().classify(&other),
            Ok(Overlap::OverlapsFinish {
                start: FINISH_EPOCH - 10,
                finish: FINISH_EPOCH
            })
        );
    }

    #[test]
    fn test_intersection_shares_finish() {
        let other = iv(FINISH_EPOCH - 10, FINISH_EPOCH);
        assert_eq!(
            base().intersection(&other),
            Some((FINISH_EPOCH - 10, FINISH_EPOCH))
        );
    }

    #[test]
    fn test_intersection_one_unit_overlap() {
        let a = iv(0, 10);
        assert_eq!(a.intersection(&iv(-5, 1)), Some((0, 1)));
        assert_eq!(a.intersection(&iv(9, 15)), Some((9, 10)));
    }

    #[test]
    fn test_overlap_and_bitand() {
        let a = iv(0, 10);
        let b = iv(5, 15);
        assert_eq!(a.overlap(&b), Some(iv(5, 10)));
        assert_eq!(a & b, Some(iv(5, 10)));
        assert_eq!(a & iv(10, 20), None);
    }

    #[test]
    fn test_intersects() {
        let a = iv(0, 10);
        assert!(!a.intersects(&iv(-5, 0)));
        assert!(a.intersects(&iv(-5, 5)));
        assert!(a.intersects(&a));
        assert!(!a.intersects(&iv(10, 15)));
    }

    #[test]
    fn test_overlap_helpers() {
        assert!(Overlap::<i64>::Disjoint.is_disjoint());
        assert_eq!(Overlap::<i64>::Disjoint.bounds(), None);
        let o = Overlap::OverlapsFinish {
            start: 3,
            finish: 7,
        };
        assert!(!o.is_disjoint());
        assert_eq!(o.bounds(), Some((3, 7)));
    }

    #[test]
    fn test_traits_display_debug() {
        let a = iv(10, 20);
        assert_eq!(format!("{}", a), "[10, 20]");
        assert_eq!(format!("{:?}", a), "Interval { start: 10, finish: 20 }");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Interval::<i64>::try_from((1, 5)), Ok(iv(1, 5)));
        assert_eq!(Interval::<i64>::try_from((5, 5)), Err(InvalidInterval));
        assert_eq!(Interval::<i64>::try_from(1..5), Ok(iv(1, 5)));
        assert_eq!(Interval::<i64>::try_from(Range { start: 5, end: 1 }), Err(InvalidInterval));

        let pair: (i64, i64) = iv(1, 5).into();
        assert_eq!(pair, (1, 5));
        let range: Range<i64> = iv(1, 5).into();
        assert_eq!(range, 1..5);
    }

    fn interval_strategy() -> impl Strategy<Value = Interval<i64>> {
        (-1_000i64..1_000, 1i64..500).prop_map(|(start, len)| iv(start, start + len))
    }

    proptest! {
        #[test]
        fn prop_rejects_non_positive_extent(start in any::<i64>(), back in 0i64..1_000) {
            let finish = start.saturating_sub(back);
            prop_assert_eq!(Interval::new(start, finish), Err(InvalidInterval));
        }

        #[test]
        fn prop_round_trips_bounds(start in any::<i32>(), len in 1i64..1_000_000) {
            let start = i64::from(start);
            let period = iv(start, start + len);
            prop_assert_eq!((period.start(), period.finish()), (start, start + len));
        }

        #[test]
        fn prop_matches_max_min(a in interval_strategy(), b in interval_strategy()) {
            let lo = a.start().max(b.start());
            let hi = a.finish().min(b.finish());
            let expected = if lo < hi { Some((lo, hi)) } else { None };
            prop_assert_eq!(a.intersection(&b), expected);
        }

        #[test]
        fn prop_chain_is_exhaustive(a in interval_strategy(), b in interval_strategy()) {
            prop_assert!(a.try_intersection(&b).is_ok());
        }

        #[test]
        fn prop_overlap_upholds_invariant(a in interval_strategy(), b in interval_strategy()) {
            if let Some(shared) = a.overlap(&b) {
                prop_assert!(shared.start() < shared.finish());
            }
        }

        #[test]
        fn prop_symmetric(a in interval_strategy(), b in interval_strategy()) {
            prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        }

        #[test]
        fn prop_containment_law(a in interval_strategy(), b in interval_strategy()) {
            if a.start() <= b.start() && a.finish() >= b.finish() {
                prop_assert_eq!(a.intersection(&b), Some((b.start(), b.finish())));
            }
        }
    }
}
