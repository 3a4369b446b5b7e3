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

//! Error types for interval construction and classification.

/// Returned when an interval is constructed with `finish <= start`.
///
/// Zero-length intervals are rejected as well, so equal endpoints fail.
///
/// # Examples
///
/// ```rust
/// # use timeperiod_core::error::InvalidInterval;
///
/// assert_eq!(
///     InvalidInterval.to_string(),
///     "finish time must be after start time"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("finish time must be after start time")]
pub struct InvalidInterval;

/// Failure modes of the overlap classification chain.
///
/// For a total order on `T` the chain always matches one of its branches once
/// the disjointness check has passed, so this error only surfaces when the
/// `Ord` implementation of `T` is inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IntersectionError<T>
where
    T: std::fmt::Debug,
{
    /// No branch of the chain matched two overlapping intervals.
    #[error("unclassified overlap between {this:?} and {other:?}")]
    Unclassified {
        /// `(start, finish)` of the receiving interval.
        this: (T, T),
        /// `(start, finish)` of the interval it was compared against.
        other: (T, T),
    },
}
