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

//! # Timeperiod Core
//!
//! A small value type for time intervals. An [`Interval`] is built from a
//! `start` and a strictly later `finish`, and can compute the range it
//! shares with another interval.
//!
//! ## Modules
//!
//! - `period`: The `Interval<T>` type, the `Overlap<T>` classification, and
//!   optional `serde` support.
//! - `error`: `InvalidInterval` for rejected construction and
//!   `IntersectionError` for an overlap the branch chain cannot classify.
//!
//! ## Example
//!
//! ```rust
//! use timeperiod_core::Interval;
//!
//! let a = Interval::new(1535391265, 1535391865)?;
//! let b = Interval::new(1535391255, 1535391275)?;
//! assert_eq!(a.intersection(&b), Some((1535391265, 1535391275)));
//! # Ok::<(), timeperiod_core::InvalidInterval>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: (De)serialize intervals as `{ "start": .., "finish": .. }`,
//!   re-validating on the way in.

pub mod error;
pub mod period;

pub use error::{IntersectionError, InvalidInterval};
pub use period::interval::{Interval, Overlap};
