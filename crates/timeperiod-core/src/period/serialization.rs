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

//! Validating `serde` support for [`Interval`].
//!
//! Intervals serialize as a struct with `start` and `finish` fields.
//! Deserialization goes through [`Interval::new`], so a payload whose
//! `finish` is not after its `start` is rejected with the same message as
//! the constructor.

use super::interval::Interval;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeStruct};

impl<T> Serialize for Interval<T>
where
    T: Ord + Copy + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Interval", 2)?;
        state.serialize_field("start", &self.start())?;
        state.serialize_field("finish", &self.finish())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "Interval", deny_unknown_fields)]
struct RawInterval<T> {
    start: T,
    finish: T,
}

impl<'de, T> Deserialize<'de> for Interval<T>
where
    T: Ord + Copy + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawInterval::<T>::deserialize(deserializer)?;
        Interval::new(raw.start, raw.finish).map_err(de::Error::custom)
    }
}
