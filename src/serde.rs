// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynamicArray`](crate::DynamicArray).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence. Requires `T: Default`, since growth
//!   fills fresh slots with defaults. An allocation failure while growing is
//!   reported as a custom deserialization error.
//!
//! Capacity is not part of the serialized form; a deserialized array's
//! capacity follows the usual growth policy.

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for DynamicArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

// Upper bound on the reservation taken from an untrusted size hint.
const MAX_PREALLOC: usize = 4096;

struct ArrayVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for ArrayVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = DynamicArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = DynamicArray::<T>::try_with_capacity(hint)
            .map_err(<A::Error as de::Error>::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.try_push(elem).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for DynamicArray<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor::<T>(PhantomData))
    }
}
