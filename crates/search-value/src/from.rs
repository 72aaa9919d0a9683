//! Building [`Value`]s from Rust data.
//!
//! Scalars map to the variant of the same kind and never change it: integer
//! types give `Int` (or `Double` once out of the `i64` range), floats give
//! `Double` even when integral. Sequences give `Array`, key-value collections
//! give `Object` in iteration order. `Option::None` gives `Null`.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::value::Value;

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Integer types that always fit in an `i64`.
macro_rules! lossless_int {
    ($($ty:ty)+) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )+
    };
}

/// Integer types that may not fit: out-of-range values become `Double`,
/// as when decoding a literal outside the `i64` range.
macro_rules! widening_int {
    ($($ty:ty)+) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    i64::try_from(n).map_or(Self::Double(n as f64), Self::Int)
                }
            }
        )+
    };
}

lossless_int! { i8 i16 i32 i64 u8 u16 u32 }
widening_int! { u64 usize isize }

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Double(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Double(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Self {
        Self::String(String::from(s))
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    fn from(s: Cow<'a, str>) -> Self {
        Self::String(s.into_owned())
    }
}

impl<V> From<Vec<V>> for Value
where
    V: Into<Value>,
{
    fn from(list: Vec<V>) -> Self {
        Self::Array(list.into_iter().map(Into::into).collect())
    }
}

impl<K, V> From<IndexMap<K, V>> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: IndexMap<K, V>) -> Self {
        Self::Object(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// `None` becomes `Null`. Use `Option<Value>` instead when absence must stay
/// distinguishable from an explicit null.
impl<V> From<Option<V>> for Value
where
    V: Into<Value>,
{
    fn from(opt: Option<V>) -> Self {
        match opt {
            None => Self::Null,
            Some(value) => value.into(),
        }
    }
}

impl<V> FromIterator<V> for Value
where
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K, V> FromIterator<(K, V)> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_beyond_i64_becomes_double() {
        assert_eq!(Value::from(7u64), Value::Int(7));
        assert_eq!(Value::from(u64::MAX), Value::Double(u64::MAX as f64));
        assert_eq!(Value::from(3usize), Value::Int(3));
    }

    #[test]
    fn integral_float_stays_double() {
        assert_eq!(Value::from(2.0f32), Value::Double(2.0));
        assert_ne!(Value::from(2.0), Value::from(2));
    }

    #[test]
    fn entries_keep_iteration_order() {
        let value = Value::from([("b", 1), ("a", 2)]);
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Cow::Borrowed("x")), Value::String("x".into()));
    }
}
