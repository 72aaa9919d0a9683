//! Structural equality and hashing for [`Value`].
//!
//! Two values are equal when they are the same variant and their payloads are
//! recursively equal. Arrays compare element-wise in order; objects compare as
//! key sets plus per-key values, so insertion order does not matter. `Int(1)`
//! and `Double(1.0)` are different values.
//!
//! Doubles compare by a canonical bit pattern: `0.0` equals `-0.0` and every NaN
//! equals every other NaN. This keeps `Eq` reflexive and `Hash` consistent with
//! `Eq`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::value::{Map, Value};

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y),
            (Value::Object(a), Value::Object(b)) => objects_equal(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Same key set, same value per key. Positions are never compared.
fn objects_equal(a: &Map, b: &Map) -> bool {
    a.len() == b.len() && a.iter().all(|(key, value)| b.get(key) == Some(value))
}

fn canonical_bits(f: f64) -> u64 {
    if f == 0.0 {
        0
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Double(f) => canonical_bits(*f).hash(state),
            Value::String(s) => s.hash(state),
            Value::Array(items) => {
                items.len().hash(state);
                for item in items {
                    item.hash(state);
                }
            }
            Value::Object(map) => {
                map.len().hash(state);
                // Entries are hashed on their own and summed so order does not
                // matter. `H` cannot be forked, so entries use an unkeyed
                // hasher; the sum itself still goes through `state`.
                let combined = map.iter().fold(0u64, |acc, entry| {
                    let mut hasher = DefaultHasher::new();
                    entry.hash(&mut hasher);
                    acc.wrapping_add(hasher.finish())
                });
                combined.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(value: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn signed_zero_and_nan_are_self_consistent() {
        assert_eq!(Value::Double(0.0), Value::Double(-0.0));
        assert_eq!(hash_of(&Value::Double(0.0)), hash_of(&Value::Double(-0.0)));
        assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
        assert_eq!(hash_of(&Value::Double(f64::NAN)), hash_of(&Value::Double(-f64::NAN)));
    }

    #[test]
    fn int_and_double_are_distinct() {
        assert_ne!(Value::Int(1), Value::Double(1.0));
    }

    #[test]
    fn object_hash_ignores_order() {
        let ab: Map = [("a".to_string(), Value::Int(1)), ("b".to_string(), Value::Int(2))]
            .into_iter()
            .collect();
        let ba: Map = [("b".to_string(), Value::Int(2)), ("a".to_string(), Value::Int(1))]
            .into_iter()
            .collect();
        assert_eq!(Value::Object(ab.clone()), Value::Object(ba.clone()));
        assert_eq!(hash_of(&Value::Object(ab)), hash_of(&Value::Object(ba)));
    }

    #[test]
    fn object_hash_follows_caller_keying() {
        use std::collections::hash_map::RandomState;
        use std::hash::BuildHasher;

        let object = Value::Object([("a".to_string(), Value::Int(1))].into_iter().collect());
        let first = RandomState::new();
        let second = RandomState::new();
        assert_eq!(first.hash_one(&object), first.hash_one(&object));
        assert_ne!(first.hash_one(&object), second.hash_one(&object));
    }

    #[test]
    fn object_with_null_entry_differs_from_missing_entry() {
        let with_null: Map = [("a".to_string(), Value::Null)].into_iter().collect();
        assert_ne!(Value::Object(with_null), Value::Object(Map::new()));
    }
}
