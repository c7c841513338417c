//! Deterministic argument generator.
//!
//! # Example
//!
//! ```
//! use argcheck_test::generator::ArgGen;
//!
//! let mut a = ArgGen::seeded(7);
//! let mut b = ArgGen::seeded(7);
//! assert_eq!(a.int(), b.int());
//! ```

use argcheck_core::{Value, ValueType};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Smallest integer produced by [`ArgGen::int`].
pub const INT_MIN: i64 = -1000;

/// Largest integer produced by [`ArgGen::int`].
pub const INT_MAX: i64 = 1000;

const DEFAULT_SEED: u64 = 0x00a7_9c4e;

/// Produces reproducible argument values for tests.
pub struct ArgGen {
    rng: ChaCha8Rng,
}

impl ArgGen {
    /// Creates a generator with a fixed default seed.
    pub fn new() -> Self {
        Self::seeded(DEFAULT_SEED)
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns an integer in `[INT_MIN, INT_MAX]`.
    pub fn int(&mut self) -> Value {
        Value::Int(self.rng.random_range(INT_MIN..=INT_MAX))
    }

    /// Returns a strictly positive integer.
    pub fn positive_int(&mut self) -> Value {
        Value::Int(self.rng.random_range(1..=INT_MAX))
    }

    pub fn ints(&mut self, n: usize) -> Vec<Value> {
        (0..n).map(|_| self.int()).collect()
    }

    /// Returns a list of `n` strictly increasing integers.
    pub fn increasing_list(&mut self, n: usize) -> Value {
        let mut current = self.rng.random_range(INT_MIN..=0);
        let mut items = Vec::with_capacity(n);
        for _ in 0..n {
            items.push(Value::Int(current));
            current += self.rng.random_range(1..=10);
        }
        Value::List(items)
    }

    /// Returns a short lowercase ASCII string.
    pub fn word(&mut self) -> Value {
        let len = self.rng.random_range(1..=8);
        let s: String = (0..len)
            .map(|_| char::from(b'a' + self.rng.random_range(0..26u8)))
            .collect();
        Value::str(s)
    }

    /// Returns a value whose runtime type is exactly `t`.
    ///
    /// `Object` has no values of its own; an integer is returned.
    pub fn value_of(&mut self, t: ValueType) -> Value {
        match t {
            ValueType::None => Value::None,
            ValueType::Bool => Value::Bool(self.rng.random_bool(0.5)),
            ValueType::Int | ValueType::Object => self.int(),
            ValueType::Float => Value::Float(self.rng.random_range(-1000.0..1000.0)),
            ValueType::Str => self.word(),
            ValueType::List => Value::List(self.ints(3)),
            ValueType::Tuple => Value::Tuple(self.ints(2)),
            ValueType::Dict => Value::dict([(self.word(), self.int())]),
        }
    }
}

impl Default for ArgGen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_in_range() {
        let mut g = ArgGen::new();
        for _ in 0..200 {
            let v = g.int().as_i64().unwrap();
            assert!((INT_MIN..=INT_MAX).contains(&v));
        }
    }

    #[test]
    fn test_reproducible() {
        let mut a = ArgGen::seeded(42);
        let mut b = ArgGen::seeded(42);
        assert_eq!(a.ints(10), b.ints(10));
    }

    #[test]
    fn test_increasing_list() {
        let mut g = ArgGen::new();
        let list = g.increasing_list(6);
        let items: Vec<i64> = list
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_i64().unwrap())
            .collect();
        assert!(items.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_value_of_type() {
        let mut g = ArgGen::new();
        for t in [
            ValueType::None,
            ValueType::Bool,
            ValueType::Int,
            ValueType::Float,
            ValueType::Str,
            ValueType::List,
            ValueType::Tuple,
            ValueType::Dict,
        ] {
            assert_eq!(g.value_of(t).value_type(), t);
        }
    }
}
