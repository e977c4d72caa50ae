// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash::DEFAULT_UPDATE_SEED;
use crate::hash::murmur_hash64a;
use crate::hll::MAX_PRECISION;
use crate::hll::MIN_PRECISION;
use crate::hll::index_and_rank;

/// HyperLogLog sketch for estimating the number of distinct byte
/// sequences fed to [`update`](HllSketch::update).
///
/// The sketch is a single owned value: precision, cached alpha constant
/// and register array. It is not internally synchronized; callers that
/// share a sketch across threads must impose their own mutual exclusion
/// around updates.
#[derive(Debug, Clone, PartialEq)]
pub struct HllSketch {
    b: u8,
    alpha: f64,
    registers: Box<[u8]>,
}

impl HllSketch {
    /// Create a new sketch with precision `b`, allocating `2^b` zeroed
    /// registers.
    ///
    /// Returns an [`ErrorKind::InvalidPrecision`] error when `b` is
    /// outside `[4; 24]`. The lower bound keeps the alpha approximation
    /// valid; the upper bound keeps the register array practical and the
    /// maximum rank within a one-byte register.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hyperloglog::hll::HllSketch;
    /// let sketch = HllSketch::new(12).unwrap();
    /// assert_eq!(sketch.b(), 12);
    /// assert_eq!(sketch.m(), 4096);
    /// ```
    pub fn new(b: u8) -> Result<HllSketch, Error> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&b) {
            return Err(Error::new(
                ErrorKind::InvalidPrecision,
                format!("precision must be in [{MIN_PRECISION}; {MAX_PRECISION}]"),
            )
            .with_context("b", b));
        }
        let m = 1usize << b;
        Ok(HllSketch {
            b,
            alpha: alpha(m),
            registers: vec![0u8; m].into_boxed_slice(),
        })
    }

    /// Number of index bits (the configured precision).
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Number of registers, `2^b`.
    pub fn m(&self) -> usize {
        self.registers.len()
    }

    /// Return true if no update has touched any register yet.
    pub fn is_empty(&self) -> bool {
        self.registers.iter().all(|&v| v == 0)
    }

    /// Update the sketch with a byte sequence.
    ///
    /// Hashes the value, derives `(index, rank)` from the hash and raises
    /// `registers[index]` to `rank` if larger. Exactly one register is
    /// touched per call; repeating a value leaves the sketch unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hyperloglog::hll::HllSketch;
    /// let mut sketch = HllSketch::new(10).unwrap();
    /// sketch.update("apple");
    /// sketch.update(b"raw bytes".as_slice());
    /// assert!(!sketch.is_empty());
    /// ```
    pub fn update(&mut self, value: impl AsRef<[u8]>) {
        let hash = murmur_hash64a(value.as_ref(), DEFAULT_UPDATE_SEED);
        let (index, rank) = index_and_rank(hash, self.b);
        if rank > self.registers[index] {
            self.registers[index] = rank;
        }
    }

    /// Return the estimated number of distinct values seen so far.
    ///
    /// Computes `floor(alpha * m^2 / sum(2^-register))` over all `m`
    /// registers. This is a pure O(m) read and may be interleaved freely
    /// with updates.
    ///
    /// Note that the raw formula has no empty-set special case: a sketch
    /// with all registers at zero reports `floor(alpha * m)`, not zero.
    /// Check [`is_empty`](HllSketch::is_empty) first when that matters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hyperloglog::hll::HllSketch;
    /// let mut sketch = HllSketch::new(10).unwrap();
    /// for i in 0..10_000 {
    ///     sketch.update(format!("value_{i}"));
    /// }
    /// let estimate = sketch.estimate();
    /// assert!(estimate > 9_000 && estimate < 11_000);
    /// ```
    pub fn estimate(&self) -> u64 {
        let m = self.m() as f64;
        let denominator: f64 = self.registers.iter().map(|&v| inv_pow2(v)).sum();
        (self.alpha * m * m / denominator).floor() as u64
    }

    /// Merge another sketch into this one by element-wise register max.
    ///
    /// After merging, this sketch estimates the cardinality of the union
    /// of both input streams. Both sketches must have been built with the
    /// same precision, otherwise an
    /// [`ErrorKind::IncompatiblePrecision`] error is returned and this
    /// sketch is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hyperloglog::hll::HllSketch;
    /// let mut first = HllSketch::new(10).unwrap();
    /// let mut second = HllSketch::new(10).unwrap();
    /// first.update("apple");
    /// second.update("banana");
    /// first.merge(&second).unwrap();
    /// assert!(first.estimate() >= 2);
    /// ```
    pub fn merge(&mut self, other: &HllSketch) -> Result<(), Error> {
        if self.b != other.b {
            return Err(Error::new(
                ErrorKind::IncompatiblePrecision,
                "sketches must share a precision to merge",
            )
            .with_context("b", self.b)
            .with_context("other_b", other.b));
        }
        for (register, &other_register) in self.registers.iter_mut().zip(other.registers.iter()) {
            if other_register > *register {
                *register = other_register;
            }
        }
        Ok(())
    }
}

/// Bias-correction constant for the harmonic-mean estimate.
///
/// The closed form `0.7213 / (1 + 1.079/m)` over-corrects for small
/// register counts, so the first three sizes use empirically determined
/// values.
fn alpha(m: usize) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / m as f64),
    }
}

/// Compute 1 / 2^value (inverse power of 2)
#[inline]
fn inv_pow2(value: u8) -> f64 {
    // Register values never exceed 61, so the shift stays in range.
    1.0 / (1u64 << value) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_precision_rejected() {
        for b in [0u8, 1, 3, 25, 63, 64, 255] {
            let err = HllSketch::new(b).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidPrecision);
        }
    }

    #[test]
    fn test_accessors() {
        let sketch = HllSketch::new(4).unwrap();
        assert_eq!(sketch.b(), 4);
        assert_eq!(sketch.m(), 16);
        assert!(sketch.is_empty());
    }

    #[test]
    fn test_alpha_constants() {
        assert_eq!(alpha(16), 0.673);
        assert_eq!(alpha(32), 0.697);
        assert_eq!(alpha(64), 0.709);
        assert_eq!(alpha(1024), 0.7213 / (1.0 + 1.079 / 1024.0));
    }

    #[test]
    fn test_empty_sketch_reports_floor_alpha_m() {
        // All-zero registers give denominator = m, so the raw formula
        // yields floor(alpha * m) rather than zero.
        for (b, expected) in [(4u8, 10u64), (5, 22), (6, 45), (10, 737), (14, 11817)] {
            let sketch = HllSketch::new(b).unwrap();
            assert_eq!(sketch.estimate(), expected);
        }
    }

    #[test]
    fn test_update_touches_exactly_one_register() {
        let mut sketch = HllSketch::new(4).unwrap();
        sketch.update("apple");
        let touched = sketch.registers.iter().filter(|&&v| v != 0).count();
        assert_eq!(touched, 1);
    }

    #[test]
    fn test_known_values_wire_hash_to_estimate() {
        // Fixtures from the reference MurmurHash64A with seed 0x9747b28c:
        //   "apple"  -> 0xb29f689849f630ce -> index 11, rank 3
        //   "banana" -> 0xf8d4a426408df16d -> index 15, rank 1
        //   "date"   -> 0x221733075f2a970d -> index  2, rank 3
        let mut sketch = HllSketch::new(4).unwrap();
        sketch.update("apple");
        sketch.update("banana");
        sketch.update("date");

        let mut expected = [0u8; 16];
        expected[11] = 3;
        expected[15] = 1;
        expected[2] = 3;
        assert_eq!(sketch.registers.as_ref(), &expected);

        // floor(0.673 * 16^2 / (13 + 2 * 2^-3 + 2^-1)) == 12
        assert_eq!(sketch.estimate(), 12);
    }

    #[test]
    fn test_repeated_value_leaves_registers_unchanged() {
        let mut sketch = HllSketch::new(6).unwrap();
        sketch.update("pear");
        let registers = sketch.registers.clone();
        sketch.update("pear");
        assert_eq!(sketch.registers, registers);
    }

    #[test]
    fn test_merge_rejects_mismatched_precision() {
        let mut sketch = HllSketch::new(10).unwrap();
        let other = HllSketch::new(12).unwrap();
        let err = sketch.merge(&other).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatiblePrecision);
    }

    #[test]
    fn test_merge_takes_register_maximum() {
        let mut first = HllSketch::new(4).unwrap();
        let mut second = HllSketch::new(4).unwrap();
        first.update("apple");
        second.update("apple");
        second.update("banana");
        first.merge(&second).unwrap();
        assert_eq!(first.registers, second.registers);
    }
}
