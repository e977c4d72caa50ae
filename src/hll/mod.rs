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

//! HyperLogLog sketch implementation for cardinality estimation.
//!
//! This module provides a probabilistic data structure for estimating the
//! cardinality (number of distinct elements) of large datasets with low
//! memory usage.
//!
//! # Overview
//!
//! The sketch keeps `m = 2^b` one-byte registers, where `b` is the
//! configured precision. Each update hashes the input once with
//! MurmurHash64A. The top `b` bits of the hash select a register; the
//! remaining `64 - b` bits yield a rank (1-based position of their first
//! set bit, scanning from the most significant of them downwards). Each
//! register records the maximum rank it has ever seen, so register values
//! only grow and re-adding a value never changes the sketch.
//!
//! The cardinality estimate is the bias-corrected harmonic mean
//! `alpha * m^2 / sum(2^-register)` over all registers. The standard
//! error is about `1.04 / sqrt(m)`, so each extra bit of precision
//! doubles the memory and improves accuracy by a factor of `sqrt(2)`.

mod sketch;

// Re-export public API
pub use sketch::HllSketch;

/// Minimum supported precision (16 registers).
pub const MIN_PRECISION: u8 = 4;
/// Maximum supported precision (16 Mi registers).
///
/// The cap also bounds the maximum rank at `(64 - 4) + 1 = 61`, which
/// fits a one-byte register for every supported precision.
pub const MAX_PRECISION: u8 = 24;

/// Split a 64-bit hash into a register index and a rank.
///
/// The index is the top `b` bits of the hash. The rank is the 1-based
/// position of the first set bit among the remaining `64 - b` bits,
/// scanning from the most significant of them downwards; if none is set
/// the rank saturates at `(64 - b) + 1`.
#[inline]
fn index_and_rank(hash: u64, b: u8) -> (usize, u8) {
    let index = (hash >> (64 - b)) as usize;
    // Shifting out the index prefix leaves the remaining bits at the top,
    // so the scan becomes a plain count-leading-zeros.
    let remaining = hash << b;
    let rank = if remaining == 0 {
        (64 - b) + 1
    } else {
        remaining.leading_zeros() as u8 + 1
    };
    (index, rank)
}
