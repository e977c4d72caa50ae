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

use std::collections::HashSet;

use googletest::assert_that;
use googletest::prelude::near;
use hyperloglog::common::RandomSource;
use hyperloglog::common::XorShift64;
use hyperloglog::hll::HllSketch;

/// Tolerance of three standard errors, where the theoretical standard
/// error of the estimate is 1.04 / sqrt(m).
fn error_bound(m: usize) -> f64 {
    3.0 * 1.04 / (m as f64).sqrt()
}

#[test]
fn test_accuracy_sequential_keys() {
    for (b, n) in [(6u8, 10_000u64), (10, 50_000), (12, 100_000)] {
        let mut sketch = HllSketch::new(b).unwrap();
        for i in 0..n {
            sketch.update(format!("value_{i}"));
        }
        let n_f64 = n as f64;
        assert_that!(
            sketch.estimate() as f64,
            near(n_f64, error_bound(sketch.m()) * n_f64)
        );
    }
}

#[test]
fn test_accuracy_random_strings() {
    // Random 10-character alphanumeric keys, compared against an exact
    // reference set so hash collisions in the input stream are counted
    // the same way on both sides.
    let mut rng = XorShift64::seeded(42);
    let mut sketch = HllSketch::new(10).unwrap();
    let mut reference = HashSet::new();

    for _ in 0..20_000 {
        let value = rng.next_alphanumeric(10);
        sketch.update(&value);
        reference.insert(value);
    }

    let actual = reference.len() as f64;
    assert_that!(
        sketch.estimate() as f64,
        near(actual, error_bound(sketch.m()) * actual)
    );
}
