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

//! A HyperLogLog sketch for estimating the number of distinct elements
//! in a stream of values using bounded memory.
//!
//! The sketch keeps `m = 2^b` small registers. Each incoming value is
//! hashed once; the top `b` bits of the hash select a register and the
//! remaining bits contribute a "rank" (the position of their first set
//! bit). Registers record the maximum rank ever observed, and the
//! cardinality estimate combines all registers through a bias-corrected
//! harmonic mean.
//!
//! # Examples
//!
//! ```
//! use hyperloglog::hll::HllSketch;
//!
//! let mut sketch = HllSketch::new(10).unwrap();
//! for i in 0..10_000 {
//!     sketch.update(format!("value_{i}"));
//! }
//! let estimate = sketch.estimate();
//! assert!(estimate > 9_000 && estimate < 11_000);
//! ```

pub mod common;
pub mod error;
pub mod hash;
pub mod hll;
