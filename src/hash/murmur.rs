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

/// Multiplicative mixing constant from MurmurHash64A.
const M: u64 = 0xc6a4a7935bd1e995;
/// Right-shift mixing distance.
const R: u32 = 47;

/// MurmurHash64A: a fast, non-cryptographic, 64-bit hash function with
/// good avalanche behavior, so that outputs approximate a uniform
/// distribution over the 64-bit space.
///
/// Input is consumed in 8-byte little-endian words; the trailing 0-7
/// bytes are composed little-endian and folded in with one final
/// multiply. Output is byte-identical to the reference C implementation
/// for any input and seed, which keeps register assignments portable
/// across implementations.
pub fn murmur_hash64a(data: &[u8], seed: u32) -> u64 {
    let mut h = (seed as u64) ^ (data.len() as u64).wrapping_mul(M);

    let mut chunks = data.chunks_exact(8);
    for chunk in &mut chunks {
        let mut k = super::read_u64_le(chunk);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);
        h ^= k;
        h = h.wrapping_mul(M);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        h ^= super::read_u64_le(tail);
        h = h.wrapping_mul(M);
    }

    h ^= h >> R;
    h = h.wrapping_mul(M);
    h ^ (h >> R)
}
