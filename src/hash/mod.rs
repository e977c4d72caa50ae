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

//! Hash functions used by the sketches.

use byteorder::ByteOrder;
use byteorder::LittleEndian;

mod murmur;

pub use murmur::murmur_hash64a;

/// Seed shared by all hash calls of an update path. The value is arbitrary
/// but fixed: changing it changes every register assignment, so sketches
/// built with different seeds are not comparable.
pub const DEFAULT_UPDATE_SEED: u32 = 0x9747b28c;

/// Read a little-endian u64 from a buffer of up to 8 bytes.
#[inline]
pub(crate) fn read_u64_le(buf: &[u8]) -> u64 {
    LittleEndian::read_uint(buf, buf.len())
}
