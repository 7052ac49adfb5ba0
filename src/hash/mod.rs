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

//! Hash functions used to place items in the filter.
//!
//! [`MurmurHash3X64`] turns a byte slice into a well distributed 64-bit value, and
//! [`DoubleHasher`] combines two such values into any number of bit positions. [`Fnv1a64`]
//! is a cheaper, weaker-mixing alternative for callers hashing their own keys.

mod double;
mod fnv1a;
mod murmurhash;

pub use self::double::DoubleHasher;
pub use self::fnv1a::Fnv1a64;
pub use self::murmurhash::MurmurHash3X64;

/// Seed of the first base hash (`h1`).
pub const SEED_A: u64 = 0;

/// Seed of the second base hash (`h2`).
///
/// Filters only agree on positions when both seeds match, so changing either constant
/// changes where every item lands.
pub const SEED_B: u64 = 0x1234567890abcdef;
