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

use super::MurmurHash3X64;
use super::SEED_A;
use super::SEED_B;

/// Derives bit positions with double hashing (Kirsch-Mitzenmacher).
///
/// Two base hashes are computed per item, `h1` with [`SEED_A`] and `h2` with [`SEED_B`], and
/// `h2` is forced odd. The i-th position is `(h1 + i * h2) mod num_bits`, using wrapping
/// 64-bit arithmetic before the modulo. Any number of positions therefore costs exactly two
/// base hash evaluations.
///
/// The hasher holds no state besides `num_bits`, so it is freely copied and never mutated by
/// a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleHasher {
    num_bits: u64,
}

impl DoubleHasher {
    /// Creates a hasher producing positions in `[0, num_bits)`.
    ///
    /// # Panics
    ///
    /// Panics if `num_bits` is 0.
    pub fn new(num_bits: u64) -> Self {
        assert!(num_bits > 0, "num_bits must be greater than 0");
        DoubleHasher { num_bits }
    }

    /// Returns the modulus positions are reduced by.
    pub fn num_bits(&self) -> u64 {
        self.num_bits
    }

    /// Computes the two base hashes of `data`, with the second one forced odd.
    pub fn base_hashes(&self, data: &[u8]) -> (u64, u64) {
        let h1 = MurmurHash3X64::hash(data, SEED_A);
        let mut h2 = MurmurHash3X64::hash(data, SEED_B);
        if h2 % 2 == 0 {
            h2 = h2.wrapping_add(1);
        }
        (h1, h2)
    }

    /// Computes the bit position for hash index `i`.
    ///
    /// Prefer [`positions`](Self::positions) when more than one index is needed, since this
    /// recomputes both base hashes on every call.
    pub fn position(&self, data: &[u8], i: u64) -> u64 {
        let (h1, h2) = self.base_hashes(data);
        self.combine(h1, h2, i)
    }

    /// Returns the first `k` bit positions for `data`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomfilter::hash::DoubleHasher;
    ///
    /// let hasher = DoubleHasher::new(64);
    /// let positions: Vec<u64> = hasher.positions(b"apple", 3).collect();
    /// assert_eq!(positions, vec![50, 9, 32]);
    /// ```
    pub fn positions(&self, data: &[u8], k: u16) -> impl Iterator<Item = u64> + use<> {
        let (h1, h2) = self.base_hashes(data);
        let hasher = *self;
        (0..u64::from(k)).map(move |i| hasher.combine(h1, h2, i))
    }

    #[inline]
    fn combine(&self, h1: u64, h2: u64, i: u64) -> u64 {
        h1.wrapping_add(i.wrapping_mul(h2)) % self.num_bits
    }
}
