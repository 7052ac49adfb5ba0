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

use std::hash::Hasher;

use byteorder::ByteOrder;
use byteorder::LE;

const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;

/// A single-lane, 64-bit variant of MurmurHash3.
///
/// The input is consumed in little-endian 8-byte blocks, the 0..=7 trailing bytes are mixed
/// in as one final partial block, and the total length is folded in before the `fmix64`
/// finalizer. Unlike the x64_128 variant there is no second lane, so the output is exactly
/// one `u64`.
///
/// Writes may be split arbitrarily: feeding the same bytes through several
/// [`write`](Hasher::write) calls yields the same value as one call with all of them.
#[derive(Debug, Clone)]
pub struct MurmurHash3X64 {
    seed: u64,
    h: u64,
    total: u64,
    buf: [u8; 8],
    buf_len: usize,
}

impl MurmurHash3X64 {
    /// Creates a hasher whose state starts at `seed`.
    pub fn with_seed(seed: u64) -> Self {
        MurmurHash3X64 {
            seed,
            h: seed,
            total: 0,
            buf: [0; 8],
            buf_len: 0,
        }
    }

    /// Hashes `data` in one shot.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomfilter::hash::MurmurHash3X64;
    ///
    /// assert_eq!(MurmurHash3X64::hash(b"apple", 0), 0x89c55a92c4b0eb72);
    /// ```
    pub fn hash(data: &[u8], seed: u64) -> u64 {
        let mut hasher = MurmurHash3X64::with_seed(seed);
        hasher.write(data);
        hasher.finish64()
    }

    /// Hashes `data` in one shot under this hasher's seed.
    ///
    /// Bytes already fed through [`write`](Hasher::write) are neither included nor disturbed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomfilter::hash::MurmurHash3X64;
    ///
    /// let hasher = MurmurHash3X64::with_seed(0x1234567890abcdef);
    /// assert_eq!(hasher.hash_bytes(b"apple"), 0x716882983eae0817);
    /// ```
    pub fn hash_bytes(&self, data: &[u8]) -> u64 {
        Self::hash(data, self.seed)
    }

    /// Returns the seed this hasher started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Finalizes the hash of everything written so far.
    ///
    /// The hasher itself is not consumed, so more bytes may be written afterwards.
    pub fn finish64(&self) -> u64 {
        let mut h = self.h;
        let total = self.total + self.buf_len as u64;

        // tail
        if self.buf_len > 0 {
            let mut buf = [0u8; 8];
            buf[..self.buf_len].copy_from_slice(&self.buf[..self.buf_len]);
            h ^= mix_k(u64::from_le_bytes(buf));
        }

        h ^= total;
        fmix64(h)
    }

    #[inline]
    fn update(&mut self, k: u64) {
        self.h ^= mix_k(k);
        self.h = self.h.rotate_left(27);
        self.h = self.h.wrapping_mul(5).wrapping_add(0x52dce729);
        self.total += 8;
    }
}

impl Hasher for MurmurHash3X64 {
    fn finish(&self) -> u64 {
        self.finish64()
    }

    fn write(&mut self, mut bytes: &[u8]) {
        if self.buf_len + bytes.len() < 8 {
            self.buf[self.buf_len..self.buf_len + bytes.len()].copy_from_slice(bytes);
            self.buf_len += bytes.len();
            return;
        }

        if self.buf_len != 0 {
            let wanted = 8 - self.buf_len;
            self.buf[self.buf_len..].copy_from_slice(&bytes[..wanted]);
            let k = LE::read_u64(&self.buf);
            self.update(k);

            bytes = &bytes[wanted..];
            self.buf_len = 0;
        }

        let mut blocks = bytes.chunks_exact(8);
        for block in &mut blocks {
            self.update(LE::read_u64(block));
        }

        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.buf_len = rest.len();
    }
}

#[inline]
fn mix_k(mut k: u64) -> u64 {
    k = k.wrapping_mul(C1);
    k = k.rotate_left(31);
    k.wrapping_mul(C2)
}

/// Finalization mix: force all bits of a hash block to avalanche.
#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^ (k >> 33)
}
