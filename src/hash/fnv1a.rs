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

use std::fmt;
use std::hash::Hasher;

use fnv::FnvHasher;

const OFFSET_BASIS: u64 = 0xcbf29ce484222325;

/// 64-bit FNV-1a, seeded by XOR-ing the seed into the offset basis.
///
/// A cheaper alternative base hash to [`MurmurHash3X64`](super::MurmurHash3X64). Seed 0 gives
/// the standard FNV-1a value. Mixing is weaker than MurmurHash3, so short keys that differ only
/// in their last byte land close together.
pub struct Fnv1a64 {
    seed: u64,
    inner: FnvHasher,
}

impl Fnv1a64 {
    /// Creates a hasher whose state starts at the offset basis XOR `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Fnv1a64 {
            seed,
            inner: FnvHasher::with_key(OFFSET_BASIS ^ seed),
        }
    }

    /// Hashes `data` in one shot.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomfilter::hash::Fnv1a64;
    ///
    /// assert_eq!(Fnv1a64::hash(b"a", 0), 0xaf63dc4c8601ec8c);
    /// ```
    pub fn hash(data: &[u8], seed: u64) -> u64 {
        let mut hasher = Fnv1a64::with_seed(seed);
        hasher.write(data);
        hasher.finish()
    }

    /// Hashes `data` in one shot under this hasher's seed, leaving written bytes untouched.
    pub fn hash_bytes(&self, data: &[u8]) -> u64 {
        Self::hash(data, self.seed)
    }

    /// Returns the seed this hasher started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Fnv1a64::with_seed(0)
    }
}

impl Clone for Fnv1a64 {
    fn clone(&self) -> Self {
        Fnv1a64 {
            seed: self.seed,
            inner: FnvHasher::with_key(self.inner.finish()),
        }
    }
}

impl fmt::Debug for Fnv1a64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fnv1a64")
            .field("seed", &self.seed)
            .field("state", &self.inner.finish())
            .finish()
    }
}

impl Hasher for Fnv1a64 {
    fn finish(&self) -> u64 {
        self.inner.finish()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.inner.write(bytes);
    }
}
