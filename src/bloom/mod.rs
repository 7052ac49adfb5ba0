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

//! Bloom filter for probabilistic set membership.
//!
//! A Bloom filter answers "is this item in the set?" with either *possibly* or *definitely
//! not*. It never produces false negatives, and its false positive rate is chosen up front
//! by sizing the bit array.
//!
//! # Sizing
//!
//! Given `n` expected items and a target false positive probability `p`:
//!
//! - bits: `m = ceil(-n * ln(p) / ln(2)^2)`, at least 64 and at most [`MAX_NUM_BITS`]
//! - hash functions: `k = round(m / n * ln(2))`, clamped to `[1, 32]`
//!
//! For example 1000 items at 1% give `m = 9586` bits (about 1.2 KiB) and `k = 7`.
//!
//! The filter keeps accepting insertions past `n`; accuracy degrades gradually as reported by
//! [`BloomFilter::estimated_false_positive_rate`].
//!
//! # Examples
//!
//! ```
//! use bloomfilter::bloom::BloomFilterBuilder;
//!
//! let mut filter = BloomFilterBuilder::with_accuracy(1000, 0.01).build().unwrap();
//! filter.insert("apple");
//! filter.insert("banana");
//!
//! assert!(filter.contains("apple"));
//! assert_eq!(filter.len(), 2);
//! ```

mod bit_array;
mod builder;
mod sketch;

pub use self::builder::BloomFilterBuilder;
pub use self::builder::DEFAULT_FALSE_POSITIVE_RATE;
pub use self::builder::MAX_NUM_BITS;
pub use self::builder::MAX_NUM_HASHES;
pub use self::builder::MIN_NUM_BITS;
pub use self::builder::MIN_NUM_HASHES;
pub use self::builder::estimate_false_positive_rate;
pub use self::sketch::BloomFilter;
