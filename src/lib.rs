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

//! # Bloom Filter
//!
//! A space-efficient probabilistic set for membership tests. A query answers either
//! "possibly present" or "definitely absent": inserted items are always found, while items
//! never inserted are reported present with a small, tunable probability.
//!
//! The library is divided into modules:
//!
//! - [`bloom`]: the filter itself, its builder, and the sizing formulas.
//! - [`hash`]: the 64-bit MurmurHash3 variant and the double hashing scheme that turns two
//!   base hashes into `k` bit positions.
//! - [`error`]: the error returned when a filter is configured with invalid parameters.
//!
//! ```
//! use bloomfilter::bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 0.01).unwrap();
//! filter.insert("apple");
//!
//! assert!(filter.contains("apple"));
//! assert_eq!(filter.len(), 1);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bloom;
pub mod error;
pub mod hash;
