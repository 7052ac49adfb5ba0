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

use std::f64::consts::LN_2;

use super::BloomFilter;
use crate::error::Error;

/// False positive rate used by [`BloomFilterBuilder::with_capacity`].
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;
/// Smallest bit array produced by the accuracy-based sizing.
pub const MIN_NUM_BITS: u64 = 64;
/// Largest bit array a filter may hold, 4 GiB of storage.
pub const MAX_NUM_BITS: u64 = (1u64 << 35) - 64;
/// Smallest allowed number of hash functions.
pub const MIN_NUM_HASHES: u16 = 1;
/// Largest allowed number of hash functions.
pub const MAX_NUM_HASHES: u16 = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Sizing {
    Accuracy { fpp: f64 },
    Size { num_bits: u64, num_hashes: u16 },
}

/// Builder for creating [`BloomFilter`] instances.
///
/// Provides two construction modes:
/// - [`with_accuracy()`](Self::with_accuracy): Specify target items and false positive rate
///   (recommended)
/// - [`with_size()`](Self::with_size): Specify exact bit count and hash functions (manual)
///
/// Parameters are validated by [`build()`](Self::build), which never panics.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilterBuilder {
    sizing: Sizing,
    expected_items: u64,
}

impl BloomFilterBuilder {
    /// Creates a builder with optimal parameters for a target accuracy.
    ///
    /// The number of bits and hash functions are derived with
    /// [`suggest_num_bits()`](Self::suggest_num_bits) and
    /// [`suggest_num_hashes()`](Self::suggest_num_hashes).
    ///
    /// # Arguments
    ///
    /// - `expected_items`: Expected number of distinct items, must be greater than 0
    /// - `fpp`: Target false positive probability, must be in (0.0, 1.0)
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_accuracy(1000, 0.01).build().unwrap();
    /// assert_eq!(filter.bit_array_size(), 9586);
    /// assert_eq!(filter.hash_count(), 7);
    /// ```
    pub fn with_accuracy(expected_items: u64, fpp: f64) -> Self {
        BloomFilterBuilder {
            sizing: Sizing::Accuracy { fpp },
            expected_items,
        }
    }

    /// Creates a builder for `expected_items` at [`DEFAULT_FALSE_POSITIVE_RATE`].
    pub fn with_capacity(expected_items: u64) -> Self {
        Self::with_accuracy(expected_items, DEFAULT_FALSE_POSITIVE_RATE)
    }

    /// Creates a builder with manual size specification.
    ///
    /// `num_bits` must be within [1, [`MAX_NUM_BITS`]] and `num_hashes` within
    /// [[`MIN_NUM_HASHES`], [`MAX_NUM_HASHES`]]. Unlike the accuracy mode, `num_bits` is used
    /// as given, even below [`MIN_NUM_BITS`].
    ///
    /// The reported [`false_positive_rate()`](BloomFilter::false_positive_rate) of the built
    /// filter is the rate estimated at [`expected_items()`](Self::expected_items) insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_size(10_000, 7)
    ///     .expected_items(1000)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(filter.capacity(), 1000);
    /// ```
    pub fn with_size(num_bits: u64, num_hashes: u16) -> Self {
        BloomFilterBuilder {
            sizing: Sizing::Size {
                num_bits,
                num_hashes,
            },
            expected_items: 0,
        }
    }

    /// Sets the expected number of items.
    ///
    /// Only used for reporting: the filter accepts any number of insertions.
    pub fn expected_items(mut self, expected_items: u64) -> Self {
        self.expected_items = expected_items;
        self
    }

    /// Builds the Bloom filter.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidCapacity`](crate::error::ErrorKind::InvalidCapacity) if
    ///   `expected_items` is 0 or needs more than [`MAX_NUM_BITS`] bits in accuracy mode, or
    ///   `num_bits` is 0 or above [`MAX_NUM_BITS`] in size mode.
    /// - [`ErrorKind::InvalidRateOrHashCount`](crate::error::ErrorKind::InvalidRateOrHashCount)
    ///   if `fpp` is not in (0.0, 1.0), or `num_hashes` is outside the allowed range.
    pub fn build(self) -> Result<BloomFilter, Error> {
        let (num_bits, num_hashes, fpp) = match self.sizing {
            Sizing::Accuracy { fpp } => {
                if self.expected_items == 0 {
                    return Err(rejected(Error::invalid_capacity(
                        "expected_items",
                        0,
                        "must be greater than 0",
                    )));
                }
                if fpp.is_nan() || fpp <= 0.0 || fpp >= 1.0 {
                    return Err(rejected(Error::invalid_rate(fpp)));
                }

                let required_bits = required_num_bits(self.expected_items, fpp);
                if required_bits > MAX_NUM_BITS {
                    return Err(rejected(
                        Error::invalid_capacity(
                            "expected_items",
                            self.expected_items,
                            format!("needs more than {MAX_NUM_BITS} bits at this rate"),
                        )
                        .with_context("false_positive_rate", fpp),
                    ));
                }

                let num_bits = Self::suggest_num_bits(self.expected_items, fpp);
                let num_hashes = Self::suggest_num_hashes(self.expected_items, num_bits);
                (num_bits, num_hashes, fpp)
            }
            Sizing::Size {
                num_bits,
                num_hashes,
            } => {
                if !(1..=MAX_NUM_BITS).contains(&num_bits) {
                    return Err(rejected(Error::invalid_capacity(
                        "num_bits",
                        num_bits,
                        format!("must be between 1 and {MAX_NUM_BITS}"),
                    )));
                }
                if !(MIN_NUM_HASHES..=MAX_NUM_HASHES).contains(&num_hashes) {
                    return Err(rejected(Error::invalid_hash_count(
                        num_hashes,
                        MIN_NUM_HASHES,
                        MAX_NUM_HASHES,
                    )));
                }

                let fpp = estimate_false_positive_rate(num_bits, num_hashes, self.expected_items);
                (num_bits, num_hashes, fpp)
            }
        };

        tracing::debug!(
            num_bits,
            num_hashes,
            expected_items = self.expected_items,
            false_positive_rate = fpp,
            "built bloom filter"
        );

        Ok(BloomFilter::from_parts(
            num_bits,
            num_hashes,
            self.expected_items,
            fpp,
        ))
    }

    // ========================================================================
    // Static Suggestion Methods
    // ========================================================================

    /// Suggests optimal number of bits given expected items and target FPP.
    ///
    /// Formula: `m = ceil(-n * ln(p) / (ln(2)^2))`, clamped to
    /// [[`MIN_NUM_BITS`], [`MAX_NUM_BITS`]]
    /// where n = expected_items, p = fpp
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// assert_eq!(BloomFilterBuilder::suggest_num_bits(1000, 0.01), 9586);
    /// assert_eq!(BloomFilterBuilder::suggest_num_bits(1, 0.5), 64);
    /// ```
    pub fn suggest_num_bits(expected_items: u64, fpp: f64) -> u64 {
        required_num_bits(expected_items, fpp).clamp(MIN_NUM_BITS, MAX_NUM_BITS)
    }

    /// Suggests optimal number of hash functions given expected items and bit count.
    ///
    /// Formula: `k = round((m / n) * ln(2))`, clamped to
    /// [[`MIN_NUM_HASHES`], [`MAX_NUM_HASHES`]]
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// assert_eq!(BloomFilterBuilder::suggest_num_hashes(1000, 9586), 7);
    /// ```
    pub fn suggest_num_hashes(expected_items: u64, num_bits: u64) -> u16 {
        if expected_items == 0 {
            return MIN_NUM_HASHES;
        }

        let m = num_bits as f64;
        let n = expected_items as f64;
        let k = (m / n * LN_2).round();

        // float to int casts saturate, so huge ratios land on MAX_NUM_HASHES
        (k as u16).clamp(MIN_NUM_HASHES, MAX_NUM_HASHES)
    }
}

/// Estimates the false positive probability of a filter with `num_bits` bits and
/// `num_hashes` hash functions after `num_items` insertions.
///
/// Formula: `(1 - e^(-k*n/m))^k`. Returns `0.0` when nothing was inserted, and `1.0` for the
/// degenerate `num_bits == 0` or `num_hashes == 0`.
///
/// # Examples
///
/// ```
/// # use bloomfilter::bloom::estimate_false_positive_rate;
/// assert_eq!(estimate_false_positive_rate(9586, 7, 0), 0.0);
/// let p = estimate_false_positive_rate(9586, 7, 1000);
/// assert!((p - 0.01).abs() < 0.001);
/// ```
pub fn estimate_false_positive_rate(num_bits: u64, num_hashes: u16, num_items: u64) -> f64 {
    if num_bits == 0 || num_hashes == 0 {
        return 1.0;
    }
    if num_items == 0 {
        return 0.0;
    }

    let k = f64::from(num_hashes);
    let exponent = -k * num_items as f64 / num_bits as f64;
    (1.0 - exponent.exp()).powf(k)
}

/// Unclamped `ceil(-n * ln(p) / (ln(2)^2))`, saturating at `u64::MAX`.
fn required_num_bits(expected_items: u64, fpp: f64) -> u64 {
    let n = expected_items as f64;
    (-n * fpp.ln() / (LN_2 * LN_2)).ceil() as u64
}

fn rejected(err: Error) -> Error {
    tracing::debug!(error = %err, "rejected bloom filter configuration");
    err
}
