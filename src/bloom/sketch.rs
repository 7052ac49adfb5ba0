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

use super::BloomFilterBuilder;
use super::bit_array::BitArray;
use super::builder::estimate_false_positive_rate;
use crate::error::Error;
use crate::hash::DoubleHasher;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (inserted items always return `true`)
/// - Tunable false positive rate
/// - Constant space usage
///
/// Items are arbitrary byte sequences: anything implementing `AsRef<[u8]>` such as `&str`,
/// `String`, `&[u8]` or `[u8; N]`. The empty sequence carries nothing to record, so inserting
/// it is a no-op and querying it returns `false`.
///
/// Use [`BloomFilter::new`], [`BloomFilter::with_size`] or [`BloomFilterBuilder`] to construct
/// instances.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter {
    /// Number of hash functions to use (k)
    num_hashes: u16,
    /// Expected number of items (n), for reporting only
    expected_items: u64,
    /// Nominal false positive rate the filter was configured with
    false_positive_rate: f64,
    /// Count of non-empty insert calls
    num_inserted: u64,
    /// Bit position generator, sized to the bit array
    hasher: DoubleHasher,
    /// Bit array packed into bytes
    bit_array: BitArray,
}

impl BloomFilter {
    /// Creates a filter sized for `expected_items` at the target false positive rate.
    ///
    /// Shorthand for [`BloomFilterBuilder::with_accuracy`].
    ///
    /// # Errors
    ///
    /// Returns an error if `expected_items` is 0 or `fpp` is not in (0.0, 1.0).
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// let filter = BloomFilter::new(1000, 0.01).unwrap();
    /// assert_eq!(filter.bit_array_size(), 9586);
    /// assert_eq!(filter.hash_count(), 7);
    ///
    /// assert!(BloomFilter::new(0, 0.01).is_err());
    /// assert!(BloomFilter::new(1000, 1.0).is_err());
    /// ```
    pub fn new(expected_items: u64, fpp: f64) -> Result<Self, Error> {
        BloomFilterBuilder::with_accuracy(expected_items, fpp).build()
    }

    /// Creates a filter with an explicit bit count and number of hash functions.
    ///
    /// Shorthand for [`BloomFilterBuilder::with_size`] followed by
    /// [`expected_items`](BloomFilterBuilder::expected_items).
    ///
    /// # Errors
    ///
    /// Returns an error if `num_bits` is 0 or `num_hashes` is not in [1, 32].
    pub fn with_size(num_bits: u64, num_hashes: u16, expected_items: u64) -> Result<Self, Error> {
        BloomFilterBuilder::with_size(num_bits, num_hashes)
            .expected_items(expected_items)
            .build()
    }

    /// Assembles an empty filter from already validated parameters.
    pub(super) fn from_parts(
        num_bits: u64,
        num_hashes: u16,
        expected_items: u64,
        false_positive_rate: f64,
    ) -> Self {
        BloomFilter {
            num_hashes,
            expected_items,
            false_positive_rate,
            num_inserted: 0,
            hasher: DoubleHasher::new(num_bits),
            bit_array: BitArray::new(num_bits),
        }
    }

    // ========================================================================
    // Query Operations
    // ========================================================================

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Item was **possibly** inserted (or false positive)
    /// - `false`: Item was **definitely not** inserted, or is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(100, 0.01).unwrap();
    /// filter.insert("apple");
    ///
    /// assert!(filter.contains("apple")); // true - was inserted
    /// assert!(!filter.contains("")); // empty items are never present
    /// ```
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        let data = item.as_ref();
        if data.is_empty() {
            return false;
        }

        self.check_bits(data)
    }

    /// Tests and inserts an item in a single operation.
    ///
    /// Returns whether the item was possibly already in the set before insertion.
    /// This is more efficient than calling `contains()` then `insert()` separately,
    /// since the base hashes are computed once.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(100, 0.01).unwrap();
    ///
    /// let was_present = filter.contains_and_insert("apple");
    /// assert!(!was_present); // First insertion
    ///
    /// let was_present = filter.contains_and_insert("apple");
    /// assert!(was_present); // Now it's in the set
    /// assert_eq!(filter.len(), 2);
    /// ```
    pub fn contains_and_insert(&mut self, item: impl AsRef<[u8]>) -> bool {
        let data = item.as_ref();
        if data.is_empty() {
            return false;
        }

        let mut was_present = true;
        for bit_index in self.hasher.positions(data, self.num_hashes) {
            was_present &= self.bit_array.get(bit_index);
            self.bit_array.set(bit_index);
        }
        self.num_inserted += 1;
        was_present
    }

    // ========================================================================
    // Update Operations
    // ========================================================================

    /// Inserts an item into the filter.
    ///
    /// After insertion, `contains(item)` will always return `true` until the next
    /// [`clear()`](Self::clear). Every non-empty insertion counts towards [`len()`](Self::len),
    /// even when the item was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(100, 0.01).unwrap();
    ///
    /// filter.insert("apple");
    /// filter.insert(42_u32.to_le_bytes());
    /// filter.insert([1u8, 2, 3]);
    /// filter.insert(""); // ignored
    ///
    /// assert!(filter.contains("apple"));
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn insert(&mut self, item: impl AsRef<[u8]>) {
        let data = item.as_ref();
        if data.is_empty() {
            return;
        }

        self.set_bits(data);
        self.num_inserted += 1;
    }

    /// Resets the filter to its initial empty state.
    ///
    /// Clears all bits and the insertion count while preserving size and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(100, 0.01).unwrap();
    /// filter.insert("apple");
    /// assert!(!filter.is_empty());
    ///
    /// filter.clear();
    /// assert!(filter.is_empty());
    /// assert!(!filter.contains("apple"));
    /// ```
    pub fn clear(&mut self) {
        tracing::debug!(
            num_inserted = self.num_inserted,
            num_bits = self.bit_array.num_bits(),
            "clearing bloom filter"
        );
        self.bit_array.clear();
        self.num_inserted = 0;
    }

    // ========================================================================
    // Statistics and Properties
    // ========================================================================

    /// Returns the number of items inserted since construction or the last clear.
    pub fn len(&self) -> u64 {
        self.num_inserted
    }

    /// Returns whether no item has been inserted since construction or the last clear.
    pub fn is_empty(&self) -> bool {
        self.num_inserted == 0
    }

    /// Returns the expected number of items the filter was configured for.
    pub fn capacity(&self) -> u64 {
        self.expected_items
    }

    /// Returns the nominal false positive rate.
    ///
    /// For filters built by accuracy this is the requested target. For filters built by size
    /// it is the rate estimated at [`capacity()`](Self::capacity) insertions.
    pub fn false_positive_rate(&self) -> f64 {
        self.false_positive_rate
    }

    /// Returns the total number of bits in the filter (m).
    pub fn bit_array_size(&self) -> u64 {
        self.bit_array.num_bits()
    }

    /// Returns the number of hash functions used (k).
    pub fn hash_count(&self) -> u16 {
        self.num_hashes
    }

    /// Estimates the current false positive probability.
    ///
    /// Based on the formula: `(1 - e^(-k*n/m))^k`
    /// where:
    /// - k = hash_count
    /// - n = len
    /// - m = bit_array_size
    ///
    /// Returns exactly `0.0` for an empty filter and grows with every insertion.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        estimate_false_positive_rate(
            self.bit_array.num_bits(),
            self.num_hashes,
            self.num_inserted,
        )
    }

    /// Returns the number of bits set to 1.
    ///
    /// Useful for monitoring filter saturation.
    pub fn count_set_bits(&self) -> u64 {
        self.bit_array.count_ones()
    }

    /// Returns the current load factor (fraction of bits set).
    ///
    /// Values near 0.5 indicate the filter is approaching its configured capacity.
    pub fn load_factor(&self) -> f64 {
        self.count_set_bits() as f64 / self.bit_array.num_bits() as f64
    }

    /// Returns the approximate memory footprint in bytes: the packed bit array plus the
    /// filter's own fields.
    pub fn memory_usage(&self) -> usize {
        self.bit_array.num_bytes() + size_of::<Self>()
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Checks if all k bits are set for the given data.
    fn check_bits(&self, data: &[u8]) -> bool {
        self.hasher
            .positions(data, self.num_hashes)
            .all(|bit_index| self.bit_array.get(bit_index))
    }

    /// Sets all k bits for the given data.
    fn set_bits(&mut self, data: &[u8]) {
        for bit_index in self.hasher.positions(data, self.num_hashes) {
            self.bit_array.set(bit_index);
        }
    }
}

impl<T: AsRef<[u8]>> Extend<T> for BloomFilter {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
