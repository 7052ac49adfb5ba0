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

use bloomfilter::bloom::BloomFilter;
use bloomfilter::bloom::BloomFilterBuilder;
use bloomfilter::bloom::MAX_NUM_BITS;
use bloomfilter::error::ErrorKind;
use googletest::assert_that;
use googletest::prelude::contains_substring;
use googletest::prelude::eq;
use googletest::prelude::ge;
use googletest::prelude::gt;
use googletest::prelude::le;
use googletest::prelude::lt;

#[test]
fn test_construction() {
    let filter = BloomFilter::new(1000, 0.01).unwrap();

    assert_that!(filter.capacity(), eq(1000));
    assert_that!(filter.false_positive_rate(), eq(0.01));
    assert_that!(filter.len(), eq(0));
    assert_that!(filter.bit_array_size(), eq(9586));
    assert_that!(filter.hash_count(), eq(7));
}

#[test]
fn test_invalid_construction() {
    let err = BloomFilter::new(0, 0.01).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidCapacity));
    assert_that!(err.message(), contains_substring("expected_items"));

    for fpp in [0.0, 1.0, -0.1, 1.1] {
        let err = BloomFilter::new(1000, fpp).unwrap_err();
        assert_that!(err.kind(), eq(ErrorKind::InvalidRateOrHashCount));
    }

    let err = BloomFilter::with_size(0, 7, 1000).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidCapacity));

    let err = BloomFilter::with_size(10_000, 33, 1000).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidRateOrHashCount));
    assert_that!(err.to_string().as_str(), contains_substring("num_hashes: 33"));
}

#[test]
fn test_oversized_construction() {
    // rejected before any storage is allocated
    let err = BloomFilter::with_size(u64::MAX, 1, 0).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidCapacity));
    assert_that!(err.message(), contains_substring("num_bits"));

    let err = BloomFilter::with_size(MAX_NUM_BITS + 1, 7, 1000).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidCapacity));

    let err = BloomFilter::new(u64::MAX, 0.01).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidCapacity));
    assert_that!(err.message(), contains_substring("expected_items"));
}

#[test]
fn test_explicit_parameters() {
    let filter = BloomFilter::with_size(10_000, 7, 1000).unwrap();

    assert_that!(filter.bit_array_size(), eq(10_000));
    assert_that!(filter.hash_count(), eq(7));
    assert_that!(filter.capacity(), eq(1000));
    // nominal rate is the one expected once filled to capacity
    assert_that!(filter.false_positive_rate(), gt(0.0));
    assert_that!(filter.false_positive_rate(), lt(0.02));
}

#[test]
fn test_fruits() {
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();
    filter.insert("apple");
    filter.insert("banana");
    filter.insert("cherry");

    assert_that!(filter.len(), eq(3));
    assert!(filter.contains("apple"));
    assert!(filter.contains("banana"));
    assert!(filter.contains("cherry"));
}

#[test]
fn test_no_false_negatives() {
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();
    let elements = [
        "apple",
        "banana",
        "cherry",
        "date",
        "elderberry",
        "fig",
        "grape",
        "honeydew",
        "kiwi",
        "lemon",
    ];

    for (i, elem) in elements.iter().enumerate() {
        filter.insert(elem);
        // earlier items stay present whatever comes after them
        for earlier in &elements[..=i] {
            assert!(filter.contains(earlier), "{earlier} should be found");
        }
    }
    assert_that!(filter.len(), eq(elements.len() as u64));

    for i in 0..5000 {
        filter.insert(format!("noise_{i}"));
    }
    for elem in elements {
        assert!(filter.contains(elem), "{elem} should be found");
    }
}

#[test]
fn test_false_positive_rate() {
    let capacity = 1000;
    let mut filter = BloomFilter::new(capacity, 0.01).unwrap();

    for i in 0..capacity {
        filter.insert(format!("element_{i}"));
    }

    let tests = 10_000;
    let false_positives = (capacity..capacity + tests)
        .filter(|i| filter.contains(format!("element_{i}")))
        .count();

    let actual_fpr = false_positives as f64 / tests as f64;
    assert_that!(actual_fpr, gt(0.005));
    assert_that!(actual_fpr, lt(0.02));

    let expected_fpr = filter.estimated_false_positive_rate();
    assert_that!(expected_fpr, gt(0.0));
    assert_that!(expected_fpr, lt(0.1));
}

#[test]
fn test_empty_filter() {
    let filter = BloomFilter::new(100, 0.01).unwrap();

    assert!(filter.is_empty());
    assert!(!filter.contains("anything"));
    assert_that!(filter.count_set_bits(), eq(0));
    assert_that!(filter.estimated_false_positive_rate(), eq(0.0));
}

#[test]
fn test_empty_data() {
    let mut filter = BloomFilter::new(100, 0.01).unwrap();

    filter.insert("");
    filter.insert(&[] as &[u8]);
    assert_that!(filter.len(), eq(0));
    assert!(!filter.contains(""));
    assert!(!filter.contains(&[] as &[u8]));
}

#[test]
fn test_clear() {
    let mut filter = BloomFilter::new(100, 0.01).unwrap();

    filter.insert("test1");
    filter.insert("test2");
    assert_that!(filter.len(), eq(2));
    assert!(filter.contains("test1"));

    filter.clear();
    assert_that!(filter.len(), eq(0));
    assert_that!(filter.count_set_bits(), eq(0));
    assert!(!filter.contains("test1"));
    assert!(!filter.contains("test2"));

    filter.insert("test1");
    assert!(filter.contains("test1"));
    assert_that!(filter.len(), eq(1));
}

#[test]
fn test_count_set_bits() {
    let mut filter = BloomFilter::new(100, 0.01).unwrap();
    assert_that!(filter.count_set_bits(), eq(0));

    filter.insert("test1");
    let bits_after_one = filter.count_set_bits();
    assert_that!(bits_after_one, gt(0));
    assert_that!(bits_after_one, le(u64::from(filter.hash_count())));

    filter.insert("test2");
    assert_that!(filter.count_set_bits(), ge(bits_after_one));
}

#[test]
fn test_count_set_bits_bounded() {
    // odd size so the last byte carries padding
    let mut filter = BloomFilter::with_size(67, 32, 10).unwrap();
    for i in 0..1000 {
        filter.insert(format!("item_{i}"));
        assert_that!(filter.count_set_bits(), le(67));
    }
    assert_that!(filter.count_set_bits(), eq(67));
    assert_that!(filter.load_factor(), eq(1.0));
}

#[test]
fn test_idempotent_insert() {
    let mut filter = BloomFilter::new(100, 0.01).unwrap();

    filter.insert("same");
    let bits = filter.count_set_bits();
    filter.insert("same");

    assert_that!(filter.len(), eq(2));
    assert_that!(filter.count_set_bits(), eq(bits));
    assert!(filter.contains("same"));
}

#[test]
fn test_false_positive_rate_increases() {
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();
    assert_that!(filter.estimated_false_positive_rate(), eq(0.0));

    let mut previous = 0.0;
    for i in 0..1000 {
        filter.insert(format!("elem_{i}"));
        let current = filter.estimated_false_positive_rate();
        assert_that!(current, gt(previous));
        previous = current;
    }
    assert_that!(previous, lt(0.1));

    // duplicates count as insertions too
    filter.insert("elem_0");
    assert_that!(filter.estimated_false_positive_rate(), gt(previous));
}

#[test]
fn test_memory_usage() {
    let filter = BloomFilter::new(1000, 0.01).unwrap();
    let memory = filter.memory_usage();

    assert_that!(memory as u64, ge(filter.bit_array_size() / 8));
    assert_that!(memory, lt(2048));
}

#[test]
fn test_different_data_types() {
    let mut filter = BloomFilter::new(100, 0.01).unwrap();

    filter.insert("string_data");
    filter.insert(b"raw_bytes");
    filter.insert(42_i32.to_le_bytes());
    filter.insert(vec![0u8, 1, 2]);

    assert_that!(filter.len(), eq(4));
    assert!(filter.contains(String::from("string_data")));
    assert!(filter.contains(b"raw_bytes".as_slice()));
    assert!(filter.contains(42_i32.to_le_bytes()));
    assert!(filter.contains([0u8, 1, 2]));
}

#[test]
fn test_filters_agree() {
    let mut f1 = BloomFilter::new(100, 0.01).unwrap();
    let mut f2 = BloomFilterBuilder::with_accuracy(100, 0.01).build().unwrap();

    for i in 0..10 {
        let elem = format!("elem_{i}");
        f1.insert(&elem);
        f2.insert(&elem);
    }

    assert_eq!(f1, f2);
    for i in 0..1000 {
        let elem = format!("query_{i}");
        assert_that!(f1.contains(&elem), eq(f2.contains(&elem)));
    }
}
