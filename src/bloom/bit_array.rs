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

/// Fixed-size bit array packed 8 bits per byte.
///
/// Bit `i` lives in byte `i / 8` at offset `i % 8`. The last byte may carry padding bits
/// beyond `num_bits`; they are never set and never counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct BitArray {
    num_bits: u64,
    bytes: Vec<u8>,
}

impl BitArray {
    pub fn new(num_bits: u64) -> Self {
        let num_bytes = num_bits.div_ceil(8) as usize;
        BitArray {
            num_bits,
            bytes: vec![0u8; num_bytes],
        }
    }

    pub fn num_bits(&self) -> u64 {
        self.num_bits
    }

    /// Storage size in bytes, padding included.
    pub fn num_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn get(&self, bit_index: u64) -> bool {
        debug_assert!(
            bit_index < self.num_bits,
            "bit index {bit_index} out of range for {} bits",
            self.num_bits
        );
        let (byte, mask) = Self::locate(bit_index);
        (self.bytes[byte] & mask) != 0
    }

    pub fn set(&mut self, bit_index: u64) {
        debug_assert!(
            bit_index < self.num_bits,
            "bit index {bit_index} out of range for {} bits",
            self.num_bits
        );
        let (byte, mask) = Self::locate(bit_index);
        self.bytes[byte] |= mask;
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Population count over exactly the first `num_bits` bits.
    pub fn count_ones(&self) -> u64 {
        let full_bytes = (self.num_bits / 8) as usize;
        let mut count: u64 = self.bytes[..full_bytes]
            .iter()
            .map(|byte| u64::from(byte.count_ones()))
            .sum();

        // Mask off padding in the last partial byte
        let extra_bits = self.num_bits % 8;
        if extra_bits != 0 {
            let mask = (1u8 << extra_bits) - 1;
            count += u64::from((self.bytes[full_bytes] & mask).count_ones());
        }

        count
    }

    #[inline]
    fn locate(bit_index: u64) -> (usize, u8) {
        ((bit_index / 8) as usize, 1u8 << (bit_index % 8))
    }
}
