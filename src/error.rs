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

//! Error types for Bloom filter construction

use std::fmt;

/// ErrorKind is all kinds of Error of the Bloom filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The expected number of items, or the explicit bit array size, is zero or needs more
    /// bits than a filter may hold.
    InvalidCapacity,
    /// The false positive rate is outside `(0, 1)`, or the hash count is outside `[1, 32]`.
    InvalidRateOrHashCount,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidCapacity => "InvalidCapacity",
            ErrorKind::InvalidRateOrHashCount => "InvalidRateOrHashCount",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// Error is the error struct returned by all fallible Bloom filter functions.
///
/// Only construction can fail; once a filter exists, every operation on it is infallible.
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Vec::default(),
        }
    }

    /// Add more context in error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomfilter::error::{Error, ErrorKind};
    ///
    /// let error = Error::new(ErrorKind::InvalidCapacity, "expected_items must be greater than 0")
    ///     .with_context("expected_items", 0);
    /// assert_eq!(
    ///     error.to_string(),
    ///     "InvalidCapacity, context: { expected_items: 0 } => expected_items must be greater than 0"
    /// );
    /// ```
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Return the key/value pairs attached with [`with_context`](Self::with_context).
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    pub(crate) fn invalid_capacity(
        name: &'static str,
        value: u64,
        requirement: impl fmt::Display,
    ) -> Self {
        Self::new(ErrorKind::InvalidCapacity, format!("{name} {requirement}"))
            .with_context(name, value)
    }

    pub(crate) fn invalid_rate(fpp: f64) -> Self {
        Self::new(
            ErrorKind::InvalidRateOrHashCount,
            "false positive rate must be between 0.0 and 1.0 (exclusive)",
        )
        .with_context("false_positive_rate", fpp)
    }

    pub(crate) fn invalid_hash_count(num_hashes: u16, min: u16, max: u16) -> Self {
        Self::new(
            ErrorKind::InvalidRateOrHashCount,
            format!("num_hashes must be between {min} and {max}"),
        )
        .with_context("num_hashes", num_hashes)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            return de.finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            write!(
                f,
                "{}",
                self.context
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}
