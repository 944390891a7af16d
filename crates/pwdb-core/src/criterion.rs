// Dweve PWDB - System Account Database Parsers
//
// Copyright (c) 2026 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Field-equality predicates for single-record lookup.
//!
//! A [`Criterion`] is an ordered list of `field name = expected value`
//! entries. A record satisfies the criterion when every entry matches the
//! record's field of that name by equality; matching is dynamic through
//! [`AccountRecord::field`], so one criterion type serves all record kinds.

use std::fmt;

use crate::record::{AccountRecord, FieldValue};

/// One expected value inside a [`Criterion`].
///
/// Expectations are typed like record fields and only match a field of the
/// same shape: an [`Int`] expectation never equals a text column, and a
/// numeric column holding the unparseable sentinel matches no integer at
/// all.
///
/// [`Int`]: CriterionValue::Int
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionValue {
    /// Expected text.
    Str(String),
    /// Expected integer.
    Int(i64),
    /// Expected member list, compared element-wise in order.
    Members(Vec<String>),
}

impl CriterionValue {
    /// Tests this expectation against one field value.
    pub fn matches(&self, actual: FieldValue<'_>) -> bool {
        match (self, actual) {
            (Self::Str(expected), FieldValue::Str(actual)) => expected == actual,
            (Self::Int(expected), FieldValue::Int(Some(actual))) => *expected == actual,
            (Self::Members(expected), FieldValue::Members(actual)) => {
                expected.as_slice() == actual
            }
            _ => false,
        }
    }
}

impl From<&str> for CriterionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for CriterionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for CriterionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for CriterionValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<Vec<String>> for CriterionValue {
    fn from(value: Vec<String>) -> Self {
        Self::Members(value)
    }
}

impl From<&[&str]> for CriterionValue {
    fn from(value: &[&str]) -> Self {
        Self::Members(value.iter().map(|s| s.to_string()).collect())
    }
}

impl fmt::Display for CriterionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Members(m) => f.write_str(&m.join(",")),
        }
    }
}

/// An ordered field-equality predicate.
///
/// Built by chaining [`field`](Criterion::field); a record matches when
/// every entry equals the corresponding field. Unknown field names never
/// match. An empty criterion places no constraint and matches any record.
///
/// # Examples
///
/// ```
/// use pwdb_core::{AccountRecord, Criterion, UserRecord};
///
/// let criterion = Criterion::new().field("username", "root").field("uid", 0);
/// let rec = UserRecord::extract("root:x:0:0:root:/root:/bin/bash");
/// assert!(criterion.matches(&rec));
///
/// let other = UserRecord::extract("daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin");
/// assert!(!criterion.matches(&other));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criterion {
    fields: Vec<(String, CriterionValue)>,
}

impl Criterion {
    /// Creates an empty criterion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one `name = value` expectation.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<CriterionValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Returns true when no expectations have been added.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of expectations.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates the expectations in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CriterionValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Tests every expectation against `record`.
    pub fn matches<T: AccountRecord>(&self, record: &T) -> bool {
        self.fields.iter().all(|(name, expected)| {
            record
                .field(name)
                .map_or(false, |actual| expected.matches(actual))
        })
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return f.write_str("(any)");
        }
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}
