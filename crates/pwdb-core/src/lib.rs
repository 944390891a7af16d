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

//! Record types and pure extractors for the system account databases.
//!
//! This crate carries the I/O-free half of PWDB: the typed records for the
//! user (`/etc/passwd`), group (`/etc/group`), and shadow (`/etc/shadow`)
//! databases, the pure extractors mapping one text line to one record, and
//! the [`Criterion`] predicate used for single-record lookup.
//!
//! Extraction is deliberately forgiving. Account files in the wild carry
//! short lines, stray whitespace, and non-numeric text in numeric columns;
//! all of that degrades the affected fields (empty strings, `None`
//! integers) instead of failing, so a damaged line never takes down a
//! stream. Structural problems (unknown database kind, unreadable file,
//! I/O faults) are real errors and live in the streaming layer.
//!
//! # Examples
//!
//! ```
//! use pwdb_core::{extract, AccountRecord, Criterion};
//!
//! let rec = extract::user("root:x:0:0:root:/root:/bin/bash");
//! assert_eq!(rec.uid, Some(0));
//!
//! let criterion = Criterion::new().field("username", "root");
//! assert!(criterion.matches(&rec));
//! ```

mod criterion;
pub mod extract;
mod kind;
mod record;

pub use criterion::{Criterion, CriterionValue};
pub use kind::{RecordKind, UnsupportedKind};
pub use record::{AccountRecord, FieldValue, GroupRecord, ShadowRecord, UserRecord};
