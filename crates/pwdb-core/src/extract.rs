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

//! Pure line extractors.
//!
//! Each function maps one raw line (trailing terminator already stripped)
//! to a typed record: split on `:`, assign columns positionally. All three
//! are total over any input string:
//!
//! - numeric columns that fail to parse become `None`, never an error;
//! - missing trailing columns become empty strings, `None`, or an empty
//!   member list;
//! - columns beyond the layout are ignored.
//!
//! Text columns are taken verbatim, including any surrounding whitespace;
//! only numeric parsing trims.

use crate::record::{GroupRecord, ShadowRecord, UserRecord};

// Positional column, empty when the line is short.
fn column<'a>(fields: &[&'a str], index: usize) -> &'a str {
    fields.get(index).copied().unwrap_or("")
}

// Best-effort integer column: trim, then parse as i64.
fn int_column(fields: &[&str], index: usize) -> Option<i64> {
    fields.get(index).and_then(|s| s.trim().parse::<i64>().ok())
}

// Member list column: empty column means no members, otherwise split on
// `,` keeping empty entries.
fn member_column(fields: &[&str], index: usize) -> Vec<String> {
    let raw = column(fields, index);
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

/// Extracts a [`UserRecord`] from one line of the user database.
///
/// # Examples
///
/// ```
/// let rec = pwdb_core::extract::user("root:x:0:0:root:/root:/bin/bash");
/// assert_eq!(rec.username, "root");
/// assert_eq!(rec.uid, Some(0));
/// assert_eq!(rec.home, "/root");
/// ```
pub fn user(line: &str) -> UserRecord {
    let fields: Vec<&str> = line.split(':').collect();
    UserRecord {
        username: column(&fields, 0).to_string(),
        password: column(&fields, 1).to_string(),
        uid: int_column(&fields, 2),
        gid: int_column(&fields, 3),
        comments: column(&fields, 4).to_string(),
        home: column(&fields, 5).to_string(),
        shell: column(&fields, 6).to_string(),
    }
}

/// Extracts a [`GroupRecord`] from one line of the group database.
///
/// # Examples
///
/// ```
/// let rec = pwdb_core::extract::group("wheel:*:10:alice,bob");
/// assert_eq!(rec.gid, Some(10));
/// assert_eq!(rec.users, vec!["alice", "bob"]);
/// ```
pub fn group(line: &str) -> GroupRecord {
    let fields: Vec<&str> = line.split(':').collect();
    GroupRecord {
        groupname: column(&fields, 0).to_string(),
        password: column(&fields, 1).to_string(),
        gid: int_column(&fields, 2),
        users: member_column(&fields, 3),
    }
}

/// Extracts a [`ShadowRecord`] from one line of the shadow database.
///
/// # Examples
///
/// ```
/// let rec = pwdb_core::extract::shadow("daemon:*:19235:0:99999:7:::");
/// assert_eq!(rec.username, "daemon");
/// assert_eq!(rec.max, Some(99999));
/// assert_eq!(rec.expire, None);
/// ```
pub fn shadow(line: &str) -> ShadowRecord {
    let fields: Vec<&str> = line.split(':').collect();
    ShadowRecord {
        username: column(&fields, 0).to_string(),
        password: column(&fields, 1).to_string(),
        lastchg: int_column(&fields, 2),
        min: int_column(&fields, 3),
        max: int_column(&fields, 4),
        warn: int_column(&fields, 5),
        inactive: int_column(&fields, 6),
        expire: int_column(&fields, 7),
        flag: column(&fields, 8).to_string(),
    }
}
