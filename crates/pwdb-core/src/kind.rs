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

//! Database kind selection.
//!
//! [`RecordKind`] identifies one of the three supported account databases.
//! The kind determines which extractor applies, which file is read by
//! default, how many colon-separated columns a full line carries, and which
//! field names are addressable in a criterion.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a database kind name is not recognized.
///
/// Only the exact lowercase names `user`, `group`, and `shadow` are
/// accepted; the rejected input is preserved for reporting. This is the
/// only failure that can occur before any file is opened.
///
/// # Examples
///
/// ```
/// use pwdb_core::RecordKind;
///
/// let err = "passwd".parse::<RecordKind>().unwrap_err();
/// assert_eq!(err.to_string(), "unsupported database kind: passwd");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported database kind: {0}")]
pub struct UnsupportedKind(pub String);

/// Which account database a record belongs to.
///
/// # Examples
///
/// ```
/// use pwdb_core::RecordKind;
/// use std::path::Path;
///
/// let kind: RecordKind = "user".parse().unwrap();
/// assert_eq!(kind, RecordKind::User);
/// assert_eq!(kind.default_path(), Path::new("/etc/passwd"));
/// assert_eq!(kind.column_count(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RecordKind {
    /// User accounts (`/etc/passwd`).
    User,
    /// Group membership (`/etc/group`).
    Group,
    /// Password aging data (`/etc/shadow`).
    Shadow,
}

impl RecordKind {
    /// All supported kinds, in canonical order.
    pub const ALL: [RecordKind; 3] = [RecordKind::User, RecordKind::Group, RecordKind::Shadow];

    /// Returns the canonical lowercase name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Shadow => "shadow",
        }
    }

    /// Returns the conventional path of this database on the local system.
    pub fn default_path(&self) -> &'static Path {
        Path::new(match self {
            Self::User => "/etc/passwd",
            Self::Group => "/etc/group",
            Self::Shadow => "/etc/shadow",
        })
    }

    /// Returns the number of colon-separated columns in a full line.
    #[inline]
    pub fn column_count(&self) -> usize {
        match self {
            Self::User => 7,
            Self::Group => 4,
            Self::Shadow => 9,
        }
    }

    /// Returns the addressable field names, in column order.
    ///
    /// These are the names accepted by
    /// [`AccountRecord::field`](crate::AccountRecord::field) and usable in a
    /// [`Criterion`](crate::Criterion).
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::User => &[
                "username", "password", "uid", "gid", "comments", "home", "shell",
            ],
            Self::Group => &["groupname", "password", "gid", "users"],
            Self::Shadow => &[
                "username", "password", "lastchg", "min", "max", "warn", "inactive", "expire",
                "flag",
            ],
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = UnsupportedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "group" => Ok(Self::Group),
            "shadow" => Ok(Self::Shadow),
            other => Err(UnsupportedKind(other.to_string())),
        }
    }
}
