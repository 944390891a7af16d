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

//! Typed records for the account databases.
//!
//! Each record type mirrors one line of its database: plain positional
//! columns mapped to named fields. Records are immutable value types; two
//! records with equal fields are interchangeable. Numeric columns are
//! `Option<i64>` with `None` standing in for text that did not parse as an
//! integer, so extraction never fails on malformed data.

use std::fmt;

use crate::extract;
use crate::kind::RecordKind;

/// A borrowed view of one record field, for dynamic access by name.
///
/// The shape follows the column type: text columns are [`Str`], numeric
/// columns are [`Int`] (with `None` for unparseable text), and the group
/// member column is [`Members`].
///
/// [`Str`]: FieldValue::Str
/// [`Int`]: FieldValue::Int
/// [`Members`]: FieldValue::Members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Text column.
    Str(&'a str),
    /// Numeric column; `None` when the source text was not an integer.
    Int(Option<i64>),
    /// Comma-separated member list column.
    Members(&'a [String]),
}

impl<'a> FieldValue<'a> {
    /// Try to get the field as text.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the field as an integer.
    ///
    /// Returns `None` both for non-numeric columns and for numeric columns
    /// holding the unparseable sentinel.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => *n,
            _ => None,
        }
    }

    /// Try to get the field as a member list.
    pub fn as_members(&self) -> Option<&'a [String]> {
        match self {
            Self::Members(m) => Some(m),
            _ => None,
        }
    }
}

/// Common behavior of the three record types.
///
/// Extraction is total: any input line yields a record, with malformed
/// columns degraded to empty or `None` values rather than errors. Dynamic
/// field access backs criterion matching without per-call-site schemas.
///
/// # Examples
///
/// ```
/// use pwdb_core::{AccountRecord, FieldValue, RecordKind, UserRecord};
///
/// let rec = UserRecord::extract("root:x:0:0:root:/root:/bin/bash");
/// assert_eq!(UserRecord::KIND, RecordKind::User);
/// assert_eq!(rec.field("uid"), Some(FieldValue::Int(Some(0))));
/// assert_eq!(rec.to_line(), "root:x:0:0:root:/root:/bin/bash");
/// ```
pub trait AccountRecord: Clone + fmt::Debug + PartialEq + Sized {
    /// The database this record type belongs to.
    const KIND: RecordKind;

    /// Parses one line (terminator already stripped) into a record.
    fn extract(line: &str) -> Self;

    /// Returns the named field, or `None` for an unknown name.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Field names addressable through [`field`](AccountRecord::field), in
    /// column order.
    fn field_names() -> &'static [&'static str] {
        Self::KIND.field_names()
    }

    /// Re-joins the positional fields into canonical line form.
    ///
    /// Unparseable numeric columns render as empty, so the result matches
    /// the source line exactly only for well-formed input.
    fn to_line(&self) -> String;
}

// Renders Option<i64> as the bare number or nothing, for to_line.
struct Num(Option<i64>);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{}", n),
            None => Ok(()),
        }
    }
}

/// One line of the user database (`/etc/passwd`).
///
/// Columns: `username:password:uid:gid:comments:home:shell`.
///
/// # Examples
///
/// ```
/// use pwdb_core::{AccountRecord, UserRecord};
///
/// let rec = UserRecord::extract("daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin");
/// assert_eq!(rec.username, "daemon");
/// assert_eq!(rec.uid, Some(1));
/// assert_eq!(rec.shell, "/usr/sbin/nologin");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserRecord {
    /// Login name.
    pub username: String,
    /// Password column, normally `x` (the hash lives in the shadow database).
    pub password: String,
    /// Numeric user ID.
    pub uid: Option<i64>,
    /// Primary group ID.
    pub gid: Option<i64>,
    /// GECOS / comment column.
    pub comments: String,
    /// Home directory.
    pub home: String,
    /// Login shell.
    pub shell: String,
}

impl AccountRecord for UserRecord {
    const KIND: RecordKind = RecordKind::User;

    fn extract(line: &str) -> Self {
        extract::user(line)
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "username" => Some(FieldValue::Str(&self.username)),
            "password" => Some(FieldValue::Str(&self.password)),
            "uid" => Some(FieldValue::Int(self.uid)),
            "gid" => Some(FieldValue::Int(self.gid)),
            "comments" => Some(FieldValue::Str(&self.comments)),
            "home" => Some(FieldValue::Str(&self.home)),
            "shell" => Some(FieldValue::Str(&self.shell)),
            _ => None,
        }
    }

    fn to_line(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}:{}:{}",
            self.username,
            self.password,
            Num(self.uid),
            Num(self.gid),
            self.comments,
            self.home,
            self.shell
        )
    }
}

/// One line of the group database (`/etc/group`).
///
/// Columns: `groupname:password:gid:member1,member2,...`.
///
/// # Examples
///
/// ```
/// use pwdb_core::{AccountRecord, GroupRecord};
///
/// let rec = GroupRecord::extract("wheel:*:10:alice,bob");
/// assert_eq!(rec.groupname, "wheel");
/// assert_eq!(rec.gid, Some(10));
/// assert_eq!(rec.users, vec!["alice", "bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupRecord {
    /// Group name.
    pub groupname: String,
    /// Group password column, normally `*` or `x`.
    pub password: String,
    /// Numeric group ID.
    pub gid: Option<i64>,
    /// Member login names, in column order; empty when the column is empty.
    pub users: Vec<String>,
}

impl AccountRecord for GroupRecord {
    const KIND: RecordKind = RecordKind::Group;

    fn extract(line: &str) -> Self {
        extract::group(line)
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "groupname" => Some(FieldValue::Str(&self.groupname)),
            "password" => Some(FieldValue::Str(&self.password)),
            "gid" => Some(FieldValue::Int(self.gid)),
            "users" => Some(FieldValue::Members(&self.users)),
            _ => None,
        }
    }

    fn to_line(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.groupname,
            self.password,
            Num(self.gid),
            self.users.join(",")
        )
    }
}

/// One line of the shadow database (`/etc/shadow`).
///
/// Columns: `username:password:lastchg:min:max:warn:inactive:expire:flag`.
/// The six aging columns are day counts (since the epoch or between
/// events); empty or malformed columns become `None`.
///
/// # Examples
///
/// ```
/// use pwdb_core::{AccountRecord, ShadowRecord};
///
/// let rec = ShadowRecord::extract("alice:$6$salt$hash:19000:0:99999:7:::");
/// assert_eq!(rec.username, "alice");
/// assert_eq!(rec.lastchg, Some(19000));
/// assert_eq!(rec.warn, Some(7));
/// assert_eq!(rec.inactive, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowRecord {
    /// Login name.
    pub username: String,
    /// Hashed password, or a locked/disabled marker such as `!` or `*`.
    pub password: String,
    /// Day of the last password change.
    pub lastchg: Option<i64>,
    /// Minimum days between changes.
    pub min: Option<i64>,
    /// Maximum days the password stays valid.
    pub max: Option<i64>,
    /// Warning period before expiry, in days.
    pub warn: Option<i64>,
    /// Inactivity allowance after expiry, in days.
    pub inactive: Option<i64>,
    /// Day the account expires.
    pub expire: Option<i64>,
    /// Reserved column.
    pub flag: String,
}

impl AccountRecord for ShadowRecord {
    const KIND: RecordKind = RecordKind::Shadow;

    fn extract(line: &str) -> Self {
        extract::shadow(line)
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "username" => Some(FieldValue::Str(&self.username)),
            "password" => Some(FieldValue::Str(&self.password)),
            "lastchg" => Some(FieldValue::Int(self.lastchg)),
            "min" => Some(FieldValue::Int(self.min)),
            "max" => Some(FieldValue::Int(self.max)),
            "warn" => Some(FieldValue::Int(self.warn)),
            "inactive" => Some(FieldValue::Int(self.inactive)),
            "expire" => Some(FieldValue::Int(self.expire)),
            "flag" => Some(FieldValue::Str(&self.flag)),
            _ => None,
        }
    }

    fn to_line(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}:{}:{}:{}:{}",
            self.username,
            self.password,
            Num(self.lastchg),
            Num(self.min),
            Num(self.max),
            Num(self.warn),
            Num(self.inactive),
            Num(self.expire),
            self.flag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== FieldValue tests ====================

    #[test]
    fn test_field_value_as_str() {
        assert_eq!(FieldValue::Str("root").as_str(), Some("root"));
        assert_eq!(FieldValue::Int(Some(1)).as_str(), None);
    }

    #[test]
    fn test_field_value_as_int_flattens_sentinel() {
        assert_eq!(FieldValue::Int(Some(42)).as_int(), Some(42));
        assert_eq!(FieldValue::Int(None).as_int(), None);
        assert_eq!(FieldValue::Str("42").as_int(), None);
    }

    #[test]
    fn test_field_value_as_members() {
        let members = vec!["alice".to_string(), "bob".to_string()];
        let value = FieldValue::Members(&members);
        assert_eq!(value.as_members(), Some(members.as_slice()));
        assert_eq!(FieldValue::Str("alice,bob").as_members(), None);
    }

    // ==================== Field access tests ====================

    #[test]
    fn test_user_field_access_covers_every_column() {
        let rec = UserRecord::extract("root:x:0:0:root:/root:/bin/bash");
        for name in UserRecord::field_names() {
            assert!(rec.field(name).is_some(), "missing accessor for {name}");
        }
        assert_eq!(rec.field("username"), Some(FieldValue::Str("root")));
        assert_eq!(rec.field("gid"), Some(FieldValue::Int(Some(0))));
        assert_eq!(rec.field("nope"), None);
    }

    #[test]
    fn test_group_field_access_covers_every_column() {
        let rec = GroupRecord::extract("wheel:*:10:alice,bob");
        for name in GroupRecord::field_names() {
            assert!(rec.field(name).is_some(), "missing accessor for {name}");
        }
        let members = rec.field("users").unwrap();
        assert_eq!(
            members.as_members().unwrap(),
            &["alice".to_string(), "bob".to_string()]
        );
    }

    #[test]
    fn test_shadow_field_access_covers_every_column() {
        let rec = ShadowRecord::extract("alice:!:19000:0:99999:7:30:19500:");
        for name in ShadowRecord::field_names() {
            assert!(rec.field(name).is_some(), "missing accessor for {name}");
        }
        assert_eq!(rec.field("expire"), Some(FieldValue::Int(Some(19500))));
        assert_eq!(rec.field("flag"), Some(FieldValue::Str("")));
    }

    // ==================== Canonical line tests ====================

    #[test]
    fn test_user_to_line_round_trips_well_formed_input() {
        let line = "root:x:0:0:root:/root:/bin/bash";
        assert_eq!(UserRecord::extract(line).to_line(), line);
    }

    #[test]
    fn test_group_to_line_round_trips_members() {
        let line = "wheel:*:10:alice,bob";
        assert_eq!(GroupRecord::extract(line).to_line(), line);
        let empty = "nogroup:*:65534:";
        assert_eq!(GroupRecord::extract(empty).to_line(), empty);
    }

    #[test]
    fn test_shadow_to_line_round_trips_empty_aging_columns() {
        let line = "alice:$6$salt$hash:19000:0:99999:7:::";
        assert_eq!(ShadowRecord::extract(line).to_line(), line);
    }

    #[test]
    fn test_to_line_renders_unparseable_numeric_as_empty() {
        let rec = UserRecord::extract("root:x:abc:0:root:/root:/bin/bash");
        assert_eq!(rec.uid, None);
        assert_eq!(rec.to_line(), "root:x::0:root:/root:/bin/bash");
    }

    // ==================== Value-type tests ====================

    #[test]
    fn test_records_compare_by_field_contents() {
        let a = UserRecord::extract("root:x:0:0:root:/root:/bin/bash");
        let b = UserRecord::extract("root:x:0:0:root:/root:/bin/bash");
        assert_eq!(a, b);
        let c = UserRecord::extract("root:x:0:0:root:/root:/bin/sh");
        assert_ne!(a, c);
    }

    #[test]
    fn test_default_records_are_empty() {
        let rec = UserRecord::default();
        assert_eq!(rec.username, "");
        assert_eq!(rec.uid, None);
        assert_eq!(GroupRecord::default().users, Vec::<String>::new());
    }
}
