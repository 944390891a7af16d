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

//! # PWDB - System Account Database Parsers
//!
//! PWDB reads the colon-delimited system account databases — `/etc/passwd`,
//! `/etc/group`, and `/etc/shadow` — as streams of typed records. Files are
//! pulled one line at a time, so memory stays constant regardless of size,
//! and lookups release the file handle the moment they are satisfied.
//!
//! ## Quick Start
//!
//! ```rust
//! use pwdb::{RecordStream, StreamEvent, UserRecord};
//! use std::io::Cursor;
//!
//! let data = "\
//! root:x:0:0:root:/root:/bin/bash
//! daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin
//! ";
//!
//! let stream = RecordStream::<UserRecord, _>::from_reader(Cursor::new(data));
//! for event in stream {
//!     match event.expect("in-memory reads cannot fail") {
//!         StreamEvent::Record(user) => println!("{} (uid {:?})", user.username, user.uid),
//!         StreamEvent::End { records } => println!("{records} records total"),
//!     }
//! }
//! ```
//!
//! Against the live system databases, the one-line forms are shorter:
//!
//! ```rust,no_run
//! use pwdb::Criterion;
//!
//! let everyone = pwdb::users()?;
//! let root = pwdb::find_user(&Criterion::new().field("uid", 0))?;
//! assert_eq!(root.username, "root");
//! # let _ = everyone;
//! # Ok::<(), pwdb::StreamError>(())
//! ```
//!
//! ## Features
//!
//! - **Typed records**: [`UserRecord`] (7 columns), [`GroupRecord`] (4),
//!   [`ShadowRecord`] (9), addressable by field name
//! - **Total extraction**: malformed lines degrade the affected fields,
//!   they never fail
//! - **Streaming**: constant memory, comment/blank filtering, one terminal
//!   end event carrying the record count
//! - **Lookup**: [`Criterion`] equality search with early cancellation
//! - **Async**: tokio-backed streams behind the `async` feature
//!
//! ## Crates
//!
//! - `pwdb-core`: record types, pure extractors, criterion matching
//! - `pwdb-stream`: the streaming layer over files and readers
//!
//! This crate re-exports both, so depending on `pwdb` alone is enough.

// Re-export record types and lookup predicates
pub use pwdb_core::{
    AccountRecord, Criterion, CriterionValue, FieldValue, GroupRecord, RecordKind, ShadowRecord,
    UnsupportedKind, UserRecord,
};

// Re-export the streaming layer
pub use pwdb_stream::{
    stream, stream_path, LineReader, RecordStream, Records, StreamError, StreamEvent,
    StreamResult, StreamState,
};

// One-line database reads and lookups
pub use pwdb_stream::{
    find_group, find_group_in, find_shadow, find_shadow_in, find_user, find_user_in, groups,
    groups_from, shadows, shadows_from, users, users_from,
};

// Async streaming (requires the `async` feature)
#[cfg(feature = "async")]
pub use pwdb_stream::{AsyncLineReader, AsyncRecordStream};

// Re-export line extraction
pub mod extract {
    //! Total line extractors
    pub use pwdb_core::extract::{group, shadow, user};
}

// Convenience functions at crate root

/// Extract one passwd line into a [`UserRecord`].
///
/// Extraction is total: short lines and non-numeric uid/gid columns degrade
/// the affected fields instead of failing.
///
/// # Performance
///
/// This is a hot path function with #[inline] hint; it sits inside the
/// per-line loop of every user stream.
///
/// # Examples
///
/// ```rust
/// let rec = pwdb::extract_user("root:x:0:0:root:/root:/bin/bash");
/// assert_eq!(rec.username, "root");
/// assert_eq!(rec.uid, Some(0));
/// assert_eq!(rec.shell, "/bin/bash");
/// ```
#[inline]
pub fn extract_user(line: &str) -> UserRecord {
    pwdb_core::extract::user(line)
}

/// Extract one group line into a [`GroupRecord`].
///
/// # Examples
///
/// ```rust
/// let rec = pwdb::extract_group("wheel:x:10:alice,bob");
/// assert_eq!(rec.groupname, "wheel");
/// assert_eq!(rec.users, vec!["alice", "bob"]);
/// ```
#[inline]
pub fn extract_group(line: &str) -> GroupRecord {
    pwdb_core::extract::group(line)
}

/// Extract one shadow line into a [`ShadowRecord`].
///
/// # Examples
///
/// ```rust
/// let rec = pwdb::extract_shadow("alice:!:19000:0:99999:7:::");
/// assert_eq!(rec.username, "alice");
/// assert_eq!(rec.max, Some(99999));
/// assert_eq!(rec.expire, None);
/// ```
#[inline]
pub fn extract_shadow(line: &str) -> ShadowRecord {
    pwdb_core::extract::shadow(line)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_extract_user() {
        let rec = extract_user("daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin");
        assert_eq!(rec.username, "daemon");
        assert_eq!(rec.uid, Some(1));
    }

    #[test]
    fn test_extract_group() {
        let rec = extract_group("nogroup:x:65534:");
        assert_eq!(rec.groupname, "nogroup");
        assert!(rec.users.is_empty());
    }

    #[test]
    fn test_extract_shadow() {
        let rec = extract_shadow("root:!:19000:0:99999:7:::");
        assert_eq!(rec.username, "root");
        assert_eq!(rec.warn, Some(7));
        assert_eq!(rec.inactive, None);
    }

    #[test]
    fn test_criterion_through_facade() {
        let rec = extract_user("root:x:0:0:root:/root:/bin/bash");
        let criterion = Criterion::new().field("username", "root").field("uid", 0);
        assert!(criterion.matches(&rec));
    }

    #[test]
    fn test_stream_from_reader() {
        let data = "root:x:0:0:root:/root:/bin/bash\n# comment\nbin:x:2:2:bin:/bin:/sbin/nologin\n";
        let stream = RecordStream::<UserRecord, _>::from_reader(Cursor::new(data));
        let users = stream.collect_records().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username, "bin");
    }
}
