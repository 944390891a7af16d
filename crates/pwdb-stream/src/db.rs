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

//! Per-database convenience functions.
//!
//! Thin wrappers that pick the record type and default path for you. All
//! of them delegate to [`RecordStream`], so filtering, ordering, and error
//! behavior are identical to driving the stream by hand.

use std::path::Path;

use pwdb_core::{Criterion, GroupRecord, ShadowRecord, UserRecord};

use crate::error::StreamResult;
use crate::stream::RecordStream;

/// Reads every user record from `/etc/passwd`.
///
/// # Errors
///
/// [`StreamError::Open`](crate::StreamError::Open) if the file cannot be
/// opened, [`StreamError::Read`](crate::StreamError::Read) on an I/O
/// fault mid-file.
pub fn users() -> StreamResult<Vec<UserRecord>> {
    RecordStream::<UserRecord, _>::open()?.collect_records()
}

/// Reads every user record from the passwd-format file at `path`.
pub fn users_from(path: impl AsRef<Path>) -> StreamResult<Vec<UserRecord>> {
    RecordStream::<UserRecord, _>::open_path(path)?.collect_records()
}

/// Finds the first user in `/etc/passwd` matching `criterion`.
///
/// Stops reading as soon as a match is found.
///
/// # Errors
///
/// [`StreamError::NotFound`](crate::StreamError::NotFound) when no record
/// matches.
pub fn find_user(criterion: &Criterion) -> StreamResult<UserRecord> {
    RecordStream::<UserRecord, _>::open()?.find_first(criterion)
}

/// Finds the first user in the passwd-format file at `path` matching
/// `criterion`.
pub fn find_user_in(path: impl AsRef<Path>, criterion: &Criterion) -> StreamResult<UserRecord> {
    RecordStream::<UserRecord, _>::open_path(path)?.find_first(criterion)
}

/// Reads every group record from `/etc/group`.
pub fn groups() -> StreamResult<Vec<GroupRecord>> {
    RecordStream::<GroupRecord, _>::open()?.collect_records()
}

/// Reads every group record from the group-format file at `path`.
pub fn groups_from(path: impl AsRef<Path>) -> StreamResult<Vec<GroupRecord>> {
    RecordStream::<GroupRecord, _>::open_path(path)?.collect_records()
}

/// Finds the first group in `/etc/group` matching `criterion`.
pub fn find_group(criterion: &Criterion) -> StreamResult<GroupRecord> {
    RecordStream::<GroupRecord, _>::open()?.find_first(criterion)
}

/// Finds the first group in the group-format file at `path` matching
/// `criterion`.
pub fn find_group_in(path: impl AsRef<Path>, criterion: &Criterion) -> StreamResult<GroupRecord> {
    RecordStream::<GroupRecord, _>::open_path(path)?.find_first(criterion)
}

/// Reads every shadow record from `/etc/shadow`.
///
/// Usually requires elevated privileges; expect
/// [`StreamError::Open`](crate::StreamError::Open) otherwise.
pub fn shadows() -> StreamResult<Vec<ShadowRecord>> {
    RecordStream::<ShadowRecord, _>::open()?.collect_records()
}

/// Reads every shadow record from the shadow-format file at `path`.
pub fn shadows_from(path: impl AsRef<Path>) -> StreamResult<Vec<ShadowRecord>> {
    RecordStream::<ShadowRecord, _>::open_path(path)?.collect_records()
}

/// Finds the first shadow entry in `/etc/shadow` matching `criterion`.
pub fn find_shadow(criterion: &Criterion) -> StreamResult<ShadowRecord> {
    RecordStream::<ShadowRecord, _>::open()?.find_first(criterion)
}

/// Finds the first shadow entry in the shadow-format file at `path`
/// matching `criterion`.
pub fn find_shadow_in(path: impl AsRef<Path>, criterion: &Criterion) -> StreamResult<ShadowRecord> {
    RecordStream::<ShadowRecord, _>::open_path(path)?.find_first(criterion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_db(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    // ==================== Path-based read tests ====================

    #[test]
    fn test_users_from_reads_all_records() {
        let db = write_db("root:x:0:0:root:/root:/bin/bash\n#c\nbin:x:1:1::/bin:/bin/sh\n");
        let users = users_from(db.path()).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username, "bin");
    }

    #[test]
    fn test_groups_from_splits_member_lists() {
        let db = write_db("wheel:*:10:alice,bob\n");
        let groups = groups_from(db.path()).unwrap();
        assert_eq!(groups[0].users, vec!["alice", "bob"]);
    }

    #[test]
    fn test_shadows_from_keeps_sentinels() {
        let db = write_db("alice:$6$s$h:19000:0:99999:7:::\n");
        let shadows = shadows_from(db.path()).unwrap();
        assert_eq!(shadows[0].inactive, None);
        assert_eq!(shadows[0].max, Some(99999));
    }

    #[test]
    fn test_missing_file_is_an_open_error() {
        let err = users_from("/nonexistent/passwd-db").unwrap_err();
        assert!(err.to_string().contains("cannot open"));
    }

    // ==================== Path-based lookup tests ====================

    #[test]
    fn test_find_user_in_by_uid() {
        let db = write_db("root:x:0:0:root:/root:/bin/bash\ndaemon:x:1:1:d:/usr/sbin:/usr/sbin/nologin\n");
        let rec = find_user_in(db.path(), &Criterion::new().field("uid", 1)).unwrap();
        assert_eq!(rec.username, "daemon");
    }

    #[test]
    fn test_find_group_in_by_name() {
        let db = write_db("wheel:*:10:alice\nnogroup:*:65534:\n");
        let rec = find_group_in(db.path(), &Criterion::new().field("groupname", "nogroup")).unwrap();
        assert_eq!(rec.gid, Some(65534));
        assert!(rec.users.is_empty());
    }

    #[test]
    fn test_find_shadow_in_not_found() {
        let db = write_db("alice:!:19000:0:99999:7:::\n");
        let err =
            find_shadow_in(db.path(), &Criterion::new().field("username", "bob")).unwrap_err();
        assert!(err.is_not_found());
    }
}
