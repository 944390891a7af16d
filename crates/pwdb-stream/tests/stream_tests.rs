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

//! Integration tests for pwdb-stream

use pwdb_core::{Criterion, GroupRecord, ShadowRecord, UserRecord};
use pwdb_stream::{RecordStream, StreamEvent, StreamState};
use std::io::Write;
use tempfile::NamedTempFile;

const PASSWD_FIXTURE: &str = "\
# /etc/passwd fixture
root:x:0:0:root:/root:/bin/bash
daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin
bin:x:2:2:bin:/bin:/usr/sbin/nologin

alice:x:1000:1000:Alice:/home/alice:/bin/zsh
";

const GROUP_FIXTURE: &str = "\
root:x:0:
wheel:x:10:alice,bob
nogroup:x:65534:
docker:x:999:alice
";

const SHADOW_FIXTURE: &str = "\
root:!:19000:0:99999:7:::
alice:$6$salt$hash:19500:0:99999:7:14::
locked:*:18000::::::
";

fn write_db(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ==================== File Streaming Tests ====================

#[test]
fn test_stream_passwd_file() {
    let db = write_db(PASSWD_FIXTURE);
    let stream = RecordStream::<UserRecord, _>::open_path(db.path()).unwrap();

    let mut usernames = Vec::new();
    let mut end_count = None;
    for event in stream {
        match event.unwrap() {
            StreamEvent::Record(rec) => usernames.push(rec.username),
            StreamEvent::End { records } => end_count = Some(records),
        }
    }

    assert_eq!(usernames, vec!["root", "daemon", "bin", "alice"]);
    assert_eq!(end_count, Some(4));
}

#[test]
fn test_stream_path_free_function() {
    let db = write_db(PASSWD_FIXTURE);
    let stream = pwdb_stream::stream_path::<UserRecord, _>(db.path()).unwrap();
    let records = stream.collect_records().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].uid, Some(0));
    assert_eq!(records[3].home, "/home/alice");
}

#[test]
fn test_stream_reaches_ended_state() {
    let db = write_db(PASSWD_FIXTURE);
    let mut stream = RecordStream::<UserRecord, _>::open_path(db.path()).unwrap();
    assert_eq!(stream.state(), StreamState::Open);

    while stream.next_event().unwrap().is_some() {}

    assert_eq!(stream.state(), StreamState::Ended);
    assert_eq!(stream.records_emitted(), 4);
}

#[test]
fn test_empty_file_streams_zero_records() {
    let db = write_db("");
    let mut stream = RecordStream::<UserRecord, _>::open_path(db.path()).unwrap();
    assert_eq!(
        stream.next_event().unwrap(),
        Some(StreamEvent::End { records: 0 })
    );
}

#[test]
fn test_crlf_file_parses_cleanly() {
    let db = write_db("root:x:0:0:root:/root:/bin/bash\r\nbin:x:2:2:bin:/bin:/bin/sh\r\n");
    let records = pwdb_stream::users_from(db.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].shell, "/bin/sh");
}

// ==================== Lookup Scenario Tests ====================

#[test]
fn test_find_root_by_uid() {
    let db = write_db(PASSWD_FIXTURE);
    let rec = pwdb_stream::find_user_in(db.path(), &Criterion::new().field("uid", 0)).unwrap();
    assert_eq!(rec.username, "root");
    assert_eq!(rec.shell, "/bin/bash");
}

#[test]
fn test_find_daemon_by_name_and_uid() {
    let db = write_db(PASSWD_FIXTURE);
    let criterion = Criterion::new().field("username", "daemon").field("uid", 1);
    let rec = pwdb_stream::find_user_in(db.path(), &criterion).unwrap();
    assert_eq!(rec.gid, Some(1));
}

#[test]
fn test_mismatched_conjunction_is_not_found() {
    let db = write_db(PASSWD_FIXTURE);
    // Right name, wrong uid: both must hold.
    let criterion = Criterion::new().field("username", "daemon").field("uid", 0);
    let err = pwdb_stream::find_user_in(db.path(), &criterion).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_find_wheel_group_members() {
    let db = write_db(GROUP_FIXTURE);
    let rec =
        pwdb_stream::find_group_in(db.path(), &Criterion::new().field("groupname", "wheel"))
            .unwrap();
    assert_eq!(rec.gid, Some(10));
    assert_eq!(rec.users, vec!["alice", "bob"]);
}

#[test]
fn test_nogroup_has_empty_member_list() {
    let db = write_db(GROUP_FIXTURE);
    let rec =
        pwdb_stream::find_group_in(db.path(), &Criterion::new().field("gid", 65534)).unwrap();
    assert_eq!(rec.groupname, "nogroup");
    assert!(rec.users.is_empty());
}

#[test]
fn test_find_group_by_member_list() {
    let db = write_db(GROUP_FIXTURE);
    let criterion = Criterion::new().field("users", vec!["alice".to_string()]);
    let rec = pwdb_stream::find_group_in(db.path(), &criterion).unwrap();
    // docker is the only group whose member list is exactly [alice].
    assert_eq!(rec.groupname, "docker");
}

#[test]
fn test_find_shadow_entry_with_sentinels() {
    let db = write_db(SHADOW_FIXTURE);
    let rec =
        pwdb_stream::find_shadow_in(db.path(), &Criterion::new().field("username", "locked"))
            .unwrap();
    assert_eq!(rec.password, "*");
    assert_eq!(rec.lastchg, Some(18000));
    assert_eq!(rec.min, None);
    assert_eq!(rec.max, None);
}

#[test]
fn test_shadow_numeric_criterion() {
    let db = write_db(SHADOW_FIXTURE);
    let rec =
        pwdb_stream::find_shadow_in(db.path(), &Criterion::new().field("inactive", 14)).unwrap();
    assert_eq!(rec.username, "alice");
}

// ==================== Error Tests ====================

#[test]
fn test_open_error_names_the_path() {
    let err = RecordStream::<UserRecord, _>::open_path("/no/such/dir/passwd").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("cannot open"));
    assert!(message.contains("/no/such/dir/passwd"));
}

#[test]
fn test_not_found_error_names_kind_and_criterion() {
    let db = write_db(PASSWD_FIXTURE);
    let err = pwdb_stream::find_user_in(db.path(), &Criterion::new().field("uid", 424242))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("no user record"));
    assert!(message.contains("uid=424242"));
}

// ==================== Large Input Tests ====================

#[test]
fn test_stream_ten_thousand_records() {
    let mut contents = String::new();
    for i in 0..10_000 {
        contents.push_str(&format!("user{i}:x:{i}:{i}:User {i}:/home/user{i}:/bin/sh\n"));
    }
    let db = write_db(&contents);

    let mut stream = RecordStream::<UserRecord, _>::open_path(db.path()).unwrap();
    let mut count = 0usize;
    let mut end = None;
    while let Some(event) = stream.next_event().unwrap() {
        match event {
            StreamEvent::Record(rec) => {
                assert_eq!(rec.uid, Some(count as i64));
                count += 1;
            }
            StreamEvent::End { records } => end = Some(records),
        }
    }

    assert_eq!(count, 10_000);
    assert_eq!(end, Some(10_000));
}

#[test]
fn test_find_in_large_file_stops_early() {
    let mut contents = String::new();
    for i in 0..10_000 {
        contents.push_str(&format!("user{i}:x:{i}:{i}::/home/user{i}:/bin/sh\n"));
    }
    let db = write_db(&contents);

    let rec = pwdb_stream::find_user_in(db.path(), &Criterion::new().field("uid", 3)).unwrap();
    assert_eq!(rec.username, "user3");
}

// ==================== Default Path Tests ====================

#[cfg(unix)]
#[test]
fn test_system_passwd_smoke() {
    // Only meaningful where /etc/passwd exists and is readable.
    if !std::path::Path::new("/etc/passwd").exists() {
        return;
    }
    let users = pwdb_stream::users().unwrap();
    assert!(!users.is_empty());
    assert!(users.iter().all(|u| !u.username.is_empty()));
}

#[cfg(unix)]
#[test]
fn test_kind_default_paths_match_stream_targets() {
    use pwdb_core::RecordKind;
    assert_eq!(
        RecordKind::User.default_path(),
        std::path::Path::new("/etc/passwd")
    );
    assert_eq!(
        RecordKind::Group.default_path(),
        std::path::Path::new("/etc/group")
    );
    assert_eq!(
        RecordKind::Shadow.default_path(),
        std::path::Path::new("/etc/shadow")
    );
}

// ==================== Cancellation Tests ====================

#[test]
fn test_cancel_mid_file_releases_handle() {
    let db = write_db(PASSWD_FIXTURE);
    let mut stream = RecordStream::<UserRecord, _>::open_path(db.path()).unwrap();

    stream.next_event().unwrap();
    stream.cancel();

    assert_eq!(stream.state(), StreamState::Cancelled);
    assert_eq!(stream.next_event().unwrap(), None);

    // The handle is gone; deleting the backing file now succeeds even on
    // platforms that refuse to remove open files.
    db.close().unwrap();
}

#[test]
fn test_shadow_records_via_generic_stream() {
    let db = write_db(SHADOW_FIXTURE);
    let stream = RecordStream::<ShadowRecord, _>::open_path(db.path()).unwrap();
    let records = stream.collect_records().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].username, "alice");
    assert_eq!(records[1].flag, "");
}

#[test]
fn test_group_records_iterator_adapter() {
    let db = write_db(GROUP_FIXTURE);
    let stream = RecordStream::<GroupRecord, _>::open_path(db.path()).unwrap();
    let names: Vec<String> = stream.records().map(|r| r.unwrap().groupname).collect();
    assert_eq!(names, vec!["root", "wheel", "nogroup", "docker"]);
}
