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

//! Basic usage example for the PWDB library
//!
//! Reads user and group databases from files on disk with the one-line
//! convenience functions, then searches them with criteria.
//!
//! Run with: cargo run --example basic_usage

use pwdb::{find_group_in, find_user_in, groups_from, users_from, Criterion};
use std::fs;
use tempfile::NamedTempFile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example databases written to temp files; against the live system,
    // users() and groups() read /etc/passwd and /etc/group directly.
    let passwd_file = NamedTempFile::new()?;
    fs::write(
        passwd_file.path(),
        "root:x:0:0:root:/root:/bin/bash\n\
         daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin\n\
         alice:x:1000:1000:Alice Smith:/home/alice:/bin/zsh\n",
    )?;

    let group_file = NamedTempFile::new()?;
    fs::write(
        group_file.path(),
        "root:x:0:\n\
         wheel:x:10:alice,bob\n\
         nogroup:x:65534:\n",
    )?;

    println!("=== Reading Users ===");
    let users = users_from(passwd_file.path())?;
    for user in &users {
        println!("{:<8} uid={:<6?} home={}", user.username, user.uid, user.home);
    }
    println!();

    println!("=== Reading Groups ===");
    let groups = groups_from(group_file.path())?;
    for group in &groups {
        println!("{:<8} gid={:<6?} members={:?}", group.groupname, group.gid, group.users);
    }
    println!();

    println!("=== Lookups ===");
    let root = find_user_in(passwd_file.path(), &Criterion::new().field("uid", 0))?;
    println!("uid 0 is {}", root.username);

    let wheel = find_group_in(
        group_file.path(),
        &Criterion::new().field("users", vec!["alice".to_string(), "bob".to_string()]),
    )?;
    println!("alice and bob (in that order) belong to {}", wheel.groupname);

    // A search that matches nothing is an ordinary error value
    let missing = find_user_in(passwd_file.path(), &Criterion::new().field("uid", 424242));
    match missing {
        Err(e) => println!("expected miss: {}", e),
        Ok(rec) => println!("unexpected hit: {}", rec.username),
    }

    Ok(())
}
