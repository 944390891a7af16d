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

//! Advanced Features Example
//!
//! Demonstrates the finer points of PWDB streams:
//! - Stream lifecycle states and early cancellation
//! - Forgiving extraction of damaged lines
//! - The plain-record iterator adapter
//! - Shadow records and their absent-value sentinels
//!
//! Run with: cargo run --example advanced_features

use pwdb::{AccountRecord, RecordStream, ShadowRecord, StreamEvent, StreamState, UserRecord};
use std::io::Cursor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== PWDB Advanced Features Example ===\n");

    // 1. Lifecycle states and cancellation
    let passwd = "\
root:x:0:0:root:/root:/bin/bash
daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin
alice:x:1000:1000:Alice:/home/alice:/bin/zsh
";

    println!("--- Lifecycle and Cancellation ---");
    let mut stream = RecordStream::<UserRecord, _>::from_reader(Cursor::new(passwd));
    println!("state after open: {:?}", stream.state());

    if let Some(StreamEvent::Record(first)) = stream.next_event()? {
        println!("first record: {} ({:?})", first.username, stream.state());
    }

    // Stop here; the reader is dropped and no further records are produced
    stream.cancel();
    println!("state after cancel: {:?}", stream.state());
    assert_eq!(stream.state(), StreamState::Cancelled);
    assert!(stream.next_event()?.is_none());
    println!("✓ Cancelled stream produces nothing further");
    println!();

    // 2. Forgiving extraction: short lines and non-numeric columns degrade
    println!("--- Forgiving Extraction ---");
    let damaged = "truncated:x:12\nbad-uid:x:abc:0:Bad Uid:/home/bad:/bin/sh\n";
    let stream = RecordStream::<UserRecord, _>::from_reader(Cursor::new(damaged));
    for user in stream.records() {
        let user = user?;
        println!(
            "{:<10} uid={:?} home={:?} (line: {})",
            user.username,
            user.uid,
            user.home,
            user.to_line()
        );
    }
    println!("✓ Damaged lines became records, not errors");
    println!();

    // 3. Shadow sentinels: empty or non-numeric aging columns are None
    println!("--- Shadow Sentinels ---");
    let shadow = "locked:!:::::::\nalice:$6$hash:19500:0:99999:7:14::\n";
    let stream = RecordStream::<ShadowRecord, _>::from_reader(Cursor::new(shadow));
    let records = stream.collect_records()?;
    for rec in &records {
        println!(
            "{:<8} lastchg={:?} max={:?} inactive={:?}",
            rec.username, rec.lastchg, rec.max, rec.inactive
        );
    }
    assert_eq!(records[0].lastchg, None);
    assert_eq!(records[1].inactive, Some(14));
    println!("✓ Absent aging fields are None, present ones are Some");

    Ok(())
}
