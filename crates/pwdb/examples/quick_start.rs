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

//! Quick Start Example
//!
//! This example demonstrates the core functionality of PWDB:
//! 1. Streaming user records from passwd-format data
//! 2. The terminal end event and its record count
//! 3. Single-record lookup with a criterion
//!
//! Run with: cargo run --example quick_start

use pwdb::{AccountRecord, Criterion, RecordStream, StreamEvent, UserRecord};
use std::io::Cursor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== PWDB Quick Start Example ===\n");

    // 1. Define passwd-format data (comments and blank lines are skipped)
    let passwd = "\
# Local accounts
root:x:0:0:root:/root:/bin/bash
daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin

alice:x:1000:1000:Alice:/home/alice:/bin/zsh
";

    println!("Input passwd data:");
    println!("{}", passwd);

    // 2. Stream the records as events
    println!("--- Streaming ---");
    let stream = RecordStream::<UserRecord, _>::from_reader(Cursor::new(passwd));
    for event in stream {
        match event? {
            StreamEvent::Record(user) => {
                println!("  {} (uid {:?}, shell {})", user.username, user.uid, user.shell);
            }
            StreamEvent::End { records } => {
                println!("✓ End of stream after {} records", records);
            }
        }
    }
    println!();

    // 3. Look up a single record; the scan stops at the first match
    println!("--- Lookup ---");
    let criterion = Criterion::new().field("username", "daemon").field("uid", 1);
    let stream = RecordStream::<UserRecord, _>::from_reader(Cursor::new(passwd));
    let daemon = stream.find_first(&criterion)?;
    println!("✓ Found: {}", daemon.to_line());

    Ok(())
}
