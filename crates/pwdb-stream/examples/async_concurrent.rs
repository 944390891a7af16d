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

//! Concurrent async scanning example.
//!
//! Demonstrates reading several account databases concurrently using tokio.
//!
//! Run with: cargo run --example async_concurrent --features async

#[cfg(feature = "async")]
use pwdb_stream::{AccountRecord, AsyncRecordStream, StreamEvent};
#[cfg(feature = "async")]
use std::io::Cursor;

#[cfg(feature = "async")]
async fn scan<T: AccountRecord>(
    name: &str,
    data: &str,
) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    println!("[{}] Starting scan...", name);

    let mut stream: AsyncRecordStream<T, _> = AsyncRecordStream::from_reader(Cursor::new(
        data.as_bytes().to_vec(),
    ));

    let mut count = 0;
    while let Some(event) = stream.next_event().await? {
        if let StreamEvent::Record(_) = event {
            count += 1;
        }
    }

    println!("[{}] Completed: {} records", name, count);
    Ok(count)
}

#[cfg(feature = "async")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use pwdb_stream::{GroupRecord, ShadowRecord, UserRecord};

    println!("=== Concurrent Async Scanning Example ===\n");

    let passwd = "\
root:x:0:0:root:/root:/bin/bash
daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin
alice:x:1000:1000:Alice:/home/alice:/bin/zsh
";

    let group = "\
root:x:0:
wheel:x:10:alice,bob
docker:x:999:alice
nogroup:x:65534:
";

    let shadow = "\
root:!:19000:0:99999:7:::
alice:$6$salt$hash:19500:0:99999:7:::
";

    // Scan all three databases concurrently.
    let (users, groups, shadows) = tokio::join!(
        scan::<UserRecord>("passwd", passwd),
        scan::<GroupRecord>("group", group),
        scan::<ShadowRecord>("shadow", shadow),
    );

    println!("\n=== Results ===");
    println!("passwd: {} records", users?);
    println!("group: {} records", groups?);
    println!("shadow: {} records", shadows?);

    Ok(())
}

#[cfg(not(feature = "async"))]
fn main() {
    eprintln!("This example requires the 'async' feature to be enabled.");
    eprintln!("Run with: cargo run --example async_concurrent --features async");
}
