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


#![no_main]

use libfuzzer_sys::fuzz_target;
use pwdb_stream::{GroupRecord, RecordStream, ShadowRecord, UserRecord};
use std::io::Cursor;

/// Fuzz target for the record stream.
///
/// Extraction is total by contract, so for UTF-8 input the stream must
/// never produce an error, let alone panic. Raw bytes additionally
/// exercise the invalid-UTF-8 read error path.
///
/// # Running the Fuzzer
///
/// ```bash
/// # Install cargo-fuzz
/// cargo install cargo-fuzz
///
/// # Run the fuzzer
/// cd crates/pwdb-stream
/// cargo fuzz run fuzz_record_stream
///
/// # Run with a larger input cap
/// cargo fuzz run fuzz_record_stream -- -max_len=100000
/// ```
///
/// # Expected Behavior
///
/// - The stream never panics
/// - Invalid UTF-8 surfaces as a read error, after which events stop
/// - Every emitted record count matches the end event's count
fuzz_target!(|data: &[u8]| {
    // Raw bytes: errors are acceptable, panics are not.
    let stream: RecordStream<UserRecord, _> = RecordStream::from_reader(Cursor::new(data.to_vec()));
    for event in stream {
        let _ = event;
    }

    // Lossy text: extraction is total, so nothing may fail.
    let input = String::from_utf8_lossy(data).into_owned();

    let users: RecordStream<UserRecord, _> =
        RecordStream::from_reader(Cursor::new(input.clone().into_bytes()));
    let mut emitted = 0usize;
    for event in users {
        match event.unwrap() {
            pwdb_stream::StreamEvent::Record(_) => emitted += 1,
            pwdb_stream::StreamEvent::End { records } => assert_eq!(records, emitted),
        }
    }

    let groups: RecordStream<GroupRecord, _> =
        RecordStream::from_reader(Cursor::new(input.clone().into_bytes()));
    let _ = groups.collect_records().unwrap();

    let shadows: RecordStream<ShadowRecord, _> =
        RecordStream::from_reader(Cursor::new(input.into_bytes()));
    let _ = shadows.collect_records().unwrap();
});
