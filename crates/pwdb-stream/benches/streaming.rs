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

//! Streaming parser benchmarks over synthetic passwd-format input.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pwdb_core::{Criterion as Lookup, UserRecord};
use pwdb_stream::RecordStream;
use std::io::Cursor;

const ROW_SCENARIOS: [usize; 3] = [100, 1_000, 10_000];

fn generate_passwd(rows: usize) -> String {
    let mut out = String::with_capacity(rows * 48);
    for i in 0..rows {
        out.push_str(&format!(
            "user{i}:x:{uid}:{gid}:User {i}:/home/user{i}:/bin/bash\n",
            uid = 1000 + i,
            gid = 1000 + i,
        ));
    }
    out
}

// ============================================================================
// Full-database collection
// ============================================================================

fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_collect");

    for &rows in &ROW_SCENARIOS {
        let input = generate_passwd(rows);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &input, |b, input| {
            b.iter(|| {
                let stream: RecordStream<UserRecord, _> =
                    RecordStream::from_reader(Cursor::new(input.as_bytes()));
                let records = stream.collect_records().unwrap();
                black_box(records.len())
            })
        });
    }

    group.finish();
}

// ============================================================================
// Criterion lookup with early cancellation
// ============================================================================

fn bench_find_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_find_first");

    let input = generate_passwd(10_000);
    let midpoint = Lookup::new().field("uid", 6_000);
    let absent = Lookup::new().field("username", "nobody-here");

    // Match at the midpoint: half the file never gets read.
    group.bench_function("hit_midpoint", |b| {
        b.iter(|| {
            let stream: RecordStream<UserRecord, _> =
                RecordStream::from_reader(Cursor::new(input.as_bytes()));
            let rec = stream.find_first(&midpoint).unwrap();
            black_box(rec.uid)
        })
    });

    // No match: the whole file is scanned before NotFound.
    group.bench_function("miss_full_scan", |b| {
        b.iter(|| {
            let stream: RecordStream<UserRecord, _> =
                RecordStream::from_reader(Cursor::new(input.as_bytes()));
            let err = stream.find_first(&absent).unwrap_err();
            black_box(err.is_not_found())
        })
    });

    group.finish();
}

// ============================================================================
// Extraction microbenchmark
// ============================================================================

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    let line = "daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin";
    group.bench_function("user_line", |b| {
        b.iter(|| black_box(pwdb_core::extract::user(black_box(line))))
    });

    group.finish();
}

criterion_group!(streaming_benches, bench_collect, bench_find_first, bench_extract);
criterion_main!(streaming_benches);
