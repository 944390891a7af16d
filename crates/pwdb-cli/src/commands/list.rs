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

//! List command - stream every record of an account database

use super::open_stream;
use crate::error::CliError;
use pwdb_core::{AccountRecord, GroupRecord, RecordKind, ShadowRecord, UserRecord};

/// List every record of an account database.
///
/// Streams the database one line at a time and prints each record to stdout.
/// Comment lines (leading `#`) and blank lines are skipped and never counted.
///
/// # Arguments
///
/// * `kind` - Database kind name (`user`, `group`, or `shadow`)
/// * `file` - Optional path override; defaults to the kind's conventional path
/// * `json` - If `true`, print all records as a pretty JSON array
/// * `count` - If `true`, print only the number of records
///
/// # Returns
///
/// Returns `Ok(())` on success.
///
/// # Errors
///
/// Returns `Err` if:
/// - `kind` is not a supported database kind
/// - The database file cannot be opened or read
/// - JSON serialization fails
///
/// # Examples
///
/// ```no_run
/// use pwdb_cli::commands::list;
///
/// # fn main() -> Result<(), pwdb_cli::error::CliError> {
/// // Print every user record as colon-delimited lines
/// list("user", None, false, false)?;
///
/// // Count the groups in a local file
/// list("group", Some("./group"), false, true)?;
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// One canonical colon-delimited line per record, a pretty JSON array with
/// `--json`, or a bare record count with `--count`. When both flags are
/// given, `--count` wins.
pub fn list(kind: &str, file: Option<&str>, json: bool, count: bool) -> Result<(), CliError> {
    match kind.parse::<RecordKind>()? {
        RecordKind::User => list_records::<UserRecord>(file, json, count),
        RecordKind::Group => list_records::<GroupRecord>(file, json, count),
        RecordKind::Shadow => list_records::<ShadowRecord>(file, json, count),
    }
}

/// Stream records of one concrete type and render them.
fn list_records<T>(file: Option<&str>, json: bool, count: bool) -> Result<(), CliError>
where
    T: AccountRecord + serde::Serialize,
{
    let stream = open_stream::<T>(file)?;

    if count {
        let total = stream
            .records()
            .try_fold(0usize, |n, record| record.map(|_| n + 1))?;
        println!("{}", total);
        return Ok(());
    }

    if json {
        let records = stream.collect_records()?;
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in stream.records() {
            println!("{}", record?.to_line());
        }
    }

    Ok(())
}
