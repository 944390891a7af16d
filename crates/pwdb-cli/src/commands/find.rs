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

//! Find command - locate the first record matching equality criteria

use super::open_stream;
use crate::error::CliError;
use colored::Colorize;
use pwdb_core::{
    AccountRecord, Criterion, CriterionValue, FieldValue, GroupRecord, RecordKind, ShadowRecord,
    UserRecord,
};
use pwdb_stream::StreamError;

/// Find the first record matching every given criterion.
///
/// Scans the database in file order and stops at the first record whose
/// fields equal every `FIELD=VALUE` argument. The file handle is released
/// as soon as the match is found; the rest of the file is never read.
///
/// # Arguments
///
/// * `kind` - Database kind name (`user`, `group`, or `shadow`)
/// * `criteria` - Equality criteria of the form `FIELD=VALUE`
/// * `file` - Optional path override; defaults to the kind's conventional path
/// * `json` - If `true`, print the matched record as pretty JSON
///
/// # Returns
///
/// Returns `Ok(())` if a record matched.
///
/// # Errors
///
/// Returns `Err` if:
/// - `kind` is not a supported database kind
/// - A criterion is malformed, names an unknown field, or gives a
///   non-integer value for a numeric field
/// - The database file cannot be opened or read
/// - No record matches every criterion
///
/// # Examples
///
/// ```no_run
/// use pwdb_cli::commands::find;
///
/// # fn main() -> Result<(), pwdb_cli::error::CliError> {
/// // Find root by uid
/// let criteria = vec!["uid=0".to_string()];
/// find("user", &criteria, None, false)?;
///
/// // Conjunction: every criterion must hold on the same record
/// let criteria = vec!["username=daemon".to_string(), "uid=1".to_string()];
/// find("user", &criteria, None, false)?;
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// Prints `✓` and the matched record's canonical line, or the record as
/// JSON with `--json`. When no record matches, prints `✗` and the criteria
/// before returning the error.
pub fn find(kind: &str, criteria: &[String], file: Option<&str>, json: bool) -> Result<(), CliError> {
    match kind.parse::<RecordKind>()? {
        RecordKind::User => find_record::<UserRecord>(criteria, file, json),
        RecordKind::Group => find_record::<GroupRecord>(criteria, file, json),
        RecordKind::Shadow => find_record::<ShadowRecord>(criteria, file, json),
    }
}

/// Search one concrete record type and render the outcome.
fn find_record<T>(criteria: &[String], file: Option<&str>, json: bool) -> Result<(), CliError>
where
    T: AccountRecord + Default + serde::Serialize,
{
    let criterion = parse_criteria::<T>(criteria)?;
    let stream = open_stream::<T>(file)?;

    match stream.find_first(&criterion) {
        Ok(record) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{} {}", "✓".green().bold(), record.to_line());
            }
            Ok(())
        }
        Err(e) => {
            if !json && matches!(e, StreamError::NotFound { .. }) {
                println!("{} {}", "✗".red().bold(), criterion);
            }
            Err(e.into())
        }
    }
}

/// Parse `FIELD=VALUE` arguments into a typed criterion for `T`.
///
/// The expectation is typed from the field it names: numeric columns take
/// integer expectations, the group member column takes a comma-separated
/// list, and everything else compares as text. An empty value for the
/// member column means "no members".
fn parse_criteria<T: AccountRecord + Default>(args: &[String]) -> Result<Criterion, CliError> {
    // A default record answers which shape each field name has.
    let probe = T::default();
    let mut criterion = Criterion::new();

    for arg in args {
        let (field, value) = arg
            .split_once('=')
            .ok_or_else(|| CliError::criterion_syntax(arg))?;

        let expected = match probe.field(field) {
            Some(FieldValue::Str(_)) => CriterionValue::from(value),
            Some(FieldValue::Int(_)) => {
                let n: i64 = value
                    .parse()
                    .map_err(|_| CliError::numeric_value(field, value))?;
                CriterionValue::from(n)
            }
            Some(FieldValue::Members(_)) => {
                let members: Vec<String> = if value.is_empty() {
                    Vec::new()
                } else {
                    value.split(',').map(str::to_string).collect()
                };
                CriterionValue::from(members)
            }
            None => return Err(CliError::unknown_field(field, T::KIND)),
        };

        criterion = criterion.field(field, expected);
    }

    Ok(criterion)
}
