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

//! CLI command implementations

mod completion;
mod find;
mod list;

pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use find::find;
pub use list::list;

use crate::error::CliError;
use pwdb_core::AccountRecord;
use pwdb_stream::RecordStream;

/// Open a record stream for `T`, honoring an optional path override.
///
/// Without an override, the stream reads the conventional path for the
/// record kind (`/etc/passwd`, `/etc/group`, or `/etc/shadow`).
///
/// # Errors
///
/// Returns `Err` if the file cannot be opened.
fn open_stream<T: AccountRecord>(file: Option<&str>) -> Result<RecordStream<T>, CliError> {
    let stream = match file {
        Some(path) => RecordStream::open_path(path)?,
        None => RecordStream::open()?,
    };
    Ok(stream)
}
