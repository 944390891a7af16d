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

//! Core pwdb commands for streaming and searching account databases.
//!
//! This module contains the fundamental pwdb CLI commands that operate on
//! the colon-delimited account databases: passwd, group, and shadow.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Core pwdb commands.
///
/// These commands provide the essential functionality for working with the
/// account databases: streaming every record and searching for one.
///
/// # Commands
///
/// - **List**: Stream every record of a database
/// - **Find**: Locate the first record matching `FIELD=VALUE` criteria
#[derive(Subcommand)]
pub enum CoreCommands {
    /// List every record of an account database
    ///
    /// Streams the database line by line and prints each record. Comment and
    /// blank lines are skipped. Reads the conventional path for the kind
    /// (/etc/passwd, /etc/group, /etc/shadow) unless --file is given.
    List {
        /// Database kind to read (user, group, shadow)
        #[arg(value_name = "KIND")]
        kind: String,

        /// Read this file instead of the default path for the kind
        #[arg(short, long)]
        file: Option<String>,

        /// Print records as a JSON array
        #[arg(short, long)]
        json: bool,

        /// Print only the number of records
        #[arg(short, long)]
        count: bool,
    },

    /// Find the first record matching every given criterion
    ///
    /// Scans the database in file order and stops at the first record whose
    /// fields equal every FIELD=VALUE argument. Numeric fields compare as
    /// integers, the group `users` field as a comma-separated member list.
    /// Exits with an error if no record matches.
    Find {
        /// Database kind to search (user, group, shadow)
        #[arg(value_name = "KIND")]
        kind: String,

        /// Equality criteria, e.g. username=root or uid=0
        #[arg(value_name = "FIELD=VALUE", required = true)]
        criteria: Vec<String>,

        /// Search this file instead of the default path for the kind
        #[arg(short, long)]
        file: Option<String>,

        /// Print the matched record as JSON
        #[arg(short, long)]
        json: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` on success, or a [`CliError`] on failure.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::List {
                kind,
                file,
                json,
                count,
            } => commands::list(&kind, file.as_deref(), json, count),
            CoreCommands::Find {
                kind,
                criteria,
                file,
                json,
            } => commands::find(&kind, &criteria, file.as_deref(), json),
        }
    }
}
