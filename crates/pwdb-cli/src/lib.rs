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

//! PWDB CLI library for command-line parsing and execution.
//!
//! This library provides the core functionality for the pwdb command-line
//! interface, including the command implementations for listing and searching
//! the system account databases.
//!
//! # Commands
//!
//! The CLI provides the following commands:
//!
//! ## Streaming & Lookup
//!
//! - **list**: Stream every record of a database, as lines or JSON
//! - **find**: Locate the first record matching `FIELD=VALUE` criteria
//!
//! ## Utilities
//!
//! - **completion**: Generate shell completion scripts (bash, zsh, fish, powershell, elvish)
//!
//! # Examples
//!
//! ## Listing
//!
//! ```no_run
//! use pwdb_cli::commands::list;
//!
//! # fn main() -> Result<(), pwdb_cli::error::CliError> {
//! // Stream every user record from the default database
//! list("user", None, false, false)?;
//!
//! // Count the records in a specific group file
//! list("group", Some("./group"), false, true)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Searching
//!
//! ```no_run
//! use pwdb_cli::commands::find;
//!
//! # fn main() -> Result<(), pwdb_cli::error::CliError> {
//! // Find root by uid
//! let criteria = vec!["uid=0".to_string()];
//! find("user", &criteria, None, false)?;
//!
//! // Find a group by name, printed as JSON
//! let criteria = vec!["groupname=wheel".to_string()];
//! find("group", &criteria, None, true)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Performance
//!
//! - **Streaming**: Records are read one line at a time, never the whole file
//! - **Early exit**: `find` stops reading as soon as the first match is found
//!
//! # Error Handling
//!
//! All commands return `Result<(), CliError>` for consistent error handling.
//! Errors are descriptive and include context like file paths, line numbers,
//! and the criteria that failed to match.

pub mod cli;
pub mod commands;
pub mod error;
