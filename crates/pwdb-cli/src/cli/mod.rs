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

//! CLI command definitions and argument parsing.
//!
//! This module contains all command-line interface structures for the pwdb
//! CLI, organized into logical categories for better maintainability.
//!
//! # Organization
//!
//! Commands are organized into the following modules:
//!
//! - [`core`]: Core commands (list, find)
//! - [`utility`]: Utility commands (completion)
//!
//! # Design Principles
//!
//! - **Single Responsibility**: Each submodule handles one category of commands
//! - **Consistent API**: All commands follow the same argument patterns
//! - **Type Safety**: Strongly typed arguments with validation

mod core;
mod utility;

use clap::Subcommand;

use crate::error::CliError;

pub use core::CoreCommands;
pub use utility::UtilityCommands;

/// Top-level CLI commands enum.
///
/// This is the main command dispatcher that delegates to specialized command
/// categories. Each variant represents a category of related commands.
///
/// # Architecture
///
/// The commands are organized hierarchically:
///
/// ```text
/// Commands
/// ├── Core (list, find)
/// └── Utility (completion)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use pwdb_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// This method dispatches to the appropriate command handler based on the
    /// command variant.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` on successful execution, or a [`CliError`] on failure.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The database kind or a criterion argument is invalid
    /// - The database file cannot be opened or read
    /// - A search finds no matching record
    /// - Any other command-specific error occurs
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
