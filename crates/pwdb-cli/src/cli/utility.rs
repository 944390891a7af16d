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

//! Utility commands for the pwdb CLI.
//!
//! This module provides utility commands that enhance the CLI experience,
//! such as shell completion generation.

use crate::commands;
use crate::error::CliError;
use clap::CommandFactory;
use clap::Subcommand;
use clap_complete::shells::*;

/// Utility commands.
///
/// These commands provide helpful utilities for working with the pwdb CLI,
/// including shell completion generation.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Generate shell completion scripts
    ///
    /// Generates shell completion scripts for various shells, enabling
    /// tab completion for pwdb commands, options, and file names.
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,

        /// Print installation instructions instead of generating script
        #[arg(short, long)]
        install: bool,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` on success, or a [`CliError`] on failure.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Unsupported shell is specified
    /// - Completion generation fails
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            UtilityCommands::Completion { shell, install } => {
                if install {
                    println!("{}", commands::print_installation_instructions(&shell));
                    Ok(())
                } else {
                    generate_completion(&shell)
                }
            }
        }
    }
}

/// Generate shell completion for the specified shell.
///
/// This is a helper function that creates a temporary command instance
/// for completion generation. It needs access to the full CLI structure.
///
/// # Arguments
///
/// * `shell` - Shell name (bash, zsh, fish, powershell, elvish)
///
/// # Returns
///
/// Returns `Ok(())` on success, or a [`CliError`] on failure.
///
/// # Errors
///
/// Returns `Err` if the shell is not supported.
fn generate_completion(shell: &str) -> Result<(), CliError> {
    // Completion generation needs the full command tree, which lives on the
    // binary's Parser struct in main.rs. Rebuild an equivalent command here
    // so the library side can generate without a circular dependency.

    use clap::Parser;

    #[derive(Parser)]
    #[command(name = "pwdb")]
    #[command(author, version, about = "pwdb - query the system account databases")]
    struct TempCli {
        #[command(subcommand)]
        command: super::Commands,
    }

    let mut cmd = TempCli::command();

    match shell.to_lowercase().as_str() {
        "bash" => commands::generate_completion_for_command(Bash, &mut cmd),
        "zsh" => commands::generate_completion_for_command(Zsh, &mut cmd),
        "fish" => commands::generate_completion_for_command(Fish, &mut cmd),
        "powershell" | "pwsh" => commands::generate_completion_for_command(PowerShell, &mut cmd),
        "elvish" => commands::generate_completion_for_command(Elvish, &mut cmd),
        _ => Err(CliError::unsupported_shell(shell)),
    }
}
