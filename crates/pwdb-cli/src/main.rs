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

//! PWDB Command Line Interface

use clap::Parser;
use pwdb_cli::cli::Commands;
use std::process::ExitCode;

/// pwdb - query the system account databases
///
/// A command-line interface for streaming and searching the colon-delimited
/// account databases: passwd, group, and shadow.
///
/// # Examples
///
/// ```bash
/// # List every user record
/// pwdb list user
///
/// # Count the groups in a specific file
/// pwdb list group --file ./group --count
///
/// # Find root by uid
/// pwdb find user uid=0
///
/// # Find a group by name, as JSON
/// pwdb find group groupname=wheel --json
/// ```
#[derive(Parser)]
#[command(name = "pwdb")]
#[command(author, version, about = "pwdb - query the system account databases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
