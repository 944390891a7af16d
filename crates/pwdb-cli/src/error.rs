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

//! Structured error types for the pwdb CLI.
//!
//! This module provides type-safe, composable error handling using `thiserror`.
//! All CLI operations return `Result<T, CliError>` for consistent error reporting.

use pwdb_core::{RecordKind, UnsupportedKind};
use pwdb_stream::StreamError;
use thiserror::Error;

/// The main error type for pwdb CLI operations.
///
/// This enum represents all possible error conditions that can occur during
/// CLI command execution. Each variant provides rich context for debugging
/// and user-friendly error messages.
///
/// # Examples
///
/// ```rust
/// use pwdb_cli::error::CliError;
/// use pwdb_core::RecordKind;
///
/// fn parse_kind(name: &str) -> Result<RecordKind, CliError> {
///     // The kind parse error is automatically converted
///     Ok(name.parse::<RecordKind>()?)
/// }
///
/// assert!(parse_kind("user").is_ok());
/// assert!(parse_kind("passwd").is_err());
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// The requested database kind is not `user`, `group`, or `shadow`.
    #[error(transparent)]
    Kind(#[from] UnsupportedKind),

    /// The underlying record stream failed.
    ///
    /// This covers file open errors, mid-stream read errors, and lookups
    /// that scanned the whole database without a match.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// A search argument was not of the form `FIELD=VALUE`.
    #[error("invalid criterion '{arg}': expected FIELD=VALUE")]
    CriterionSyntax {
        /// The argument exactly as given on the command line
        arg: String,
    },

    /// A search argument named a field the record kind does not have.
    #[error("unknown field '{field}' for {kind} records (expected one of: {expected})")]
    UnknownField {
        /// The field name as given on the command line
        field: String,
        /// The record kind being searched
        kind: RecordKind,
        /// Comma-separated list of the addressable field names
        expected: String,
    },

    /// A numeric field was given a value that is not an integer.
    ///
    /// Numeric columns only ever equal integer expectations, so a
    /// non-integer value could never match and is rejected up front.
    #[error("field '{field}' is numeric: '{value}' is not an integer")]
    NumericValue {
        /// The field name as given on the command line
        field: String,
        /// The rejected value
        value: String,
    },

    /// JSON serialization/deserialization error.
    ///
    /// This wraps serde_json errors during output formatting.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// The requested completion shell is not supported.
    #[error("unsupported shell: '{shell}'. Supported shells: bash, zsh, fish, powershell, elvish")]
    UnsupportedShell {
        /// The shell name as given on the command line
        shell: String,
    },
}

impl CliError {
    /// Create a criterion syntax error.
    ///
    /// # Arguments
    ///
    /// * `arg` - The malformed command-line argument
    pub fn criterion_syntax(arg: impl Into<String>) -> Self {
        Self::CriterionSyntax { arg: arg.into() }
    }

    /// Create an unknown-field error listing the valid names for `kind`.
    ///
    /// # Arguments
    ///
    /// * `field` - The unrecognized field name
    /// * `kind` - The record kind being searched
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pwdb_cli::error::CliError;
    /// use pwdb_core::RecordKind;
    ///
    /// let err = CliError::unknown_field("login", RecordKind::User);
    /// assert!(err.to_string().contains("username"));
    /// ```
    pub fn unknown_field(field: impl Into<String>, kind: RecordKind) -> Self {
        Self::UnknownField {
            field: field.into(),
            kind,
            expected: kind.field_names().join(", "),
        }
    }

    /// Create a non-integer-value error for a numeric field.
    ///
    /// # Arguments
    ///
    /// * `field` - The numeric field name
    /// * `value` - The value that failed to parse as an integer
    pub fn numeric_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NumericValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an unsupported-shell error.
    ///
    /// # Arguments
    ///
    /// * `shell` - The unrecognized shell name
    pub fn unsupported_shell(shell: impl Into<String>) -> Self {
        Self::UnsupportedShell {
            shell: shell.into(),
        }
    }
}

// Automatic conversion from serde_json::Error
impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
