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

//! Error types for record streaming.
//!
//! Only structural failures are errors here: a file that cannot be opened,
//! an I/O fault mid-read, or a criterion search that exhausts the stream.
//! Malformed data inside a line never raises an error; the extractors
//! degrade the affected fields instead.
//!
//! # Error Categories
//!
//! - **Open**: the database file could not be opened; surfaces from
//!   `open`/`open_path` before any line is read.
//! - **Read**: the underlying reader failed mid-stream; the stream ends in
//!   the failed state.
//! - **NotFound**: a criterion search ran to the end of the stream without
//!   a match; distinguishable from I/O faults via
//!   [`is_not_found`](StreamError::is_not_found).
//!
//! # Examples
//!
//! ```
//! use pwdb_core::{Criterion, RecordKind};
//! use pwdb_stream::StreamError;
//!
//! let err = StreamError::not_found(RecordKind::User, Criterion::new().field("uid", 12345));
//! assert!(err.is_not_found());
//! assert_eq!(err.to_string(), "no user record matching uid=12345");
//! ```

use std::io;
use std::path::PathBuf;

use pwdb_core::{Criterion, RecordKind};
use thiserror::Error;

/// Errors produced by record streams.
///
/// Open failures carry the offending path; read failures carry the line
/// number being read when the fault occurred.
#[derive(Error, Debug)]
pub enum StreamError {
    /// The database file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// Path passed to `open_path` (or a kind's default path).
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The underlying reader failed mid-stream.
    #[error("read error at line {line}: {source}")]
    Read {
        /// 1-based number of the line being read when the fault occurred.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A criterion search exhausted the stream without a match.
    #[error("no {kind} record matching {criterion}")]
    NotFound {
        /// Database that was searched.
        kind: RecordKind,
        /// Criterion that nothing satisfied.
        criterion: Criterion,
    },
}

impl StreamError {
    /// Create an open error for `path`.
    #[inline]
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a read error at `line`.
    #[inline]
    pub fn read(line: usize, source: io::Error) -> Self {
        Self::Read { line, source }
    }

    /// Create a not-found error for a failed criterion search.
    #[inline]
    pub fn not_found(kind: RecordKind, criterion: Criterion) -> Self {
        Self::NotFound { kind, criterion }
    }

    /// Returns true for the not-found case of a criterion search.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Read { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type for streaming operations.
pub type StreamResult<T> = Result<T, StreamError>;
