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

//! Streaming Account Database Parser
//!
//! This crate reads the colon-delimited system account databases — passwd,
//! group, and shadow — as streams of typed records. Lines are pulled one at
//! a time, so memory stays constant regardless of file size, and lookups
//! can stop reading the moment they are satisfied.
//!
//! # Features
//!
//! - **Memory Efficient**: One line in flight at a time, any file size
//! - **Iterator-based**: Standard Rust iterator interface (sync)
//! - **Async Support**: Non-blocking I/O with tokio (optional)
//! - **Early Cancellation**: Lookups release the file handle on first match
//! - **Forgiving**: Malformed lines become records with empty/absent fields,
//!   never errors (see `pwdb-core`)
//!
//! # Sync vs Async
//!
//! ## Synchronous API (default)
//!
//! Use the synchronous API for CLI tools, batch jobs, and anywhere no async
//! runtime is in play:
//!
//! ```rust,no_run
//! use pwdb_core::UserRecord;
//! use pwdb_stream::{RecordStream, StreamEvent};
//!
//! let stream = RecordStream::<UserRecord>::open().unwrap();
//!
//! for event in stream {
//!     match event {
//!         Ok(StreamEvent::Record(rec)) => {
//!             println!("{} (uid {:?})", rec.username, rec.uid);
//!         }
//!         Ok(StreamEvent::End { records }) => {
//!             println!("{records} records total");
//!         }
//!         Err(e) => {
//!             eprintln!("Error: {e}");
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! Whole-database reads and lookups have one-line forms:
//!
//! ```rust,no_run
//! use pwdb_core::Criterion;
//!
//! let all = pwdb_stream::users().unwrap();
//! let root = pwdb_stream::find_user(&Criterion::new().field("uid", 0)).unwrap();
//! assert_eq!(root.username, "root");
//! # let _ = all;
//! ```
//!
//! ## Asynchronous API (feature = "async")
//!
//! Use the asynchronous API inside async services, or to scan several
//! databases concurrently:
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use pwdb_core::{GroupRecord, UserRecord};
//! use pwdb_stream::AsyncRecordStream;
//!
//! let (users, groups) = tokio::join!(
//!     async { AsyncRecordStream::<UserRecord>::open().await?.collect_records().await },
//!     async { AsyncRecordStream::<GroupRecord>::open().await?.collect_records().await },
//! );
//! println!("{} users, {} groups", users?.len(), groups?.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Failures travel as values: opening a missing file returns
//! [`StreamError::Open`], a mid-file I/O fault returns [`StreamError::Read`]
//! and parks the stream, and an unmatched lookup returns
//! [`StreamError::NotFound`]. A record that merely looks odd is not an
//! error — extraction is total.

mod db;
mod error;
mod event;
mod reader;
mod stream;

#[cfg(feature = "async")]
mod async_reader;
#[cfg(feature = "async")]
mod async_stream;

pub use db::{
    find_group, find_group_in, find_shadow, find_shadow_in, find_user, find_user_in, groups,
    groups_from, shadows, shadows_from, users, users_from,
};
pub use error::{StreamError, StreamResult};
pub use event::StreamEvent;
pub use reader::LineReader;
pub use stream::{stream, stream_path, RecordStream, Records, StreamState};

#[cfg(feature = "async")]
pub use async_reader::AsyncLineReader;
#[cfg(feature = "async")]
pub use async_stream::AsyncRecordStream;

/// Re-export core types for convenience.
pub use pwdb_core::{
    AccountRecord, Criterion, CriterionValue, FieldValue, GroupRecord, RecordKind, ShadowRecord,
    UserRecord,
};
