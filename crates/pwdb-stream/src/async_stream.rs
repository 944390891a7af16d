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

//! Async record stream implementation.
//!
//! This module provides an asynchronous record stream that mirrors the
//! synchronous [`RecordStream`](crate::RecordStream) but uses tokio's async
//! I/O. Filtering, ordering, the end event, and the state machine are all
//! identical; only the waiting differs.
//!
//! # When to Use Async
//!
//! **Choose Async (`AsyncRecordStream`) when:**
//! - Reading account databases inside an async service
//! - Scanning several databases concurrently (see [`tokio::join!`])
//! - The input is a pipe or socket rather than a local file
//!
//! **Choose Sync (`RecordStream`) when:**
//! - Reading local files in a CLI or batch tool
//! - No async runtime is in play
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use pwdb_core::UserRecord;
//! use pwdb_stream::{AsyncRecordStream, StreamEvent};
//!
//! let mut stream = AsyncRecordStream::<UserRecord>::open().await?;
//! while let Some(event) = stream.next_event().await? {
//!     match event {
//!         StreamEvent::Record(rec) => println!("{}", rec.username),
//!         StreamEvent::End { records } => println!("{records} records"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::marker::PhantomData;
use std::path::Path;

use pwdb_core::{AccountRecord, Criterion, RecordKind};
use tokio::fs::File;
use tokio::io::AsyncRead;

use crate::async_reader::AsyncLineReader;
use crate::error::{StreamError, StreamResult};
use crate::event::StreamEvent;
use crate::stream::StreamState;

/// Async streaming parser over one account database.
///
/// Behaves exactly like [`RecordStream`](crate::RecordStream): records in
/// file order, comments and blanks skipped, one end event, one reader held
/// and released at the terminal states. `next_event` yields to the runtime
/// while waiting for input instead of blocking.
///
/// # Examples
///
/// Concurrent scan of two databases:
///
/// ```rust,no_run
/// # #[cfg(feature = "async")]
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// use pwdb_core::{GroupRecord, UserRecord};
/// use pwdb_stream::AsyncRecordStream;
///
/// let (users, groups) = tokio::join!(
///     async { AsyncRecordStream::<UserRecord>::open().await?.collect_records().await },
///     async { AsyncRecordStream::<GroupRecord>::open().await?.collect_records().await },
/// );
/// println!("{} users, {} groups", users?.len(), groups?.len());
/// # Ok(())
/// # }
/// ```
pub struct AsyncRecordStream<T: AccountRecord, R: AsyncRead + Unpin = File> {
    reader: Option<AsyncLineReader<R>>,
    state: StreamState,
    emitted: usize,
    _record: PhantomData<fn() -> T>,
}

impl<T: AccountRecord> AsyncRecordStream<T, File> {
    /// Opens the default database file for `T`'s kind.
    ///
    /// # Errors
    ///
    /// [`StreamError::Open`] if the file cannot be opened.
    pub async fn open() -> StreamResult<Self> {
        Self::open_path(T::KIND.default_path()).await
    }

    /// Opens the database file at `path`.
    ///
    /// # Errors
    ///
    /// [`StreamError::Open`] if the file cannot be opened.
    pub async fn open_path(path: impl AsRef<Path>) -> StreamResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .await
            .map_err(|source| StreamError::open(path, source))?;
        Ok(Self::from_reader(file))
    }
}

impl<T: AccountRecord, R: AsyncRead + Unpin> AsyncRecordStream<T, R> {
    /// Wraps an already-open async reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Some(AsyncLineReader::new(reader)),
            state: StreamState::Open,
            emitted: 0,
            _record: PhantomData,
        }
    }

    /// Wraps an async reader with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: Some(AsyncLineReader::with_capacity(reader, capacity)),
            state: StreamState::Open,
            emitted: 0,
            _record: PhantomData,
        }
    }

    /// The database kind this stream parses.
    #[inline]
    pub fn kind(&self) -> RecordKind {
        T::KIND
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Number of records emitted so far.
    #[inline]
    pub fn records_emitted(&self) -> usize {
        self.emitted
    }

    /// Abandons the stream and releases the underlying reader.
    ///
    /// Synchronous on purpose: dropping the reader needs no I/O.
    pub fn cancel(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.state = StreamState::Cancelled;
        self.reader = None;
    }

    /// Pulls the next event, yielding to the runtime while waiting.
    ///
    /// Same contract as [`RecordStream::next_event`]: records in file
    /// order, then one end event, then `Ok(None)` forever; a fault returns
    /// `Err` and moves the stream to [`StreamState::Failed`].
    ///
    /// [`RecordStream::next_event`]: crate::RecordStream::next_event
    pub async fn next_event(&mut self) -> StreamResult<Option<StreamEvent<T>>> {
        loop {
            let next = match self.reader.as_mut() {
                Some(reader) => reader.next_line().await,
                None => return Ok(None),
            };

            match next {
                Ok(Some((_, line))) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    self.state = StreamState::Reading;
                    self.emitted += 1;
                    return Ok(Some(StreamEvent::Record(T::extract(&line))));
                }
                Ok(None) => {
                    self.state = StreamState::Ended;
                    self.reader = None;
                    return Ok(Some(StreamEvent::End {
                        records: self.emitted,
                    }));
                }
                Err(error) => {
                    self.state = StreamState::Failed;
                    self.reader = None;
                    return Err(error);
                }
            }
        }
    }

    /// Buffers every record into a vector.
    ///
    /// # Errors
    ///
    /// Any [`StreamError::Read`] fault encountered before the end.
    pub async fn collect_records(mut self) -> StreamResult<Vec<T>> {
        let mut records = Vec::new();
        loop {
            match self.next_event().await? {
                Some(StreamEvent::Record(record)) => records.push(record),
                Some(StreamEvent::End { .. }) | None => return Ok(records),
            }
        }
    }

    /// Returns the first record matching `criterion`, cancelling the
    /// stream on the spot.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotFound`] when nothing matches;
    /// [`StreamError::Read`] if the input faults first.
    pub async fn find_first(mut self, criterion: &Criterion) -> StreamResult<T> {
        loop {
            match self.next_event().await? {
                Some(StreamEvent::Record(record)) => {
                    if criterion.matches(&record) {
                        self.cancel();
                        return Ok(record);
                    }
                }
                Some(StreamEvent::End { .. }) | None => {
                    return Err(StreamError::not_found(T::KIND, criterion.clone()));
                }
            }
        }
    }
}

#[cfg(all(test, feature = "async"))]
mod tests {
    use super::*;
    use pwdb_core::{GroupRecord, UserRecord};
    use std::io::Cursor;

    const TWO_USERS: &str =
        "root:x:0:0:root:/root:/bin/bash\n#comment\ndaemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin\n";

    #[tokio::test]
    async fn test_emits_records_then_one_end_then_none() {
        let mut stream: AsyncRecordStream<UserRecord, _> =
            AsyncRecordStream::from_reader(Cursor::new(TWO_USERS));

        let first = stream.next_event().await.unwrap().unwrap();
        assert_eq!(first.as_record().unwrap().username, "root");

        let second = stream.next_event().await.unwrap().unwrap();
        assert_eq!(second.as_record().unwrap().username, "daemon");

        assert_eq!(
            stream.next_event().await.unwrap(),
            Some(StreamEvent::End { records: 2 })
        );
        assert_eq!(stream.next_event().await.unwrap(), None);
        assert_eq!(stream.state(), StreamState::Ended);
    }

    #[tokio::test]
    async fn test_collect_skips_comments_and_blanks() {
        let input = "#c\n\nwheel:*:10:alice,bob\n";
        let stream: AsyncRecordStream<GroupRecord, _> =
            AsyncRecordStream::from_reader(Cursor::new(input));
        let records = stream.collect_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].users, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_find_first_matches_and_cancels() {
        let stream: AsyncRecordStream<UserRecord, _> =
            AsyncRecordStream::from_reader(Cursor::new(TWO_USERS));
        let rec = stream
            .find_first(&Criterion::new().field("uid", 1))
            .await
            .unwrap();
        assert_eq!(rec.username, "daemon");
    }

    #[tokio::test]
    async fn test_find_first_not_found() {
        let stream: AsyncRecordStream<UserRecord, _> =
            AsyncRecordStream::from_reader(Cursor::new(TWO_USERS));
        let err = stream
            .find_first(&Criterion::new().field("username", "ghost"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_cancel_stops_events() {
        let mut stream: AsyncRecordStream<UserRecord, _> =
            AsyncRecordStream::from_reader(Cursor::new(TWO_USERS));
        stream.next_event().await.unwrap();
        stream.cancel();
        assert_eq!(stream.state(), StreamState::Cancelled);
        assert_eq!(stream.next_event().await.unwrap(), None);
        assert_eq!(stream.records_emitted(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_streams() {
        let users: AsyncRecordStream<UserRecord, _> =
            AsyncRecordStream::from_reader(Cursor::new("root:x:0:0:root:/root:/bin/bash\n"));
        let groups: AsyncRecordStream<GroupRecord, _> =
            AsyncRecordStream::from_reader(Cursor::new("wheel:*:10:alice\n"));

        let (users, groups) = tokio::join!(users.collect_records(), groups.collect_records());
        assert_eq!(users.unwrap().len(), 1);
        assert_eq!(groups.unwrap().len(), 1);
    }
}
