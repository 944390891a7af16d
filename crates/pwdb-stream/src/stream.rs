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

//! The record stream and its consumption modes.
//!
//! [`RecordStream`] is the one canonical producer: it pulls lines, skips
//! comments and blanks, and emits typed records followed by a single end
//! event. Everything else in this crate is a thin consumer over it — the
//! [`Iterator`] impl for incremental processing, [`collect_records`] for
//! whole-database reads, and [`find_first`] for short-circuit lookup.
//!
//! [`collect_records`]: RecordStream::collect_records
//! [`find_first`]: RecordStream::find_first

use std::fs::File;
use std::io::Read;
use std::marker::PhantomData;
use std::path::Path;

use pwdb_core::{AccountRecord, Criterion, RecordKind};

use crate::error::{StreamError, StreamResult};
use crate::event::StreamEvent;
use crate::reader::LineReader;

/// Lifecycle of one stream instance.
///
/// A stream moves `Open → Reading → Ended` in the ordinary case. `Failed`
/// (mid-stream I/O fault) and `Cancelled` (explicit abandonment) are the
/// alternate terminals. Once any terminal state is reached the underlying
/// reader has been dropped and no further events are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamState {
    /// Opened; nothing consumed yet.
    Open,
    /// At least one line consumed; more may follow.
    Reading,
    /// Natural end of input; the end event has been emitted.
    Ended,
    /// A read failed; the error was returned to the caller.
    Failed,
    /// Abandoned via [`RecordStream::cancel`] before the natural end.
    Cancelled,
}

impl StreamState {
    /// Returns true for `Ended`, `Failed`, and `Cancelled`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended | Self::Failed | Self::Cancelled)
    }
}

/// Streaming parser over one account database.
///
/// `T` selects the database: [`UserRecord`], [`GroupRecord`], or
/// [`ShadowRecord`]. Lines arrive in file order; blank lines and comment
/// lines (first non-whitespace character `#`) produce no record and are
/// not counted. Input is read incrementally, so memory stays bounded no
/// matter how large the file is.
///
/// Exactly one reader (and file handle, for the `open` constructors) is
/// held per stream, and it is released as soon as the stream reaches a
/// terminal state.
///
/// [`UserRecord`]: pwdb_core::UserRecord
/// [`GroupRecord`]: pwdb_core::GroupRecord
/// [`ShadowRecord`]: pwdb_core::ShadowRecord
///
/// # Examples
///
/// Incremental consumption via the iterator:
///
/// ```
/// use pwdb_core::UserRecord;
/// use pwdb_stream::{RecordStream, StreamEvent};
/// use std::io::Cursor;
///
/// let input = "root:x:0:0:root:/root:/bin/bash\n#comment\ndaemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin\n";
/// let stream = RecordStream::<UserRecord, _>::from_reader(Cursor::new(input));
///
/// let mut names = Vec::new();
/// for event in stream {
///     match event.unwrap() {
///         StreamEvent::Record(rec) => names.push(rec.username),
///         StreamEvent::End { records } => assert_eq!(records, 2),
///     }
/// }
/// assert_eq!(names, vec!["root", "daemon"]);
/// ```
///
/// Single-shot lookup with early cancellation:
///
/// ```
/// use pwdb_core::{Criterion, UserRecord};
/// use pwdb_stream::RecordStream;
/// use std::io::Cursor;
///
/// let input = "root:x:0:0:root:/root:/bin/bash\ndaemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin\n";
/// let stream = RecordStream::<UserRecord, _>::from_reader(Cursor::new(input));
/// let rec = stream.find_first(&Criterion::new().field("username", "daemon")).unwrap();
/// assert_eq!(rec.uid, Some(1));
/// ```
#[derive(Debug)]
pub struct RecordStream<T: AccountRecord, R: Read = File> {
    reader: Option<LineReader<R>>,
    state: StreamState,
    emitted: usize,
    _record: PhantomData<fn() -> T>,
}

impl<T: AccountRecord> RecordStream<T, File> {
    /// Opens the default database file for `T`'s kind.
    ///
    /// user → `/etc/passwd`, group → `/etc/group`, shadow → `/etc/shadow`.
    ///
    /// # Errors
    ///
    /// [`StreamError::Open`] if the file cannot be opened. The failure is
    /// the returned value; nothing is thrown and no partial stream exists.
    pub fn open() -> StreamResult<Self> {
        Self::open_path(T::KIND.default_path())
    }

    /// Opens the database file at `path`.
    ///
    /// # Errors
    ///
    /// [`StreamError::Open`] if the file cannot be opened.
    pub fn open_path(path: impl AsRef<Path>) -> StreamResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StreamError::open(path, source))?;
        Ok(Self::from_reader(file))
    }
}

impl<T: AccountRecord, R: Read> RecordStream<T, R> {
    /// Wraps an already-open reader.
    ///
    /// Infallible: with no file to open, the first error that can occur is
    /// an I/O fault during reading.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Some(LineReader::new(reader)),
            state: StreamState::Open,
            emitted: 0,
            _record: PhantomData,
        }
    }

    /// Wraps a reader with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: Some(LineReader::with_capacity(reader, capacity)),
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
    /// After the natural end this is a no-op (the reader is already gone);
    /// likewise after a failure. Otherwise the state becomes
    /// [`StreamState::Cancelled`] and no further events are produced.
    pub fn cancel(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.state = StreamState::Cancelled;
        self.reader = None;
    }

    /// Pulls the next event.
    ///
    /// Returns `Ok(Some(Record))` for each non-comment, non-blank line in
    /// file order, then `Ok(Some(End))` exactly once, then `Ok(None)`
    /// forever. A mid-stream I/O fault returns `Err`, moves the stream to
    /// [`StreamState::Failed`], and releases the reader; subsequent calls
    /// return `Ok(None)`.
    pub fn next_event(&mut self) -> StreamResult<Option<StreamEvent<T>>> {
        loop {
            let next = match self.reader.as_mut() {
                Some(reader) => reader.next_line(),
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
                    // The untrimmed line is extracted; only the skip test
                    // trims.
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

    /// Consumes the stream into an iterator of records only.
    ///
    /// The end event is dropped; errors still come through.
    pub fn records(self) -> Records<T, R> {
        Records { stream: self }
    }

    /// Buffers every record into a vector.
    ///
    /// An empty or all-comment input yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Any [`StreamError::Read`] fault encountered before the end.
    pub fn collect_records(mut self) -> StreamResult<Vec<T>> {
        let mut records = Vec::new();
        loop {
            match self.next_event()? {
                Some(StreamEvent::Record(record)) => records.push(record),
                Some(StreamEvent::End { .. }) | None => return Ok(records),
            }
        }
    }

    /// Returns the first record matching `criterion`, cancelling the
    /// stream on the spot.
    ///
    /// Records are tested in file order; on a match the underlying reader
    /// is dropped before any further line is pulled. Reaching the end
    /// without a match is the distinct not-found failure.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotFound`] when nothing matches;
    /// [`StreamError::Read`] if the input faults first.
    pub fn find_first(mut self, criterion: &Criterion) -> StreamResult<T> {
        loop {
            match self.next_event()? {
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

impl<T: AccountRecord, R: Read> Iterator for RecordStream<T, R> {
    type Item = StreamResult<StreamEvent<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

/// Iterator over records only, with the end event dropped.
///
/// Produced by [`RecordStream::records`].
pub struct Records<T: AccountRecord, R: Read> {
    stream: RecordStream<T, R>,
}

impl<T: AccountRecord, R: Read> Records<T, R> {
    /// Current lifecycle state of the underlying stream.
    #[inline]
    pub fn state(&self) -> StreamState {
        self.stream.state()
    }
}

impl<T: AccountRecord, R: Read> Iterator for Records<T, R> {
    type Item = StreamResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stream.next_event() {
                Ok(Some(StreamEvent::Record(record))) => return Some(Ok(record)),
                Ok(Some(StreamEvent::End { .. })) => continue,
                Ok(None) => return None,
                Err(error) => return Some(Err(error)),
            }
        }
    }
}

/// Opens a stream over the default database file for `T`.
///
/// # Errors
///
/// [`StreamError::Open`] if the file cannot be opened.
///
/// # Examples
///
/// ```no_run
/// use pwdb_core::UserRecord;
///
/// let stream = pwdb_stream::stream::<UserRecord>().unwrap();
/// for record in stream.records() {
///     println!("{}", record.unwrap().username);
/// }
/// ```
pub fn stream<T: AccountRecord>() -> StreamResult<RecordStream<T, File>> {
    RecordStream::open()
}

/// Opens a stream over the database file at `path`.
///
/// # Errors
///
/// [`StreamError::Open`] if the file cannot be opened.
pub fn stream_path<T: AccountRecord, P: AsRef<Path>>(
    path: P,
) -> StreamResult<RecordStream<T, File>> {
    RecordStream::open_path(path)
}
