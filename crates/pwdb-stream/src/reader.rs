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

//! Line reader for record streams.
//!
//! Buffered line-by-line reading with line number tracking. Account file
//! parsing never needs lookahead (every line stands alone), so this reader
//! is strictly forward-only.
//!
//! This module is primarily an internal implementation detail of
//! [`RecordStream`](crate::RecordStream), but is exposed for callers that
//! want raw lines.

use std::io::{BufRead, BufReader, Read};

use crate::error::{StreamError, StreamResult};

/// Buffered forward-only line reader.
///
/// Reads input line-by-line, handling LF and CRLF endings, and numbers
/// lines from 1 for error reporting. I/O failures surface as
/// [`StreamError::Read`] carrying the number of the line being read.
///
/// # Examples
///
/// ```rust
/// use pwdb_stream::LineReader;
/// use std::io::Cursor;
///
/// let input = "root:x:0:0:root:/root:/bin/bash\nbin:x:1:1::/bin:/usr/sbin/nologin";
/// let mut reader = LineReader::new(Cursor::new(input));
///
/// let (number, line) = reader.next_line().unwrap().unwrap();
/// assert_eq!(number, 1);
/// assert!(line.starts_with("root:"));
///
/// let (number, _) = reader.next_line().unwrap().unwrap();
/// assert_eq!(number, 2);
///
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader with the default buffer capacity.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Get the number of the last line read (0 before the first).
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, stripped of its terminator.
    pub fn next_line(&mut self) -> StreamResult<Option<(usize, String)>> {
        self.buffer.clear();

        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => Ok(None), // EOF
            Ok(_) => {
                self.line_number += 1;

                // Drop the trailing \n or \r\n; a final unterminated line
                // comes through as-is.
                let mut end = self.buffer.len();
                if self.buffer.ends_with('\n') {
                    end -= 1;
                    if self.buffer[..end].ends_with('\r') {
                        end -= 1;
                    }
                }

                Ok(Some((self.line_number, self.buffer[..end].to_string())))
            }
            Err(source) => Err(StreamError::read(self.line_number + 1, source)),
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = StreamResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
