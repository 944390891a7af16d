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

//! Async line-oriented input, mirroring [`LineReader`](crate::reader::LineReader).
//!
//! Same contract as the sync reader: forward-only, one-based line numbers,
//! trailing `\n`/`\r\n` stripped. The only difference is that waiting for
//! bytes yields to the tokio runtime instead of blocking the thread.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::error::{StreamError, StreamResult};

/// Buffered async reader that yields `(line_number, line)` pairs.
pub struct AsyncLineReader<R: AsyncRead + Unpin> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl<R: AsyncRead + Unpin> AsyncLineReader<R> {
    /// Wraps `reader` with the default buffer capacity.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Wraps `reader` with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Number of the most recently returned line; zero before the first.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next line, stripping the terminator.
    ///
    /// Returns `Ok(None)` at end of input. Errors carry the number of the
    /// line being read when the fault occurred.
    pub async fn next_line(&mut self) -> StreamResult<Option<(usize, String)>> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer).await {
            Ok(0) => Ok(None), // EOF
            Ok(_) => {
                self.line_number += 1;
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

#[cfg(all(test, feature = "async"))]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn test_reads_numbered_lines() {
        let mut reader = AsyncLineReader::new(Cursor::new("a\nb\nc\n"));
        assert_eq!(reader.next_line().await.unwrap(), Some((1, "a".to_string())));
        assert_eq!(reader.next_line().await.unwrap(), Some((2, "b".to_string())));
        assert_eq!(reader.next_line().await.unwrap(), Some((3, "c".to_string())));
        assert_eq!(reader.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_strips_crlf() {
        let mut reader = AsyncLineReader::new(Cursor::new("one\r\ntwo\r\n"));
        assert_eq!(reader.next_line().await.unwrap(), Some((1, "one".to_string())));
        assert_eq!(reader.next_line().await.unwrap(), Some((2, "two".to_string())));
    }

    #[tokio::test]
    async fn test_final_line_without_terminator() {
        let mut reader = AsyncLineReader::new(Cursor::new("only"));
        assert_eq!(reader.next_line().await.unwrap(), Some((1, "only".to_string())));
        assert_eq!(reader.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_eof_is_sticky() {
        let mut reader = AsyncLineReader::new(Cursor::new(""));
        assert_eq!(reader.next_line().await.unwrap(), None);
        assert_eq!(reader.next_line().await.unwrap(), None);
        assert_eq!(reader.line_number(), 0);
    }
}
