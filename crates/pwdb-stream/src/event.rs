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

//! Events emitted while streaming a database.

/// One message from a record stream.
///
/// A stream delivers zero or more [`Record`] events in file order, then
/// exactly one [`End`] event, then nothing. Errors travel separately as the
/// `Err` side of each pull.
///
/// [`Record`]: StreamEvent::Record
/// [`End`]: StreamEvent::End
///
/// # Examples
///
/// ```
/// use pwdb_core::UserRecord;
/// use pwdb_stream::StreamEvent;
///
/// let event: StreamEvent<UserRecord> = StreamEvent::End { records: 3 };
/// assert!(event.is_end());
/// assert!(event.as_record().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent<T> {
    /// One parsed record.
    Record(T),
    /// End of the stream; no further events follow.
    End {
        /// Number of records emitted before the end.
        records: usize,
    },
}

impl<T> StreamEvent<T> {
    /// Returns true if this event carries a record.
    #[inline]
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Returns true if this is the end-of-stream event.
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End { .. })
    }

    /// Get the record if this event carries one.
    pub fn as_record(&self) -> Option<&T> {
        match self {
            Self::Record(record) => Some(record),
            Self::End { .. } => None,
        }
    }

    /// Consume the event, keeping the record if present.
    pub fn into_record(self) -> Option<T> {
        match self {
            Self::Record(record) => Some(record),
            Self::End { .. } => None,
        }
    }
}
