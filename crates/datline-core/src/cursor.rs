// Datline - structured condition line grammars
//
// Copyright (c) 2025 Datline contributors.
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

//! Mutable remaining-text view of one condition line.
//!
//! Components do not advance a monotonic read pointer through the line.
//! Each component either searches for its own whitespace-delimited label
//! anywhere in the buffer, or reads "the next token from the current anchor",
//! and everything it consumed is physically removed from the buffer. Later
//! components therefore see a label-free residual line, which keeps their own
//! substring searches honest: a retained label would corrupt every subsequent
//! optional-field lookup.

use memchr::memmem;

/// A cursor over the remaining text of one line being parsed.
///
/// The raw line is padded with one space on each side at construction so the
/// whitespace-delimited label search (`" LABEL "`) also matches labels at the
/// very start or end of the line. The read position never exceeds the buffer
/// length.
#[derive(Debug, Clone)]
pub struct LineCursor {
    line: String,
    pos: usize,
}

impl LineCursor {
    /// Create a cursor over `raw`, anchored at the start of the line.
    pub fn new(raw: &str) -> Self {
        Self {
            line: format!(" {} ", raw),
            pos: 0,
        }
    }

    /// The text at and after the current anchor position.
    pub fn remaining(&self) -> &str {
        &self.line[self.pos..]
    }

    /// Returns true when no unread token remains.
    pub fn at_end(&self) -> bool {
        self.remaining().bytes().all(|b| b.is_ascii_whitespace())
    }

    /// Returns true if the exact, whitespace-delimited `label` exists
    /// anywhere in the remaining buffer.
    pub fn has_label(&self, label: &str) -> bool {
        self.find_label(label).is_some()
    }

    /// Remove `label` from the buffer and reposition the anchor just after
    /// where it stood. Returns false (buffer untouched) if the label is
    /// absent; the caller decides whether that is an error or an optional
    /// field to skip via [`seek_to_end`](LineCursor::seek_to_end).
    pub fn consume_label(&mut self, label: &str) -> bool {
        match self.find_label(label) {
            Some(start) => {
                self.line.replace_range(start..start + label.len(), "");
                self.pos = start.min(self.line.len());
                true
            }
            None => false,
        }
    }

    /// Move the anchor past everything, so every later read sees an empty
    /// line and optional components fall back to their defaults.
    pub fn seek_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Extract the next whitespace-delimited token after the anchor.
    ///
    /// The token is removed from the buffer and the anchor is restored to
    /// where it was before the extraction, so multiple components reading
    /// from the same anchor point do not desynchronize. Returns `None` (and
    /// leaves the buffer untouched) when only whitespace remains.
    pub fn read_token(&mut self) -> Option<String> {
        let bytes = self.line.as_bytes();
        let mut start = self.pos;
        while start < bytes.len() && bytes[start].is_ascii_whitespace() {
            start += 1;
        }
        if start == bytes.len() {
            return None;
        }
        let mut end = start;
        while end < bytes.len() && !bytes[end].is_ascii_whitespace() {
            end += 1;
        }
        let token = self.line[start..end].to_string();
        self.line.replace_range(start..end, "");
        Some(token)
    }

    /// Position of the first character of a whitespace-delimited `label`.
    fn find_label(&self, label: &str) -> Option<usize> {
        if label.is_empty() {
            return None;
        }
        let needle = format!(" {} ", label);
        memmem::find(self.line.as_bytes(), needle.as_bytes()).map(|p| p + 1)
    }
}
