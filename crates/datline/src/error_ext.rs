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

//! Error context helpers for improved ergonomics.
//!
//! Extension methods on `Result<T, DatError>` that annotate errors with
//! contextual information as they propagate through the call stack, without
//! touching the original message or kind.
//!
//! # Examples
//!
//! ```rust
//! use datline::{DatResultExt, LineGrammar};
//!
//! let grammar = LineGrammar::new().named_int("MAT", 0, false);
//! let result = grammar
//!     .parse("STRUCTURE", "MAT twelve")
//!     .context("while reading line 42 of input.dat");
//!
//! let err = result.unwrap_err();
//! assert!(err.context.unwrap().contains("line 42"));
//! ```

use crate::DatError;
use std::fmt;

/// Extension trait for adding context to `Result<T, DatError>`.
pub trait DatResultExt<T> {
    /// Add context to an error.
    ///
    /// The context message is evaluated immediately; for expensive messages
    /// prefer [`with_context`](DatResultExt::with_context). Context chains:
    /// later annotations are prepended to earlier ones.
    fn context<C>(self, context: C) -> Result<T, DatError>
    where
        C: fmt::Display;

    /// Add context to an error using a closure, evaluated only on the error
    /// path.
    fn with_context<C, F>(self, f: F) -> Result<T, DatError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> DatResultExt<T> for Result<T, DatError> {
    fn context<C>(self, context: C) -> Result<T, DatError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, DatError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e, f().to_string()))
    }
}

/// If the error already has context, the new context is prepended with a
/// separator, building a chain through the call stack.
fn add_context_to_error(mut error: DatError, new_context: String) -> DatError {
    if new_context.is_empty() {
        return error;
    }
    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });
    error
}
