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

//! # datline - composable grammars for legacy condition lines
//!
//! Legacy solver input files describe thousands of distinct line formats:
//! whitespace-separated labels and typed values, sometimes with vector runs
//! whose length was read earlier on the same line, sometimes with a whole
//! sub-grammar selected by a model keyword. datline expresses each such
//! format as an immutable [`LineGrammar`] of composable components and
//! decodes matching lines into typed [`ParamContainer`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use datline::{Length, LineGrammar};
//!
//! let grammar = LineGrammar::new()
//!     .named_int("NUMDOF", 0, false)
//!     .named_int_vector("ONOFF", Length::from_field("NUMDOF"), 0, false)
//!     .named_real("VAL", 0.0, true);
//!
//! let params = grammar
//!     .parse("DESIGN CONDITIONS", "NUMDOF 2 ONOFF 1 0 VAL 0.5")
//!     .expect("line matches the grammar");
//!
//! assert_eq!(params.get_int("NUMDOF"), Some(2));
//! assert_eq!(params.get_int_vec("ONOFF"), Some(&[1, 0][..]));
//! assert_eq!(params.get_real("VAL"), Some(0.5));
//! ```
//!
//! ## Features
//!
//! - **Labeled fields**: components search for their own label, so field
//!   order in the input line does not matter
//! - **Optional fields**: omitted fields fall back to declared defaults
//! - **Dynamic vector lengths**: `Length::from_field` resolves a run's
//!   length from a previously parsed value
//! - **Switches**: a discriminator keyword selects one of several
//!   pre-registered component sequences
//! - **Documentation surfaces**: grammars render a reparseable default line
//!   and a per-field documentation table
//!
//! ## Errors
//!
//! Failures carry a programmatic [`DatErrorKind`] plus the offending field
//! and section; match on the kind, not the message. The
//! [`DatResultExt`] extension trait adds `context`/`with_context` helpers
//! for annotating errors on their way up the call stack.

// Re-export core types
pub use datline_core::{
    // Main types
    Component,
    // Errors
    DatError,
    DatErrorKind,
    DatResult,
    DocRow,
    Length,
    // Per-parse state
    LineCursor,
    LineGrammar,
    Limits,
    ParamContainer,
    Selection,
    Switch,
    Value,
};

// Error handling extensions
mod error_ext;
pub use error_ext::DatResultExt;

// Re-export the numeric conversion helpers
pub mod number {
    //! Token-to-number conversion with greedy-prefix semantics
    pub use datline_core::number::{int_from_token, real_from_token};
}
